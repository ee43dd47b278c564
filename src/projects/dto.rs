use serde::{Deserialize, Serialize};

/// Request body for project creation. `status` and `deadline` arrive as raw
/// strings so the service layer can answer bad values with a 400 instead of
/// a decode failure.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub deadline: Option<String>,
}

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Acknowledgement returned after deletion.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}
