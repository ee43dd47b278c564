use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    error::ApiError,
    projects::{
        dto::{CreateProjectRequest, DeletedResponse, UpdateStatusRequest},
        repo_types::Project,
        services,
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/:id", get(get_project))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", post(create_project))
        .route("/projects/:id", patch(update_project_status).delete(delete_project))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_projects(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = services::list(&state.db, user.id).await?;
    Ok(Json(projects))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_project(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = services::create(&state.db, user.id, payload).await?;
    info!(project_id = %project.id, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, ApiError> {
    let project = services::get(&state.db, user.id, id).await?;
    Ok(Json(project))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_project_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<Project>, ApiError> {
    let project = services::update_status(&state.db, user.id, id, payload.status).await?;
    info!(project_id = %project.id, status = ?project.status, "project status updated");
    Ok(Json(project))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError> {
    services::delete(&state.db, user.id, id).await?;
    info!(project_id = %id, "project deleted");
    Ok(Json(DeletedResponse {
        message: "Project deleted".into(),
    }))
}
