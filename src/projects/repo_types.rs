use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Project status. Wire values match the labels shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status")]
pub enum ProjectStatus {
    Planned,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Completed,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Planned
    }
}

impl ProjectStatus {
    /// Parse a client-supplied status; anything outside the set is None.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Planned" => Some(Self::Planned),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Project record in the database, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub owner_id: Uuid, // set at creation, never changes
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub deadline: Option<Date>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_planned() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Planned);
    }

    #[test]
    fn parse_accepts_the_three_known_statuses() {
        assert_eq!(ProjectStatus::parse("Planned"), Some(ProjectStatus::Planned));
        assert_eq!(
            ProjectStatus::parse("In Progress"),
            Some(ProjectStatus::InProgress)
        );
        assert_eq!(
            ProjectStatus::parse("Completed"),
            Some(ProjectStatus::Completed)
        );
    }

    #[test]
    fn parse_rejects_anything_else() {
        assert_eq!(ProjectStatus::parse("Archived"), None);
        assert_eq!(ProjectStatus::parse("planned"), None);
        assert_eq!(ProjectStatus::parse(""), None);
    }

    #[test]
    fn status_serializes_to_ui_labels() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            r#""In Progress""#
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Planned).unwrap(),
            r#""Planned""#
        );
    }

    #[test]
    fn status_deserializes_from_ui_labels() {
        let status: ProjectStatus = serde_json::from_str(r#""In Progress""#).unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
        assert!(serde_json::from_str::<ProjectStatus>(r#""Archived""#).is_err());
    }
}
