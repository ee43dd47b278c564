use sqlx::PgPool;
use time::{macros::format_description, Date};
use uuid::Uuid;

use crate::error::ApiError;
use crate::projects::dto::CreateProjectRequest;
use crate::projects::repo_types::{Project, ProjectStatus};

pub async fn list(db: &PgPool, owner_id: Uuid) -> Result<Vec<Project>, ApiError> {
    Ok(Project::list_by_owner(db, owner_id).await?)
}

pub async fn create(
    db: &PgPool,
    owner_id: Uuid,
    req: CreateProjectRequest,
) -> Result<Project, ApiError> {
    let (name, description, status, deadline) = validate_create(req)?;
    Ok(Project::create(db, owner_id, &name, description.as_deref(), status, deadline).await?)
}

pub async fn get(db: &PgPool, owner_id: Uuid, id: Uuid) -> Result<Project, ApiError> {
    Project::find_owned(db, owner_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".into()))
}

pub async fn update_status(
    db: &PgPool,
    owner_id: Uuid,
    id: Uuid,
    status: Option<String>,
) -> Result<Project, ApiError> {
    let status = status
        .as_deref()
        .and_then(ProjectStatus::parse)
        .ok_or_else(|| ApiError::Validation("Invalid status".into()))?;

    Project::update_status(db, owner_id, id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".into()))
}

pub async fn delete(db: &PgPool, owner_id: Uuid, id: Uuid) -> Result<(), ApiError> {
    if Project::delete_owned(db, owner_id, id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Project not found".into()))
    }
}

fn validate_create(
    req: CreateProjectRequest,
) -> Result<(String, Option<String>, ProjectStatus, Option<Date>), ApiError> {
    let name = req
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::Validation("Project name is required".into()))?;

    let status = match req.status.as_deref() {
        None => ProjectStatus::default(),
        Some(s) => ProjectStatus::parse(s)
            .ok_or_else(|| ApiError::Validation("Invalid status".into()))?,
    };

    let deadline = parse_deadline(req.deadline.as_deref())?;

    Ok((name, req.description, status, deadline))
}

fn parse_deadline(input: Option<&str>) -> Result<Option<Date>, ApiError> {
    match input {
        // An empty date field from a form means "no deadline".
        None | Some("") => Ok(None),
        Some(s) => {
            let format = format_description!("[year]-[month]-[day]");
            Date::parse(s, &format)
                .map(Some)
                .map_err(|_| ApiError::Validation("Invalid deadline".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use time::Month;

    fn request(name: Option<&str>, status: Option<&str>, deadline: Option<&str>) -> CreateProjectRequest {
        CreateProjectRequest {
            name: name.map(str::to_string),
            description: None,
            status: status.map(str::to_string),
            deadline: deadline.map(str::to_string),
        }
    }

    #[test]
    fn create_requires_a_name() {
        for name in [None, Some(""), Some("   ")] {
            let err = validate_create(request(name, None, None)).unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn create_defaults_status_to_planned() {
        let (name, _, status, deadline) =
            validate_create(request(Some("Birdhouse"), None, None)).unwrap();
        assert_eq!(name, "Birdhouse");
        assert_eq!(status, ProjectStatus::Planned);
        assert!(deadline.is_none());
    }

    #[test]
    fn create_accepts_a_known_status() {
        let (_, _, status, _) =
            validate_create(request(Some("Birdhouse"), Some("In Progress"), None)).unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn create_rejects_an_unknown_status() {
        let err =
            validate_create(request(Some("Birdhouse"), Some("Archived"), None)).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn create_parses_the_deadline() {
        let (_, _, _, deadline) =
            validate_create(request(Some("Birdhouse"), None, Some("2026-08-31"))).unwrap();
        let deadline = deadline.unwrap();
        assert_eq!(deadline.year(), 2026);
        assert_eq!(deadline.month(), Month::August);
        assert_eq!(deadline.day(), 31);
    }

    #[test]
    fn create_rejects_a_malformed_deadline() {
        let err = validate_create(request(Some("Birdhouse"), None, Some("next tuesday")))
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_deadline_means_none() {
        assert!(parse_deadline(Some("")).unwrap().is_none());
        assert!(parse_deadline(None).unwrap().is_none());
    }
}
