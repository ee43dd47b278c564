use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::projects::repo_types::{Project, ProjectStatus};

impl Project {
    /// All projects owned by `owner_id`, soonest deadline first. Projects
    /// without a deadline sort last; creation time breaks ties.
    pub async fn list_by_owner(db: &PgPool, owner_id: Uuid) -> anyhow::Result<Vec<Project>> {
        let rows = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, owner_id, name, description, status, deadline, created_at, updated_at
            FROM projects
            WHERE owner_id = $1
            ORDER BY deadline ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        owner_id: Uuid,
        name: &str,
        description: Option<&str>,
        status: ProjectStatus,
        deadline: Option<Date>,
    ) -> anyhow::Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (owner_id, name, description, status, deadline)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, owner_id, name, description, status, deadline, created_at, updated_at
            "#,
        )
        .bind(owner_id)
        .bind(name)
        .bind(description)
        .bind(status)
        .bind(deadline)
        .fetch_one(db)
        .await?;
        Ok(project)
    }

    /// Fetch a project only if `owner_id` owns it. A foreign project reads
    /// as absent, exactly like a missing id.
    pub async fn find_owned(
        db: &PgPool,
        owner_id: Uuid,
        id: Uuid,
    ) -> anyhow::Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, owner_id, name, description, status, deadline, created_at, updated_at
            FROM projects
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(db)
        .await?;
        Ok(project)
    }

    /// Set the status of an owned project, bumping `updated_at`. None when
    /// the id is absent or owned by someone else.
    pub async fn update_status(
        db: &PgPool,
        owner_id: Uuid,
        id: Uuid,
        status: ProjectStatus,
    ) -> anyhow::Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET status = $3, updated_at = now()
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, name, description, status, deadline, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(status)
        .fetch_optional(db)
        .await?;
        Ok(project)
    }

    /// Delete an owned project. False when the id is absent or foreign.
    pub async fn delete_owned(db: &PgPool, owner_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM projects
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
