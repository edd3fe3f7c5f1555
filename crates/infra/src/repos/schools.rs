use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::SchoolRow;

#[derive(Debug, Clone)]
pub struct CreateSchool {
    pub name: String,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<SchoolRow>> {
    sqlx::query_as::<_, SchoolRow>(
        r#"
        SELECT id, name, created_at
        FROM schools
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<SchoolRow>> {
    sqlx::query_as::<_, SchoolRow>(
        r#"
        SELECT id, name, created_at
        FROM schools
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[Uuid],
) -> SqlxResult<Vec<SchoolRow>> {
    sqlx::query_as::<_, SchoolRow>(
        r#"
        SELECT id, name, created_at
        FROM schools
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateSchool,
) -> SqlxResult<SchoolRow> {
    sqlx::query_as::<_, SchoolRow>(
        r#"
        INSERT INTO schools (name)
        VALUES ($1)
        RETURNING id, name, created_at
        "#,
    )
    .bind(data.name)
    .fetch_one(executor)
    .await
}
