use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::OlympiadRow;

#[derive(Debug, Clone)]
pub struct CreateOlympiad {
    pub name: String,
    /// Falls back to the insert time when absent.
    pub date: Option<DateTime<Utc>>,
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<OlympiadRow>> {
    sqlx::query_as::<_, OlympiadRow>(
        r#"
        SELECT id, name, date, created_at
        FROM olympiads
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
) -> SqlxResult<Vec<OlympiadRow>> {
    sqlx::query_as::<_, OlympiadRow>(
        r#"
        SELECT id, name, date, created_at
        FROM olympiads
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateOlympiad,
) -> SqlxResult<OlympiadRow> {
    sqlx::query_as::<_, OlympiadRow>(
        r#"
        INSERT INTO olympiads (name, date)
        VALUES ($1, COALESCE($2, NOW()))
        RETURNING id, name, date, created_at
        "#,
    )
    .bind(data.name)
    .bind(data.date)
    .fetch_one(executor)
    .await
}
