use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::ParticipationRow;

#[derive(Debug, Clone)]
pub struct CreateParticipation {
    pub student_id: Uuid,
    pub olympiad_id: Uuid,
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<ParticipationRow>> {
    sqlx::query_as::<_, ParticipationRow>(
        r#"
        SELECT id, student_id, olympiad_id, created_at
        FROM participations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_olympiad<'e>(
    executor: impl PgExecutor<'e>,
    olympiad_id: Uuid,
) -> SqlxResult<Vec<ParticipationRow>> {
    sqlx::query_as::<_, ParticipationRow>(
        r#"
        SELECT id, student_id, olympiad_id, created_at
        FROM participations
        WHERE olympiad_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(olympiad_id)
    .fetch_all(executor)
    .await
}

pub async fn list_by_olympiad_ids<'e>(
    executor: impl PgExecutor<'e>,
    olympiad_ids: &[Uuid],
) -> SqlxResult<Vec<ParticipationRow>> {
    sqlx::query_as::<_, ParticipationRow>(
        r#"
        SELECT id, student_id, olympiad_id, created_at
        FROM participations
        WHERE olympiad_id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(olympiad_ids)
    .fetch_all(executor)
    .await
}

pub async fn list_by_student_ids<'e>(
    executor: impl PgExecutor<'e>,
    student_ids: &[Uuid],
) -> SqlxResult<Vec<ParticipationRow>> {
    sqlx::query_as::<_, ParticipationRow>(
        r#"
        SELECT id, student_id, olympiad_id, created_at
        FROM participations
        WHERE student_id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(student_ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateParticipation,
) -> SqlxResult<ParticipationRow> {
    sqlx::query_as::<_, ParticipationRow>(
        r#"
        INSERT INTO participations (student_id, olympiad_id)
        VALUES ($1, $2)
        RETURNING id, student_id, olympiad_id, created_at
        "#,
    )
    .bind(data.student_id)
    .bind(data.olympiad_id)
    .fetch_one(executor)
    .await
}
