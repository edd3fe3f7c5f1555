use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::TeacherRow;

#[derive(Debug, Clone)]
pub struct CreateTeacher {
    pub firstname: String,
    pub lastname: String,
    pub last4_reg: Option<String>,
    pub school_id: Uuid,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<TeacherRow>> {
    sqlx::query_as::<_, TeacherRow>(
        r#"
        SELECT id, firstname, lastname, last4_reg, school_id, created_at
        FROM teachers
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<TeacherRow>> {
    sqlx::query_as::<_, TeacherRow>(
        r#"
        SELECT id, firstname, lastname, last4_reg, school_id, created_at
        FROM teachers
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
) -> SqlxResult<Vec<TeacherRow>> {
    sqlx::query_as::<_, TeacherRow>(
        r#"
        SELECT id, firstname, lastname, last4_reg, school_id, created_at
        FROM teachers
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

/// Teachers of several schools at once, ordered so each school's group keeps
/// creation order.
pub async fn list_by_school_ids<'e>(
    executor: impl PgExecutor<'e>,
    school_ids: &[Uuid],
) -> SqlxResult<Vec<TeacherRow>> {
    sqlx::query_as::<_, TeacherRow>(
        r#"
        SELECT id, firstname, lastname, last4_reg, school_id, created_at
        FROM teachers
        WHERE school_id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(school_ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateTeacher,
) -> SqlxResult<TeacherRow> {
    sqlx::query_as::<_, TeacherRow>(
        r#"
        INSERT INTO teachers (firstname, lastname, last4_reg, school_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, firstname, lastname, last4_reg, school_id, created_at
        "#,
    )
    .bind(data.firstname)
    .bind(data.lastname)
    .bind(data.last4_reg)
    .bind(data.school_id)
    .fetch_one(executor)
    .await
}
