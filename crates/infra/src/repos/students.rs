use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::StudentRow;

#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub firstname: String,
    pub lastname: String,
    pub last4_reg: String,
    pub school_id: Uuid,
    pub teacher_id: Uuid,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<StudentRow>> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, firstname, lastname, last4_reg, school_id, teacher_id, created_at
        FROM students
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<StudentRow>> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, firstname, lastname, last4_reg, school_id, teacher_id, created_at
        FROM students
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
) -> SqlxResult<Vec<StudentRow>> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, firstname, lastname, last4_reg, school_id, teacher_id, created_at
        FROM students
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn list_by_school_ids<'e>(
    executor: impl PgExecutor<'e>,
    school_ids: &[Uuid],
) -> SqlxResult<Vec<StudentRow>> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, firstname, lastname, last4_reg, school_id, teacher_id, created_at
        FROM students
        WHERE school_id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(school_ids)
    .fetch_all(executor)
    .await
}

pub async fn list_by_teacher_ids<'e>(
    executor: impl PgExecutor<'e>,
    teacher_ids: &[Uuid],
) -> SqlxResult<Vec<StudentRow>> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, firstname, lastname, last4_reg, school_id, teacher_id, created_at
        FROM students
        WHERE teacher_id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(teacher_ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateStudent,
) -> SqlxResult<StudentRow> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        INSERT INTO students (firstname, lastname, last4_reg, school_id, teacher_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, firstname, lastname, last4_reg, school_id, teacher_id, created_at
        "#,
    )
    .bind(data.firstname)
    .bind(data.lastname)
    .bind(data.last4_reg)
    .bind(data.school_id)
    .bind(data.teacher_id)
    .fetch_one(executor)
    .await
}
