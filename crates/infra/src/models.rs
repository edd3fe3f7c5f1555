use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SchoolRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeacherRow {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub last4_reg: Option<String>,
    pub school_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub last4_reg: String,
    pub school_id: Uuid,
    pub teacher_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OlympiadRow {
    pub id: Uuid,
    pub name: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ParticipationRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub olympiad_id: Uuid,
    pub created_at: DateTime<Utc>,
}
