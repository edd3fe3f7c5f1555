//! Batched relation loaders.
//!
//! Every nested field goes through one of these, so resolving a relation for
//! N parents costs one `= ANY($1)` query instead of N lookups. Loaders keyed
//! by a parent id return the (possibly empty) group of children for it.

use async_graphql::dataloader::Loader;
use infra::db::Db;
use infra::models::{OlympiadRow, ParticipationRow, SchoolRow, StudentRow, TeacherRow};
use infra::repos::{olympiads, participations, schools, students, teachers};
use std::{collections::HashMap, future::Future, hash::Hash, sync::Arc};
use uuid::Uuid;

fn group_by<K, V>(rows: Vec<V>, key: impl Fn(&V) -> K) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for row in rows {
        groups.entry(key(&row)).or_default().push(row);
    }
    groups
}

// SchoolLoader - batch load schools by ID
#[derive(Clone)]
pub struct SchoolLoader {
    pool: Db,
}

impl SchoolLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for SchoolLoader {
    type Value = SchoolRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = schools::list_by_ids(&pool, &ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// TeacherLoader - batch load teachers by ID
#[derive(Clone)]
pub struct TeacherLoader {
    pool: Db,
}

impl TeacherLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for TeacherLoader {
    type Value = TeacherRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = teachers::list_by_ids(&pool, &ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// StudentLoader - batch load students by ID
#[derive(Clone)]
pub struct StudentLoader {
    pool: Db,
}

impl StudentLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for StudentLoader {
    type Value = StudentRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = students::list_by_ids(&pool, &ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// OlympiadLoader - batch load olympiads by ID
#[derive(Clone)]
pub struct OlympiadLoader {
    pool: Db,
}

impl OlympiadLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for OlympiadLoader {
    type Value = OlympiadRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = olympiads::list_by_ids(&pool, &ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// TeachersBySchoolLoader - teachers grouped by school ID
#[derive(Clone)]
pub struct TeachersBySchoolLoader {
    pool: Db,
}

impl TeachersBySchoolLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for TeachersBySchoolLoader {
    type Value = Vec<TeacherRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = teachers::list_by_school_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;
            Ok(group_by(rows, |r| r.school_id))
        }
    }
}

// StudentsBySchoolLoader - students grouped by school ID
#[derive(Clone)]
pub struct StudentsBySchoolLoader {
    pool: Db,
}

impl StudentsBySchoolLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for StudentsBySchoolLoader {
    type Value = Vec<StudentRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = students::list_by_school_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;
            Ok(group_by(rows, |r| r.school_id))
        }
    }
}

// StudentsByTeacherLoader - students grouped by teacher ID
#[derive(Clone)]
pub struct StudentsByTeacherLoader {
    pool: Db,
}

impl StudentsByTeacherLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for StudentsByTeacherLoader {
    type Value = Vec<StudentRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = students::list_by_teacher_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;
            Ok(group_by(rows, |r| r.teacher_id))
        }
    }
}

// ParticipationsByStudentLoader - participations grouped by student ID
#[derive(Clone)]
pub struct ParticipationsByStudentLoader {
    pool: Db,
}

impl ParticipationsByStudentLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for ParticipationsByStudentLoader {
    type Value = Vec<ParticipationRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = participations::list_by_student_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;
            Ok(group_by(rows, |r| r.student_id))
        }
    }
}

// ParticipationsByOlympiadLoader - participations grouped by olympiad ID
#[derive(Clone)]
pub struct ParticipationsByOlympiadLoader {
    pool: Db,
}

impl ParticipationsByOlympiadLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for ParticipationsByOlympiadLoader {
    type Value = Vec<ParticipationRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = participations::list_by_olympiad_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;
            Ok(group_by(rows, |r| r.olympiad_id))
        }
    }
}
