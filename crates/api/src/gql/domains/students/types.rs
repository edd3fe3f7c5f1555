use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::gql::common::helpers::parse_id;
use crate::gql::domains::participations::types::Participation;
use crate::gql::domains::schools::types::School;
use crate::gql::domains::teachers::types::Teacher;
use crate::gql::error::GqlError;
use crate::gql::loaders::{ParticipationsByStudentLoader, SchoolLoader, TeacherLoader};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Student {
    pub id: ID,
    pub firstname: String,
    pub lastname: String,
    #[graphql(name = "last4Reg")]
    pub last4_reg: String,
    pub teacher_id: ID,
    pub school_id: ID,
    pub created_at: DateTime<Utc>,
}

impl From<infra::models::StudentRow> for Student {
    fn from(row: infra::models::StudentRow) -> Self {
        Self {
            id: row.id.into(),
            firstname: row.firstname,
            lastname: row.lastname,
            last4_reg: row.last4_reg,
            teacher_id: row.teacher_id.into(),
            school_id: row.school_id.into(),
            created_at: row.created_at,
        }
    }
}

#[ComplexObject]
impl Student {
    async fn teacher(&self, ctx: &Context<'_>) -> Result<Teacher> {
        let loader = ctx.data::<DataLoader<TeacherLoader>>()?;
        let teacher_id = parse_id(&self.teacher_id, "teacher")?;

        match loader.load_one(teacher_id).await.map_err(GqlError::from)? {
            Some(row) => Ok(row.into()),
            None => Err(GqlError::new("Teacher not found").into()),
        }
    }

    async fn school(&self, ctx: &Context<'_>) -> Result<School> {
        let loader = ctx.data::<DataLoader<SchoolLoader>>()?;
        let school_id = parse_id(&self.school_id, "school")?;

        match loader.load_one(school_id).await.map_err(GqlError::from)? {
            Some(row) => Ok(row.into()),
            None => Err(GqlError::new("School not found").into()),
        }
    }

    async fn participations(&self, ctx: &Context<'_>) -> Result<Vec<Participation>> {
        let loader = ctx.data::<DataLoader<ParticipationsByStudentLoader>>()?;
        let student_id = parse_id(&self.id, "student")?;

        let rows = loader
            .load_one(student_id)
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Participation::from).collect())
    }
}

#[derive(InputObject)]
pub struct CreateStudentInput {
    pub firstname: String,
    pub lastname: String,
    #[graphql(name = "last4Reg")]
    pub last4_reg: String,
    pub school_id: ID,
    pub teacher_id: ID,
}
