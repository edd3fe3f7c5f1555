use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};

use crate::gql::common::helpers::parse_id;
use crate::gql::domains::olympiads::types::Olympiad;
use crate::gql::domains::students::types::Student;
use crate::gql::error::GqlError;
use crate::gql::loaders::{OlympiadLoader, StudentLoader};

/// Links one student to one olympiad. The same pair may appear more than once.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Participation {
    pub id: ID,
    pub olympiad_id: ID,
    pub student_id: ID,
}

impl From<infra::models::ParticipationRow> for Participation {
    fn from(row: infra::models::ParticipationRow) -> Self {
        Self {
            id: row.id.into(),
            olympiad_id: row.olympiad_id.into(),
            student_id: row.student_id.into(),
        }
    }
}

#[ComplexObject]
impl Participation {
    async fn olympiad(&self, ctx: &Context<'_>) -> Result<Olympiad> {
        let loader = ctx.data::<DataLoader<OlympiadLoader>>()?;
        let olympiad_id = parse_id(&self.olympiad_id, "olympiad")?;

        match loader.load_one(olympiad_id).await.map_err(GqlError::from)? {
            Some(row) => Ok(row.into()),
            None => Err(GqlError::new("Olympiad not found").into()),
        }
    }

    async fn student(&self, ctx: &Context<'_>) -> Result<Student> {
        let loader = ctx.data::<DataLoader<StudentLoader>>()?;
        let student_id = parse_id(&self.student_id, "student")?;

        match loader.load_one(student_id).await.map_err(GqlError::from)? {
            Some(row) => Ok(row.into()),
            None => Err(GqlError::new("Student not found").into()),
        }
    }
}

#[derive(InputObject)]
pub struct CreateParticipationInput {
    pub student_id: ID,
    pub olympiad_id: ID,
}
