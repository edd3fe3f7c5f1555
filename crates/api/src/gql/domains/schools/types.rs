use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};

use crate::gql::common::helpers::parse_id;
use crate::gql::domains::students::types::Student;
use crate::gql::domains::teachers::types::Teacher;
use crate::gql::error::GqlError;
use crate::gql::loaders::{StudentsBySchoolLoader, TeachersBySchoolLoader};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct School {
    pub id: ID,
    pub name: String,
}

impl From<infra::models::SchoolRow> for School {
    fn from(row: infra::models::SchoolRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
        }
    }
}

#[ComplexObject]
impl School {
    async fn teachers(&self, ctx: &Context<'_>) -> Result<Vec<Teacher>> {
        let loader = ctx.data::<DataLoader<TeachersBySchoolLoader>>()?;
        let school_id = parse_id(&self.id, "school")?;

        let rows = loader
            .load_one(school_id)
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let loader = ctx.data::<DataLoader<StudentsBySchoolLoader>>()?;
        let school_id = parse_id(&self.id, "school")?;

        let rows = loader
            .load_one(school_id)
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Student::from).collect())
    }
}

#[derive(InputObject)]
pub struct CreateSchoolInput {
    pub name: String,
}
