use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};

use crate::gql::common::helpers::parse_id;
use crate::gql::domains::schools::types::School;
use crate::gql::domains::students::types::Student;
use crate::gql::error::GqlError;
use crate::gql::loaders::{SchoolLoader, StudentsByTeacherLoader};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Teacher {
    pub id: ID,
    pub firstname: String,
    pub lastname: String,
    #[graphql(name = "last4Reg")]
    pub last4_reg: Option<String>,
    pub school_id: ID,
}

impl From<infra::models::TeacherRow> for Teacher {
    fn from(row: infra::models::TeacherRow) -> Self {
        Self {
            id: row.id.into(),
            firstname: row.firstname,
            lastname: row.lastname,
            last4_reg: row.last4_reg,
            school_id: row.school_id.into(),
        }
    }
}

#[ComplexObject]
impl Teacher {
    async fn school(&self, ctx: &Context<'_>) -> Result<Option<School>> {
        let loader = ctx.data::<DataLoader<SchoolLoader>>()?;
        let school_id = parse_id(&self.school_id, "school")?;

        let row = loader.load_one(school_id).await.map_err(GqlError::from)?;
        Ok(row.map(School::from))
    }

    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let loader = ctx.data::<DataLoader<StudentsByTeacherLoader>>()?;
        let teacher_id = parse_id(&self.id, "teacher")?;

        let rows = loader
            .load_one(teacher_id)
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Student::from).collect())
    }
}

#[derive(InputObject)]
pub struct CreateTeacherInput {
    pub firstname: String,
    pub lastname: String,
    #[graphql(name = "last4Reg")]
    pub last4_reg: String,
    pub school_id: ID,
}
