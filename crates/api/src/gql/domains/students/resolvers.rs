use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::{lookup_id, parse_id};
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::{students, CreateStudent};

use super::types::{CreateStudentInput, Student};

#[derive(Default)]
pub struct StudentQuery;

#[Object]
impl StudentQuery {
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let state = ctx.data::<AppState>()?;
        let rows = students::list(&state.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn student(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Student>> {
        let Some(id) = lookup_id(&id) else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = students::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Student::from))
    }
}

#[derive(Default)]
pub struct StudentMutation;

#[Object]
impl StudentMutation {
    /// The school and teacher must both exist; the store rejects the insert otherwise.
    async fn create_student(
        &self,
        ctx: &Context<'_>,
        input: CreateStudentInput,
    ) -> Result<Student> {
        let state = ctx.data::<AppState>()?;
        let school_id = parse_id(&input.school_id, "school")?;
        let teacher_id = parse_id(&input.teacher_id, "teacher")?;

        let data = CreateStudent {
            firstname: input.firstname,
            lastname: input.lastname,
            last4_reg: input.last4_reg,
            school_id,
            teacher_id,
        };

        let row = students::create(&state.db, data)
            .await
            .map_err(GqlError::from)?;
        tracing::info!(student_id = %row.id, %school_id, %teacher_id, "Student created");

        Ok(row.into())
    }
}
