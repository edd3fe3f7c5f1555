use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::{lookup_id, parse_id};
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::{teachers, CreateTeacher};

use super::types::{CreateTeacherInput, Teacher};

#[derive(Default)]
pub struct TeacherQuery;

#[Object]
impl TeacherQuery {
    /// All teachers; `students` is resolved per teacher only when selected.
    async fn teachers(&self, ctx: &Context<'_>) -> Result<Vec<Teacher>> {
        let state = ctx.data::<AppState>()?;
        let rows = teachers::list(&state.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Teacher::from).collect())
    }

    async fn teacher(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Teacher>> {
        let Some(id) = lookup_id(&id) else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = teachers::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Teacher::from))
    }
}

#[derive(Default)]
pub struct TeacherMutation;

#[Object]
impl TeacherMutation {
    /// Fails with "School not found" when `schoolId` names no school.
    async fn create_teacher(
        &self,
        ctx: &Context<'_>,
        input: CreateTeacherInput,
    ) -> Result<Teacher> {
        let state = ctx.data::<AppState>()?;
        let school_id = parse_id(&input.school_id, "school")?;

        let data = CreateTeacher {
            firstname: input.firstname,
            lastname: input.lastname,
            last4_reg: Some(input.last4_reg),
            school_id,
        };

        let row = teachers::create(&state.db, data)
            .await
            .map_err(GqlError::from)?;
        tracing::info!(teacher_id = %row.id, %school_id, "Teacher created");

        Ok(row.into())
    }
}
