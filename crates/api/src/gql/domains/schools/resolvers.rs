use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::lookup_id;
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::{schools, CreateSchool};

use super::types::{CreateSchoolInput, School};

#[derive(Default)]
pub struct SchoolQuery;

#[Object]
impl SchoolQuery {
    async fn schools(&self, ctx: &Context<'_>) -> Result<Vec<School>> {
        let state = ctx.data::<AppState>()?;
        let rows = schools::list(&state.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(School::from).collect())
    }

    async fn school(&self, ctx: &Context<'_>, id: ID) -> Result<Option<School>> {
        let Some(id) = lookup_id(&id) else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = schools::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(School::from))
    }
}

#[derive(Default)]
pub struct SchoolMutation;

#[Object]
impl SchoolMutation {
    async fn create_school(&self, ctx: &Context<'_>, input: CreateSchoolInput) -> Result<School> {
        let state = ctx.data::<AppState>()?;

        let row = schools::create(&state.db, CreateSchool { name: input.name })
            .await
            .map_err(GqlError::from)?;
        tracing::info!(school_id = %row.id, "School created");

        Ok(row.into())
    }
}
