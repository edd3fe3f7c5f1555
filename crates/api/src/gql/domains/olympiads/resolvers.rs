use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::lookup_id;
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::{olympiads, CreateOlympiad};

use super::types::{CreateOlympiadInput, Olympiad};

#[derive(Default)]
pub struct OlympiadQuery;

#[Object]
impl OlympiadQuery {
    async fn olympiad(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Olympiad>> {
        let Some(id) = lookup_id(&id) else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = olympiads::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Olympiad::from))
    }
}

#[derive(Default)]
pub struct OlympiadMutation;

#[Object]
impl OlympiadMutation {
    async fn create_olympiad(
        &self,
        ctx: &Context<'_>,
        input: CreateOlympiadInput,
    ) -> Result<Olympiad> {
        let state = ctx.data::<AppState>()?;

        let data = CreateOlympiad {
            name: input.name,
            date: input.date,
        };

        let row = olympiads::create(&state.db, data)
            .await
            .map_err(GqlError::from)?;
        tracing::info!(olympiad_id = %row.id, "Olympiad created");

        Ok(row.into())
    }
}
