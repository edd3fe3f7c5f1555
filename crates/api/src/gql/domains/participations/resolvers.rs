use async_graphql::{Context, Object, Result, ID};

use crate::gql::common::helpers::{lookup_id, parse_id};
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::{participations, CreateParticipation};

use super::types::{CreateParticipationInput, Participation};

#[derive(Default)]
pub struct ParticipationQuery;

#[Object]
impl ParticipationQuery {
    async fn participation(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Participation>> {
        let Some(id) = lookup_id(&id) else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = participations::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Participation::from))
    }

    /// Every participation recorded for one olympiad. Unknown olympiads yield an empty list.
    async fn participations_by_olympiad(
        &self,
        ctx: &Context<'_>,
        olympiad_id: ID,
    ) -> Result<Vec<Participation>> {
        let Some(olympiad_id) = lookup_id(&olympiad_id) else {
            return Ok(Vec::new());
        };
        let state = ctx.data::<AppState>()?;

        let rows = participations::list_by_olympiad(&state.db, olympiad_id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Participation::from).collect())
    }

    #[graphql(deprecation = "Use `participationsByOlympiad`")]
    async fn participation_by_olympiad(
        &self,
        ctx: &Context<'_>,
        olympiad_id: ID,
    ) -> Result<Vec<Participation>> {
        self.participations_by_olympiad(ctx, olympiad_id).await
    }
}

#[derive(Default)]
pub struct ParticipationMutation;

#[Object]
impl ParticipationMutation {
    async fn create_participation(
        &self,
        ctx: &Context<'_>,
        input: CreateParticipationInput,
    ) -> Result<Participation> {
        let state = ctx.data::<AppState>()?;
        let student_id = parse_id(&input.student_id, "student")?;
        let olympiad_id = parse_id(&input.olympiad_id, "olympiad")?;

        let data = CreateParticipation {
            student_id,
            olympiad_id,
        };

        let row = participations::create(&state.db, data)
            .await
            .map_err(GqlError::from)?;
        tracing::info!(
            participation_id = %row.id,
            %student_id,
            %olympiad_id,
            "Participation created"
        );

        Ok(row.into())
    }
}
