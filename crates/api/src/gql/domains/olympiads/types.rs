use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::gql::common::helpers::parse_id;
use crate::gql::domains::participations::types::Participation;
use crate::gql::error::GqlError;
use crate::gql::loaders::ParticipationsByOlympiadLoader;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Olympiad {
    pub id: ID,
    pub name: String,
    pub date: DateTime<Utc>,
}

impl From<infra::models::OlympiadRow> for Olympiad {
    fn from(row: infra::models::OlympiadRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            date: row.date,
        }
    }
}

#[ComplexObject]
impl Olympiad {
    async fn participations(&self, ctx: &Context<'_>) -> Result<Vec<Participation>> {
        let loader = ctx.data::<DataLoader<ParticipationsByOlympiadLoader>>()?;
        let olympiad_id = parse_id(&self.id, "olympiad")?;

        let rows = loader
            .load_one(olympiad_id)
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Participation::from).collect())
    }

    #[graphql(deprecation = "Use `participations`")]
    async fn participation(&self, ctx: &Context<'_>) -> Result<Vec<Participation>> {
        self.participations(ctx).await
    }
}

#[derive(InputObject)]
pub struct CreateOlympiadInput {
    pub name: String,
    /// Defaults to the time of creation.
    pub date: Option<DateTime<Utc>>,
}
