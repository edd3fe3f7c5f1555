use async_graphql::MergedObject;

use crate::gql::domains::olympiads::OlympiadQuery;
use crate::gql::domains::participations::ParticipationQuery;
use crate::gql::domains::schools::SchoolQuery;
use crate::gql::domains::students::StudentQuery;
use crate::gql::domains::teachers::TeacherQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    OlympiadQuery,
    ParticipationQuery,
    SchoolQuery,
    StudentQuery,
    TeacherQuery,
);
