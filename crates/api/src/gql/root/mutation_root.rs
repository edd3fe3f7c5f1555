use async_graphql::MergedObject;

use crate::gql::domains::olympiads::OlympiadMutation;
use crate::gql::domains::participations::ParticipationMutation;
use crate::gql::domains::schools::SchoolMutation;
use crate::gql::domains::students::StudentMutation;
use crate::gql::domains::teachers::TeacherMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    OlympiadMutation,
    ParticipationMutation,
    SchoolMutation,
    StudentMutation,
    TeacherMutation,
);
