use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{
    OlympiadLoader, ParticipationsByOlympiadLoader, ParticipationsByStudentLoader, SchoolLoader,
    StudentLoader, StudentsBySchoolLoader, StudentsByTeacherLoader, TeacherLoader,
    TeachersBySchoolLoader,
};
use super::{MutationRoot, QueryRoot};
use crate::config::GraphQLConfig;
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with default limits.
pub fn build_schema(state: AppState) -> AppSchema {
    build_schema_with(state, &GraphQLConfig::default())
}

/// Build the GraphQL schema and inject shared state (AppState) and the
/// relation loaders into the context.
pub fn build_schema_with(state: AppState, config: &GraphQLConfig) -> AppSchema {
    let db = &state.db;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(DataLoader::new(SchoolLoader::new(db.clone()), tokio::spawn))
    .data(DataLoader::new(TeacherLoader::new(db.clone()), tokio::spawn))
    .data(DataLoader::new(StudentLoader::new(db.clone()), tokio::spawn))
    .data(DataLoader::new(OlympiadLoader::new(db.clone()), tokio::spawn))
    .data(DataLoader::new(
        TeachersBySchoolLoader::new(db.clone()),
        tokio::spawn,
    ))
    .data(DataLoader::new(
        StudentsBySchoolLoader::new(db.clone()),
        tokio::spawn,
    ))
    .data(DataLoader::new(
        StudentsByTeacherLoader::new(db.clone()),
        tokio::spawn,
    ))
    .data(DataLoader::new(
        ParticipationsByStudentLoader::new(db.clone()),
        tokio::spawn,
    ))
    .data(DataLoader::new(
        ParticipationsByOlympiadLoader::new(db.clone()),
        tokio::spawn,
    ))
    .limit_depth(config.max_depth)
    .limit_complexity(config.max_complexity);

    if !config.introspection {
        builder = builder.disable_introspection();
    }

    // AppState is Clone; available in resolvers via ctx.data::<AppState>()
    builder.data(state).finish()
}
