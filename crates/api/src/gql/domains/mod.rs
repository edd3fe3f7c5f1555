// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod olympiads;
pub mod participations;
pub mod schools;
pub mod students;
pub mod teachers;
