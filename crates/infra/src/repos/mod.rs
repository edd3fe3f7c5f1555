pub mod olympiads;
pub mod participations;
pub mod schools;
pub mod students;
pub mod teachers;

pub use olympiads::CreateOlympiad;
pub use participations::CreateParticipation;
pub use schools::CreateSchool;
pub use students::CreateStudent;
pub use teachers::CreateTeacher;
