use std::sync::Arc;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// This enum gives us:
///   - `From<sqlx::Error>`: foreign-key violations become "<Entity> not found",
///     anything else is logged and shown to clients as a sanitized message
///   - `From<Arc<sqlx::Error>>`: the same for errors coming out of DataLoaders
///   - `GqlError::new("…")`: custom one-off messages
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    Loader(Arc<sqlx::Error>),
    MissingReference(&'static str),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::Loader(e) => {
                tracing::error!("Database error while loading relation: {e}");
                write!(f, "Internal database error")
            }
            GqlError::MissingReference(entity) => write!(f, "{entity} not found"),
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        let constraint = e
            .as_database_error()
            .filter(|db| db.is_foreign_key_violation())
            .map(|db| db.constraint().unwrap_or_default().to_string());

        match constraint {
            Some(constraint) => {
                let entity = referenced_entity(&constraint);
                tracing::warn!(%constraint, "Insert rejected: referenced {entity} does not exist");
                GqlError::MissingReference(entity)
            }
            None => GqlError::Sqlx(e),
        }
    }
}

impl From<Arc<sqlx::Error>> for GqlError {
    fn from(e: Arc<sqlx::Error>) -> Self {
        GqlError::Loader(e)
    }
}

/// Maps a foreign-key constraint name (`<table>_<column>_fkey`) to the entity
/// its column points at.
pub fn referenced_entity(constraint: &str) -> &'static str {
    if constraint.contains("school_id") {
        "School"
    } else if constraint.contains("teacher_id") {
        "Teacher"
    } else if constraint.contains("student_id") {
        "Student"
    } else if constraint.contains("olympiad_id") {
        "Olympiad"
    } else {
        "Referenced record"
    }
}

/// Extension trait that converts any `Result<T, E>` where `E: Display`
/// into `async_graphql::Result<T>` with a contextual message prefix.
///
/// Usage: `Uuid::parse_str(id).gql_err("Invalid school ID")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_names_map_to_entities() {
        assert_eq!(referenced_entity("teachers_school_id_fkey"), "School");
        assert_eq!(referenced_entity("students_teacher_id_fkey"), "Teacher");
        assert_eq!(referenced_entity("participations_student_id_fkey"), "Student");
        assert_eq!(referenced_entity("participations_olympiad_id_fkey"), "Olympiad");
        assert_eq!(referenced_entity(""), "Referenced record");
    }

    #[test]
    fn non_constraint_errors_are_sanitized() {
        let err = GqlError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, GqlError::Sqlx(_)));
        assert_eq!(err.to_string(), "Internal database error");
    }

    #[test]
    fn missing_reference_message() {
        assert_eq!(
            GqlError::MissingReference("School").to_string(),
            "School not found"
        );
    }

    #[test]
    fn gql_err_prefixes_context() {
        let parsed: Result<uuid::Uuid, _> = uuid::Uuid::parse_str("nope");
        let err = parsed.gql_err("Invalid school ID").unwrap_err();
        assert!(err.message.starts_with("Invalid school ID: "));
    }
}
