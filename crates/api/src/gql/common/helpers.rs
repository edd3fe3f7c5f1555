use async_graphql::{Result, ID};
use uuid::Uuid;

use crate::gql::error::ResultExt;

/// Id argument of a lookup. Anything that is not a UUID cannot name a row,
/// so it is reported as absent rather than as an error.
pub fn lookup_id(id: &ID) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

/// Id carried in mutation input or on an already-resolved object.
pub fn parse_id(id: &ID, entity: &str) -> Result<Uuid> {
    Uuid::parse_str(id.as_str()).gql_err(&format!("Invalid {entity} ID"))
}
