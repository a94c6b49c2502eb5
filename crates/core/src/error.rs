use crate::types::DbId;

/// Domain-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by id came up empty on a path that requires the row.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },
}
