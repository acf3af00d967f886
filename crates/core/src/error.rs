use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    DuplicateName(String),

    #[error("Category {0} does not exist")]
    InvalidCategory(DbId),

    #[error("Cannot delete category: {count} notes are associated with this category")]
    HasDependents { count: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),
}
