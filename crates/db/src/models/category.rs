//! Category model.

use notekeeper_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::reject_nul;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(
        length(min = 1, max = 50, message = "name must be 1 to 50 characters"),
        custom(function = "reject_nul")
    )]
    pub name: String,
}

/// DTO for renaming a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(
        length(min = 1, max = 50, message = "name must be 1 to 50 characters"),
        custom(function = "reject_nul")
    )]
    pub name: String,
}
