//! Note model.
//!
//! Notes are stored with a bare `category_id`; responses always embed the
//! full category. The embedding comes from an explicit join
//! ([`NoteWithCategoryRow`]) or from a category the caller already loaded
//! ([`NoteWithCategory::from_parts`]).

use notekeeper_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::category::Category;
use super::reject_nul;

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category_id: DbId,
}

/// A note joined with its category, one row per note.
#[derive(Debug, Clone, FromRow)]
pub struct NoteWithCategoryRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category_id: DbId,
    pub category_name: String,
}

/// Note representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteWithCategory {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: Category,
}

impl NoteWithCategory {
    /// Combine a note row with the category it references.
    pub fn from_parts(note: Note, category: Category) -> Self {
        debug_assert_eq!(note.category_id, category.id);
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            category,
        }
    }
}

impl From<NoteWithCategoryRow> for NoteWithCategory {
    fn from(row: NoteWithCategoryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}

/// DTO for creating a new note.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNote {
    #[validate(
        length(min = 1, max = 100, message = "title must be 1 to 100 characters"),
        custom(function = "reject_nul")
    )]
    pub title: String,
    #[validate(custom(function = "reject_nul"))]
    pub content: String,
    pub category_id: DbId,
}

/// DTO for updating a note. All fields are replaced.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNote {
    #[validate(
        length(min = 1, max = 100, message = "title must be 1 to 100 characters"),
        custom(function = "reject_nul")
    )]
    pub title: String,
    #[validate(custom(function = "reject_nul"))]
    pub content: String,
    pub category_id: DbId,
}
