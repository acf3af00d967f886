//! Domain constants and message builders for categories and notes.
//!
//! Shared by the service layer (error and confirmation messages) and the
//! startup seeding routine (default categories).

// ---------------------------------------------------------------------------
// Entity names
// ---------------------------------------------------------------------------

/// Entity label used in `NotFound` errors for categories.
pub const ENTITY_CATEGORY: &str = "Category";

/// Entity label used in `NotFound` errors for notes.
pub const ENTITY_NOTE: &str = "Note";

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// Categories inserted on first startup when the table is empty.
pub const DEFAULT_CATEGORIES: &[&str] = &["Personal", "Work", "Ideas", "Reminder"];

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Detail for a create that collides with an existing category name.
pub const CATEGORY_EXISTS: &str = "Category already exists";

/// Detail for a rename that collides with another category's name.
pub const CATEGORY_NAME_TAKEN: &str = "Category with this name already exists";

/// Confirmation returned after a note is deleted.
pub const NOTE_DELETED: &str = "Note deleted";

/// Confirmation returned after a category is deleted.
pub fn category_deleted_message(name: &str) -> String {
    format!("Category '{name}' deleted successfully")
}

/// Whether a rename actually changes the stored name.
///
/// Comparison is exact and case-sensitive, so `"work"` -> `"Work"` counts as
/// a change and goes through the uniqueness check.
pub fn is_rename(current: &str, requested: &str) -> bool {
    current != requested
}
