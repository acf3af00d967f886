//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async data-access
//! methods that accept `&mut PgConnection` as the first argument, so they
//! run inside whatever transaction the caller opened with
//! [`crate::with_transaction`].

pub mod category_repo;
pub mod note_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
