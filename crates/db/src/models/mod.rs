//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` create/update DTOs for request bodies

use std::borrow::Cow;

use validator::ValidationError;

pub mod category;
pub mod note;

/// Reject strings containing NUL, which PostgreSQL text columns cannot store.
pub(crate) fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("nul_character");
        err.message = Some(Cow::Borrowed("must not contain NUL characters"));
        return Err(err);
    }
    Ok(())
}
