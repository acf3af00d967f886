//! Note service: CRUD with category-existence checks and the category
//! embedded in every result.

use notekeeper_core::catalog::ENTITY_NOTE;
use notekeeper_core::error::CoreError;
use notekeeper_core::types::DbId;
use notekeeper_db::models::category::Category;
use notekeeper_db::models::note::{CreateNote, NoteWithCategory, UpdateNote};
use notekeeper_db::repositories::{CategoryRepo, NoteRepo};
use notekeeper_db::{with_transaction, DbPool};
use sqlx::PgConnection;
use validator::Validate;

use crate::error::{AppError, AppResult};

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_NOTE,
        id,
    }
}

/// Load the category a note write points at, or fail with `InvalidCategory`.
async fn require_category(conn: &mut PgConnection, category_id: DbId) -> AppResult<Category> {
    let category = CategoryRepo::find_by_id(conn, category_id)
        .await?
        .ok_or(CoreError::InvalidCategory(category_id))?;
    Ok(category)
}

/// Map a foreign key violation on a note write to `InvalidCategory`.
///
/// Covers a category deleted between [`require_category`] and the write.
fn category_vanished(category_id: DbId) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            CoreError::InvalidCategory(category_id).into()
        }
        _ => err.into(),
    }
}

/// Create a note in an existing category.
pub async fn create(pool: &DbPool, input: CreateNote) -> AppResult<NoteWithCategory> {
    input.validate()?;
    with_transaction(pool, move |conn| Box::pin(create_in(conn, input))).await
}

async fn create_in(conn: &mut PgConnection, input: CreateNote) -> AppResult<NoteWithCategory> {
    let category = require_category(conn, input.category_id).await?;
    let note = NoteRepo::create(conn, &input)
        .await
        .map_err(category_vanished(input.category_id))?;
    Ok(NoteWithCategory::from_parts(note, category))
}

/// List every note with its category, in insertion order.
pub async fn list(pool: &DbPool) -> AppResult<Vec<NoteWithCategory>> {
    Ok(with_transaction(pool, |conn| Box::pin(NoteRepo::list_with_category(conn))).await?)
}

/// Fetch one note with its category. Fails with `NotFound` if absent.
pub async fn get(pool: &DbPool, id: DbId) -> AppResult<NoteWithCategory> {
    let note = with_transaction(pool, move |conn| {
        Box::pin(NoteRepo::find_with_category(conn, id))
    })
    .await?;
    Ok(note.ok_or_else(|| not_found(id))?)
}

/// Replace a note's title, content and category.
///
/// Fails with `NotFound` if the note is absent (checked first), then with
/// `InvalidCategory` if the new category does not exist.
pub async fn update(pool: &DbPool, id: DbId, input: UpdateNote) -> AppResult<NoteWithCategory> {
    input.validate()?;
    with_transaction(pool, move |conn| Box::pin(update_in(conn, id, input))).await
}

async fn update_in(
    conn: &mut PgConnection,
    id: DbId,
    input: UpdateNote,
) -> AppResult<NoteWithCategory> {
    if NoteRepo::find_by_id(conn, id).await?.is_none() {
        return Err(not_found(id).into());
    }
    let category = require_category(conn, input.category_id).await?;

    let note = NoteRepo::update(conn, id, &input)
        .await
        .map_err(category_vanished(input.category_id))?
        .ok_or_else(|| not_found(id))?;
    Ok(NoteWithCategory::from_parts(note, category))
}

/// Delete a note. Fails with `NotFound` if absent.
pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
    let deleted = with_transaction(pool, move |conn| Box::pin(NoteRepo::delete(conn, id))).await?;
    if !deleted {
        return Err(not_found(id).into());
    }
    Ok(())
}
