//! Category service: CRUD with name uniqueness and the dependent-notes
//! delete guard.

use notekeeper_core::catalog::{is_rename, CATEGORY_EXISTS, CATEGORY_NAME_TAKEN, ENTITY_CATEGORY};
use notekeeper_core::error::CoreError;
use notekeeper_core::types::DbId;
use notekeeper_db::models::category::{Category, CreateCategory, UpdateCategory};
use notekeeper_db::repositories::{CategoryRepo, NoteRepo};
use notekeeper_db::{with_transaction, DbPool};
use sqlx::PgConnection;
use validator::Validate;

use crate::error::{AppError, AppResult};

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_CATEGORY,
        id,
    }
}

/// Map a unique violation on a category write to `DuplicateName`.
///
/// Covers a concurrent writer claiming the name after the lookup.
fn name_collision(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            CoreError::DuplicateName(message.to_string()).into()
        }
        _ => err.into(),
    }
}

/// Create a category. Fails with `DuplicateName` if the name is taken.
pub async fn create(pool: &DbPool, input: CreateCategory) -> AppResult<Category> {
    input.validate()?;
    with_transaction(pool, move |conn| Box::pin(create_in(conn, input))).await
}

async fn create_in(conn: &mut PgConnection, input: CreateCategory) -> AppResult<Category> {
    if CategoryRepo::find_by_name(conn, &input.name).await?.is_some() {
        return Err(CoreError::DuplicateName(CATEGORY_EXISTS.to_string()).into());
    }
    let category = CategoryRepo::create(conn, &input.name)
        .await
        .map_err(name_collision(CATEGORY_EXISTS))?;
    Ok(category)
}

/// List every category in insertion order.
pub async fn list(pool: &DbPool) -> AppResult<Vec<Category>> {
    Ok(with_transaction(pool, |conn| Box::pin(CategoryRepo::list(conn))).await?)
}

/// Fetch one category. Fails with `NotFound` if absent.
pub async fn get(pool: &DbPool, id: DbId) -> AppResult<Category> {
    let category =
        with_transaction(pool, move |conn| Box::pin(CategoryRepo::find_by_id(conn, id))).await?;
    Ok(category.ok_or_else(|| not_found(id))?)
}

/// Rename a category.
///
/// Fails with `NotFound` if absent, or `DuplicateName` if a *different*
/// category already holds the requested name. Renaming to the current name
/// is a no-op that succeeds.
pub async fn update(pool: &DbPool, id: DbId, input: UpdateCategory) -> AppResult<Category> {
    input.validate()?;
    with_transaction(pool, move |conn| Box::pin(update_in(conn, id, input))).await
}

async fn update_in(
    conn: &mut PgConnection,
    id: DbId,
    input: UpdateCategory,
) -> AppResult<Category> {
    let current = CategoryRepo::find_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !is_rename(&current.name, &input.name) {
        return Ok(current);
    }
    if CategoryRepo::find_by_name(conn, &input.name).await?.is_some() {
        return Err(CoreError::DuplicateName(CATEGORY_NAME_TAKEN.to_string()).into());
    }

    let renamed = CategoryRepo::rename(conn, id, &input.name)
        .await
        .map_err(name_collision(CATEGORY_NAME_TAKEN))?
        .ok_or_else(|| not_found(id))?;
    Ok(renamed)
}

/// Delete a category, returning the removed row.
///
/// Fails with `NotFound` if absent, or `HasDependents` while any note
/// references it.
pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<Category> {
    with_transaction(pool, move |conn| Box::pin(delete_in(conn, id))).await
}

async fn delete_in(conn: &mut PgConnection, id: DbId) -> AppResult<Category> {
    // Row lock keeps notes from being attached between the count and the delete.
    let category = CategoryRepo::find_by_id_for_update(conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let count = NoteRepo::count_by_category(conn, id).await?;
    if count > 0 {
        return Err(CoreError::HasDependents { count }.into());
    }

    if !CategoryRepo::delete(conn, id).await? {
        return Err(not_found(id).into());
    }
    Ok(category)
}
