//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::Json;
use notekeeper_core::catalog::category_deleted_message;
use notekeeper_core::types::DbId;
use notekeeper_db::models::category::{Category, CreateCategory, UpdateCategory};

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::services::categories;
use crate::state::AppState;

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<Json<Category>> {
    let category = categories::create(&state.pool, input).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok(Json(category))
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = categories::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = categories::get(&state.pool, id).await?;
    Ok(Json(category))
}

/// PUT /categories/{id}
///
/// Rename a category.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = categories::update(&state.pool, id, input).await?;

    tracing::info!(category_id = id, name = %category.name, "Category updated");

    Ok(Json(category))
}

/// DELETE /categories/{id}
///
/// Refused while any note still references the category.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let category = categories::delete(&state.pool, id).await?;

    tracing::info!(category_id = id, name = %category.name, "Category deleted");

    Ok(Json(MessageResponse::new(category_deleted_message(
        &category.name,
    ))))
}
