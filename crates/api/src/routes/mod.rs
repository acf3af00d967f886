pub mod categories;
pub mod health;
pub mod notes;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                 list, create
/// /categories/{id}            get, update, delete
///
/// /notes                      list, create
/// /notes/{id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/notes", notes::router())
}
