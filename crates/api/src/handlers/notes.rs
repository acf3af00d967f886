//! Handlers for the `/notes` resource.
//!
//! Every note in a response carries its full category (`{id, name}`).

use axum::extract::{Path, State};
use axum::Json;
use notekeeper_core::catalog::NOTE_DELETED;
use notekeeper_core::types::DbId;
use notekeeper_db::models::note::{CreateNote, NoteWithCategory, UpdateNote};

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::services::notes;
use crate::state::AppState;

/// POST /notes
pub async fn create_note(
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<Json<NoteWithCategory>> {
    let note = notes::create(&state.pool, input).await?;

    tracing::info!(
        note_id = note.id,
        category_id = note.category.id,
        "Note created"
    );

    Ok(Json(note))
}

/// GET /notes
pub async fn list_notes(State(state): State<AppState>) -> AppResult<Json<Vec<NoteWithCategory>>> {
    let notes = notes::list(&state.pool).await?;
    Ok(Json(notes))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<NoteWithCategory>> {
    let note = notes::get(&state.pool, id).await?;
    Ok(Json(note))
}

/// PUT /notes/{id}
///
/// Replace title, content and category.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<NoteWithCategory>> {
    let note = notes::update(&state.pool, id, input).await?;

    tracing::info!(note_id = id, category_id = note.category.id, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    notes::delete(&state.pool, id).await?;

    tracing::info!(note_id = id, "Note deleted");

    Ok(Json(MessageResponse::new(NOTE_DELETED)))
}
