//! Note CRUD handlers.
//!
//! Create and update run the validation pipeline before touching the store.
//! A store answering `None` becomes 404; a store error becomes a generic 500
//! whose cause is only logged.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

use notekeep_core::uuid_utils::parse_id;
use notekeep_core::{validate_and_normalize, DeleteNoteResponse, Note, NoteBody};

use crate::error::ApiError;
use crate::AppState;

#[utoipa::path(post, path = "/notes", tag = "Notes",
    request_body = NoteBody,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Validation failure", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload?;
    let draft = validate_and_normalize(
        body.title.as_deref(),
        body.content.as_deref(),
        &state.limits,
    )?;

    let note = state
        .notes
        .create(draft)
        .await
        .map_err(|e| ApiError::store("Failed to create note", "create", e))?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "create",
        note_id = %note.id,
        "Note created"
    );
    Ok((StatusCode::CREATED, Json(note)))
}

#[utoipa::path(get, path = "/notes", tag = "Notes",
    responses(
        (status = 200, description = "All notes, newest first", body = [Note]),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn get_all_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state
        .notes
        .find_all()
        .await
        .map_err(|e| ApiError::store("Failed to fetch notes", "find_all", e))?;

    debug!(
        subsystem = "api",
        component = "notes",
        op = "find_all",
        result_count = notes.len(),
        "Listed notes"
    );
    Ok(Json(notes))
}

#[utoipa::path(get, path = "/notes/{id}", tag = "Notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "The note", body = Note),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn get_note_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_id(&id).ok_or_else(ApiError::note_not_found)?;

    state
        .notes
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::store("Failed to fetch note", "find_by_id", e))?
        .map(Json)
        .ok_or_else(ApiError::note_not_found)
}

#[utoipa::path(put, path = "/notes/{id}", tag = "Notes",
    params(("id" = String, Path, description = "Note id")),
    request_body = NoteBody,
    responses(
        (status = 200, description = "Updated note", body = Note),
        (status = 400, description = "Validation failure", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NoteBody>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Json(body) = payload?;
    let draft = validate_and_normalize(
        body.title.as_deref(),
        body.content.as_deref(),
        &state.limits,
    )?;

    let id = parse_id(&id).ok_or_else(ApiError::note_not_found)?;

    let note = state
        .notes
        .update(id, draft)
        .await
        .map_err(|e| ApiError::store("Failed to update note", "update", e))?
        .ok_or_else(ApiError::note_not_found)?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "update",
        note_id = %note.id,
        "Note updated"
    );
    Ok(Json(note))
}

#[utoipa::path(delete, path = "/notes/{id}", tag = "Notes",
    params(("id" = String, Path, description = "Note id")),
    responses(
        (status = 200, description = "Deleted note with confirmation", body = DeleteNoteResponse),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    )
)]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteNoteResponse>, ApiError> {
    let id = parse_id(&id).ok_or_else(ApiError::note_not_found)?;

    let note = state
        .notes
        .delete(id)
        .await
        .map_err(|e| ApiError::store("Failed to delete note", "delete", e))?
        .ok_or_else(ApiError::note_not_found)?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "delete",
        note_id = %note.id,
        "Note deleted"
    );
    Ok(Json(DeleteNoteResponse::deleted(note)))
}
