//! OpenAPI document generated from handler annotations.

use axum::Json;
use utoipa::OpenApi;

use notekeep_core::{DeleteNoteResponse, Note, NoteBody};

use crate::error::ErrorBody;
use crate::handlers::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "notekeep API",
        description = "CRUD API for notes with input validation and HTML sanitization"
    ),
    paths(
        crate::handlers::notes::create_note,
        crate::handlers::notes::get_all_notes,
        crate::handlers::notes::get_note_by_id,
        crate::handlers::notes::update_note,
        crate::handlers::notes::delete_note,
        crate::handlers::health::health_check,
    ),
    components(schemas(Note, NoteBody, DeleteNoteResponse, ErrorBody, HealthResponse)),
    tags(
        (name = "Notes", description = "Note CRUD operations"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
