//! Core data models for notekeep.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted note.
///
/// `id`, `created_at` and `updated_at` are owned by the store; callers never
/// set them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated, normalized title and content ready for storage.
///
/// Produced by [`crate::validate_and_normalize`]; both create and update
/// write the full pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Build a draft from already-normalized values.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Raw `{title, content}` request body for create and update.
///
/// Both fields are optional so that a missing field reaches the validation
/// pipeline instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoteBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Response body for a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteNoteResponse {
    pub message: String,
    pub note: Note,
}

impl DeleteNoteResponse {
    /// Confirmation for a note that has just been removed.
    pub fn deleted(note: Note) -> Self {
        Self {
            message: "Note deleted successfully".to_string(),
            note,
        }
    }
}
