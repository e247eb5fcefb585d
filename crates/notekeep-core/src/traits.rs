//! Core traits for notekeep abstractions.
//!
//! These traits define the interfaces that storage backends must satisfy,
//! enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Note, NoteDraft};

// =============================================================================
// NOTE REPOSITORY TRAIT
// =============================================================================

/// Repository for note CRUD operations.
///
/// Absence is a value, not an error: lookups, updates and deletes against an
/// id with no stored note return `Ok(None)`. `Err` always means the store
/// itself failed.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Persist a new note. The store assigns `id` and both timestamps.
    async fn create(&self, draft: NoteDraft) -> Result<Note>;

    /// All notes, newest first.
    async fn find_all(&self) -> Result<Vec<Note>>;

    /// Fetch a note by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>>;

    /// Replace title and content of an existing note, refreshing `updated_at`.
    async fn update(&self, id: Uuid, draft: NoteDraft) -> Result<Option<Note>>;

    /// Remove a note, returning it as it was before deletion.
    async fn delete(&self, id: Uuid) -> Result<Option<Note>>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    /// Short backend name for health reporting.
    fn backend_name(&self) -> &'static str;
}
