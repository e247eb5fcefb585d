//! In-memory note repository.
//!
//! Used by the API test suite and by `NOTE_STORE=memory` for running the
//! server without PostgreSQL. Data lives only as long as the process.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use notekeep_core::{new_v7, Note, NoteDraft, NoteRepository, Result};

/// Map-backed implementation of NoteRepository.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<HashMap<Uuid, Note>>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, draft: NoteDraft) -> Result<Note> {
        let now = Utc::now();
        let note = Note {
            id: new_v7(),
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };

        self.notes.write().await.insert(note.id, note.clone());
        debug!(
            subsystem = "db",
            component = "memory_store",
            op = "create",
            note_id = %note.id,
            "Note inserted"
        );
        Ok(note)
    }

    async fn find_all(&self) -> Result<Vec<Note>> {
        let mut notes: Vec<Note> = self.notes.read().await.values().cloned().collect();
        notes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(notes)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>> {
        Ok(self.notes.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, draft: NoteDraft) -> Result<Option<Note>> {
        let mut notes = self.notes.write().await;
        let Some(note) = notes.get_mut(&id) else {
            return Ok(None);
        };

        note.title = draft.title;
        note.content = draft.content;
        note.updated_at = Utc::now();
        Ok(Some(note.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Note>> {
        Ok(self.notes.write().await.remove(&id))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft::new(title, content)
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let repo = InMemoryNoteRepository::new();
        let note = repo.create(draft("My Note", "Note content here")).await.unwrap();

        assert_eq!(note.title, "My Note");
        assert_eq!(note.content, "Note content here");
        assert_eq!(note.id.get_version_num(), 7);
        assert_eq!(note.created_at, note.updated_at);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = InMemoryNoteRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let repo = InMemoryNoteRepository::new();
        let first = repo.create(draft("first", "a")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = repo.create(draft("second", "b")).await.unwrap();

        let ids: Vec<Uuid> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryNoteRepository::new();
        let note = repo.create(draft("t", "c")).await.unwrap();

        assert_eq!(repo.find_by_id(note.id).await.unwrap(), Some(note));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_refreshes_timestamp() {
        let repo = InMemoryNoteRepository::new();
        let note = repo.create(draft("old", "old body")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        let updated = repo
            .update(note.id, draft("new", "new body"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, note.id);
        assert_eq!(updated.title, "new");
        assert_eq!(updated.content, "new body");
        assert_eq!(updated.created_at, note.created_at);
        assert!(updated.updated_at > note.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let repo = InMemoryNoteRepository::new();
        repo.create(draft("t", "c")).await.unwrap();

        let result = repo.update(Uuid::new_v4(), draft("x", "y")).await.unwrap();
        assert!(result.is_none());

        let notes = repo.find_all().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "t");
    }

    #[tokio::test]
    async fn test_delete_returns_removed_note() {
        let repo = InMemoryNoteRepository::new();
        let note = repo.create(draft("t", "c")).await.unwrap();

        assert_eq!(repo.delete(note.id).await.unwrap(), Some(note.clone()));
        assert_eq!(repo.delete(note.id).await.unwrap(), None);
        assert!(repo.find_by_id(note.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryNoteRepository::new();
        let other = repo.clone();
        let note = repo.create(draft("t", "c")).await.unwrap();

        assert!(other.find_by_id(note.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_ping_and_backend_name() {
        let repo = InMemoryNoteRepository::new();
        assert!(repo.ping().await.is_ok());
        assert_eq!(repo.backend_name(), "memory");
    }
}
