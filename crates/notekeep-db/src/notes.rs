//! Note repository implementation.

use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use tracing::{debug, info};
use uuid::Uuid;

use notekeep_core::{new_v7, Error, Note, NoteDraft, NoteRepository, Result};

/// Columns returned by every note query, in `map_row_to_note` order.
const NOTE_COLUMNS: &str = "id, title, content, created_at, updated_at";

/// PostgreSQL implementation of NoteRepository.
///
/// Every write is a single statement with `RETURNING`, so each operation is
/// atomic without an explicit transaction.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Map a database row to a Note.
fn map_row_to_note(row: PgRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn create(&self, draft: NoteDraft) -> Result<Note> {
        let id = new_v7();
        let now = Utc::now();

        let row = sqlx::query(&format!(
            "INSERT INTO notes (id, title, content, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        info!(
            subsystem = "db",
            component = "notes",
            op = "create",
            note_id = %id,
            "Note inserted"
        );
        Ok(map_row_to_note(row))
    }

    async fn find_all(&self) -> Result<Vec<Note>> {
        let start = Instant::now();
        let rows = sqlx::query(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "find_all",
            result_count = rows.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Listed notes"
        );
        Ok(rows.into_iter().map(map_row_to_note).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>> {
        let row = sqlx::query(&format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.map(map_row_to_note))
    }

    async fn update(&self, id: Uuid, draft: NoteDraft) -> Result<Option<Note>> {
        let row = sqlx::query(&format!(
            "UPDATE notes SET title = $1, content = $2, updated_at = $3
             WHERE id = $4
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        if row.is_some() {
            info!(
                subsystem = "db",
                component = "notes",
                op = "update",
                note_id = %id,
                "Note updated"
            );
        }
        Ok(row.map(map_row_to_note))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Note>> {
        let row = sqlx::query(&format!(
            "DELETE FROM notes WHERE id = $1 RETURNING {NOTE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        if row.is_some() {
            info!(
                subsystem = "db",
                component = "notes",
                op = "delete",
                note_id = %id,
                "Note deleted"
            );
        }
        Ok(row.map(map_row_to_note))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
