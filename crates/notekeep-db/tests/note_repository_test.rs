//! PostgreSQL integration tests for PgNoteRepository.
//!
//! These need a live database (see `test_fixtures::DEFAULT_TEST_DATABASE_URL`)
//! and are ignored by default. Run with `cargo test -- --ignored`.

use notekeep_db::test_fixtures::TestDatabase;
use notekeep_db::{NoteDraft, NoteRepository};
use uuid::Uuid;

#[tokio::test]
#[ignore] // Requires database connection
async fn test_create_assigns_id_and_timestamps() {
    dotenvy::dotenv().ok();
    let test_db = TestDatabase::new().await;

    let note = test_db.create_note("My Note", "Note content here").await;

    assert_eq!(note.title, "My Note");
    assert_eq!(note.content, "Note content here");
    assert_ne!(note.id, Uuid::nil());
    assert_eq!(note.created_at, note.updated_at);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_find_by_id_roundtrip() {
    dotenvy::dotenv().ok();
    let test_db = TestDatabase::new().await;

    let note = test_db.create_note("Fetch me", "body").await;
    let fetched = test_db.db.notes.find_by_id(note.id).await.unwrap();

    assert_eq!(fetched, Some(note));

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_find_by_id_unknown_is_none() {
    dotenvy::dotenv().ok();
    let test_db = TestDatabase::new().await;

    let result = test_db.db.notes.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_find_all_contains_created_newest_first() {
    dotenvy::dotenv().ok();
    let test_db = TestDatabase::new().await;

    let older = test_db.create_note("older", "a").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let newer = test_db.create_note("newer", "b").await;

    let all = test_db.db.notes.find_all().await.unwrap();
    let pos_older = all.iter().position(|n| n.id == older.id).unwrap();
    let pos_newer = all.iter().position(|n| n.id == newer.id).unwrap();
    assert!(pos_newer < pos_older);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_update_replaces_and_refreshes_updated_at() {
    dotenvy::dotenv().ok();
    let test_db = TestDatabase::new().await;

    let note = test_db.create_note("before", "old").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let updated = test_db
        .db
        .notes
        .update(note.id, NoteDraft::new("after", "new"))
        .await
        .unwrap()
        .expect("note should exist");

    assert_eq!(updated.id, note.id);
    assert_eq!(updated.title, "after");
    assert_eq!(updated.content, "new");
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at > note.updated_at);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_update_unknown_id_is_none() {
    dotenvy::dotenv().ok();
    let test_db = TestDatabase::new().await;

    let result = test_db
        .db
        .notes
        .update(Uuid::new_v4(), NoteDraft::new("t", "c"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_delete_returns_note_once() {
    dotenvy::dotenv().ok();
    let test_db = TestDatabase::new().await;

    let note = test_db.create_note("doomed", "bye").await;

    let deleted = test_db.db.notes.delete(note.id).await.unwrap();
    assert_eq!(deleted.map(|n| n.id), Some(note.id));

    let again = test_db.db.notes.delete(note.id).await.unwrap();
    assert!(again.is_none());
    assert!(test_db.db.notes.find_by_id(note.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires database connection
async fn test_ping() {
    dotenvy::dotenv().ok();
    let test_db = TestDatabase::new().await;

    assert!(test_db.db.notes.ping().await.is_ok());
    assert_eq!(test_db.db.notes.backend_name(), "postgres");
}
