//! Integration tests for `NoteRepo` against a real database.

use noteful_core::types::DbId;
use noteful_db::models::folder::CreateFolder;
use noteful_db::models::note::{CreateNote, UpdateNote};
use noteful_db::repositories::{FolderRepo, NoteRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_folder(pool: &PgPool, name: &str) -> DbId {
    FolderRepo::create(
        pool,
        &CreateFolder {
            folder_name: name.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_note(folder_id: DbId, name: &str) -> CreateNote {
    CreateNote {
        name: name.to_string(),
        folder_id,
        content: format!("content of {name}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_then_find(pool: PgPool) {
    let folder_id = seed_folder(&pool, "Important").await;
    let created = NoteRepo::create(&pool, &new_note(folder_id, "Dogs")).await.unwrap();

    assert_eq!(created.name, "Dogs");
    assert_eq!(created.folder_id, folder_id);
    assert_eq!(created.content, "content of Dogs");

    let found = NoteRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_with_unknown_folder_violates_foreign_key(pool: PgPool) {
    let err = NoteRepo::create(&pool, &new_note(999, "Orphan"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_returns_raw_stored_values(pool: PgPool) {
    let folder_id = seed_folder(&pool, "Important").await;
    let mut raw = new_note(folder_id, "<script>alert(1)</script>");
    raw.content = "plain".into();
    NoteRepo::create(&pool, &raw).await.unwrap();
    NoteRepo::create(&pool, &new_note(folder_id, "Cats")).await.unwrap();

    let notes = NoteRepo::list(&pool).await.unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].name, "<script>alert(1)</script>");
    assert_eq!(notes[1].name, "Cats");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_only_touches_given_fields(pool: PgPool) {
    let folder_id = seed_folder(&pool, "Important").await;
    let other_folder = seed_folder(&pool, "Super").await;
    let note = NoteRepo::create(&pool, &new_note(folder_id, "Pigs")).await.unwrap();

    let input = UpdateNote {
        name: Some("Hogs".into()),
        ..Default::default()
    };
    assert_eq!(NoteRepo::update(&pool, note.id, &input).await.unwrap(), 1);

    let found = NoteRepo::find_by_id(&pool, note.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Hogs");
    assert_eq!(found.folder_id, folder_id);
    assert_eq!(found.content, "content of Pigs");

    let input = UpdateNote {
        folder_id: Some(other_folder),
        ..Default::default()
    };
    NoteRepo::update(&pool, note.id, &input).await.unwrap();
    let found = NoteRepo::find_by_id(&pool, note.id).await.unwrap().unwrap();
    assert_eq!(found.folder_id, other_folder);
    assert_eq!(found.name, "Hogs");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let folder_id = seed_folder(&pool, "Important").await;
    let note = NoteRepo::create(&pool, &new_note(folder_id, "Birds")).await.unwrap();

    assert_eq!(NoteRepo::delete(&pool, note.id).await.unwrap(), 1);
    assert!(NoteRepo::find_by_id(&pool, note.id).await.unwrap().is_none());
    assert_eq!(NoteRepo::delete(&pool, note.id).await.unwrap(), 0);
}
