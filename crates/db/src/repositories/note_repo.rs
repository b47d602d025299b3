//! Repository for the `noteful_note` table.

use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, folder_id, content";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List every note in id order. Values are returned exactly as stored.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM noteful_note ORDER BY id");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Find a note by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM noteful_note WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new note, returning the created row.
    ///
    /// Fails with a foreign key violation if `folder_id` does not reference
    /// an existing folder.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO noteful_note (name, folder_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.name)
            .bind(input.folder_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Update a note. Only non-`None` fields in `input` are applied.
    /// Returns the number of rows affected.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateNote) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE noteful_note SET
                name = COALESCE($2, name),
                folder_id = COALESCE($3, folder_id),
                content = COALESCE($4, content)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.folder_id)
        .bind(&input.content)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a note. Returns the number of rows affected.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM noteful_note WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
