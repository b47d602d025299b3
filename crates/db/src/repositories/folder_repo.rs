//! Repository for the `noteful_folder` table.

use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::folder::{CreateFolder, Folder, UpdateFolder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, folder_name";

/// Provides CRUD operations for folders.
pub struct FolderRepo;

impl FolderRepo {
    /// List every folder in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM noteful_folder ORDER BY id");
        sqlx::query_as::<_, Folder>(&query).fetch_all(pool).await
    }

    /// Find a folder by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM noteful_folder WHERE id = $1");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new folder, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFolder) -> Result<Folder, sqlx::Error> {
        let query = format!(
            "INSERT INTO noteful_folder (folder_name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(&input.folder_name)
            .fetch_one(pool)
            .await
    }

    /// Update a folder in place. Returns the number of rows affected.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateFolder) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE noteful_folder SET folder_name = COALESCE($2, folder_name) WHERE id = $1",
        )
        .bind(id)
        .bind(&input.folder_name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a folder. Its notes go with it (`ON DELETE CASCADE`).
    /// Returns the number of rows affected.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM noteful_folder WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
