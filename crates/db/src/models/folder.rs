//! Folder entity model and DTOs.

use noteful_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `noteful_folder` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Folder {
    pub id: DbId,
    pub folder_name: String,
}

/// DTO for creating a new folder.
#[derive(Debug, Clone)]
pub struct CreateFolder {
    pub folder_name: String,
}

/// DTO for updating a folder. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateFolder {
    pub folder_name: Option<String>,
}
