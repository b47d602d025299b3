//! Note entity model and DTOs.

use noteful_core::sanitize::sanitize;
use noteful_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `noteful_note` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub name: String,
    pub folder_id: DbId,
    pub content: String,
}

impl Note {
    /// Copy of this note with markup stripped from `name` and `content`.
    /// `id` and `folder_id` are never touched.
    pub fn sanitized(self) -> Self {
        Self {
            name: sanitize(&self.name),
            content: sanitize(&self.content),
            ..self
        }
    }
}

/// DTO for creating a new note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub name: String,
    pub folder_id: DbId,
    pub content: String,
}

/// DTO for updating a note. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateNote {
    pub name: Option<String>,
    pub folder_id: Option<DbId>,
    pub content: Option<String>,
}
