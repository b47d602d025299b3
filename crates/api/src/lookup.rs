//! Shared per-id lookup for the `/{id}` routes.
//!
//! Every verb handler on a single-record path first resolves the path id
//! into a [`Lookup`], then either handles the found record or answers `404`
//! with the resource's message.

use noteful_core::error::CoreError;
use noteful_core::resource::Resource;
use noteful_core::types::DbId;
use noteful_db::models::folder::Folder;
use noteful_db::models::note::Note;
use noteful_db::repositories::{FolderRepo, NoteRepo};
use noteful_db::DbPool;

use crate::error::AppResult;

/// Outcome of resolving a path id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Lookup::NotFound, Lookup::Found)
    }
}

impl<T> Lookup<T> {
    /// Unwrap the record, or fail with [`CoreError::NotFound`] for
    /// `resource`.
    pub fn require(self, resource: Resource, raw_id: &str) -> AppResult<T> {
        match self {
            Lookup::Found(record) => Ok(record),
            Lookup::NotFound => Err(CoreError::NotFound {
                resource,
                id: raw_id.to_string(),
            }
            .into()),
        }
    }
}

/// Path ids that are not integers can never resolve.
fn parse_id(raw_id: &str) -> Option<DbId> {
    raw_id.parse().ok()
}

/// Resolve a folder by its raw path id.
pub async fn folder(pool: &DbPool, raw_id: &str) -> AppResult<Lookup<Folder>> {
    let Some(id) = parse_id(raw_id) else {
        return Ok(Lookup::NotFound);
    };
    Ok(FolderRepo::find_by_id(pool, id).await?.into())
}

/// Resolve a note by its raw path id.
pub async fn note(pool: &DbPool, raw_id: &str) -> AppResult<Lookup<Note>> {
    let Some(id) = parse_id(raw_id) else {
        return Ok(Lookup::NotFound);
    };
    Ok(NoteRepo::find_by_id(pool, id).await?.into())
}
