//! Handlers for the `/api/note` resource.
//!
//! Every response carrying a note passes it through [`Note::sanitized`], so
//! stored markup never reaches a client unescaped. Values are stored as
//! submitted.

use axum::extract::{OriginalUri, Path, State};
use axum::http::{header, StatusCode};
use axum::Json;
use noteful_core::resource::Resource;
use noteful_core::types::DbId;
use noteful_core::validation::{require_any, required, truthy_id, truthy_text};
use noteful_db::models::note::{CreateNote, Note, UpdateNote};
use noteful_db::repositories::NoteRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{lenient_id, AppJson};
use crate::lookup;
use crate::state::AppState;

/// Body of `POST /api/note`.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub folder_id: Option<DbId>,
    pub content: Option<String>,
}

impl CreateNoteRequest {
    /// Fields are checked in declared order; the first missing one is
    /// reported.
    fn validate(self) -> Result<CreateNote, AppError> {
        Ok(CreateNote {
            name: required(self.name, "name")?,
            folder_id: required(self.folder_id, "folder_id")?,
            content: required(self.content, "content")?,
        })
    }
}

/// Body of `PATCH /api/note/{note_id}`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub folder_id: Option<DbId>,
    pub content: Option<String>,
}

impl UpdateNoteRequest {
    fn validate(self) -> Result<UpdateNote, AppError> {
        let input = UpdateNote {
            name: truthy_text(self.name),
            folder_id: truthy_id(self.folder_id),
            content: truthy_text(self.content),
        };
        require_any(
            Resource::Note,
            &[
                input.name.is_some(),
                input.folder_id.is_some(),
                input.content.is_some(),
            ],
        )?;
        Ok(input)
    }
}

/// GET /api/note
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Note>>> {
    let notes = NoteRepo::list(&state.pool).await?;
    Ok(Json(notes.into_iter().map(Note::sanitized).collect()))
}

/// POST /api/note
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    AppJson(body): AppJson<CreateNoteRequest>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Note>)> {
    let input = body.validate()?;
    let note = NoteRepo::create(&state.pool, &input).await?;
    tracing::info!(note_id = note.id, folder_id = note.folder_id, "Note created");

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(note.sanitized()),
    ))
}

/// GET /api/note/{note_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> AppResult<Json<Note>> {
    let note = lookup::note(&state.pool, &note_id)
        .await?
        .require(Resource::Note, &note_id)?;
    Ok(Json(note.sanitized()))
}

/// DELETE /api/note/{note_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> AppResult<StatusCode> {
    let note = lookup::note(&state.pool, &note_id)
        .await?
        .require(Resource::Note, &note_id)?;

    NoteRepo::delete(&state.pool, note.id).await?;
    tracing::info!(note_id = note.id, "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/note/{note_id}
pub async fn update(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    body: Result<AppJson<UpdateNoteRequest>, AppError>,
) -> AppResult<StatusCode> {
    let note = lookup::note(&state.pool, &note_id)
        .await?
        .require(Resource::Note, &note_id)?;

    let AppJson(body) = body?;
    let input = body.validate()?;
    NoteRepo::update(&state.pool, note.id, &input).await?;
    tracing::info!(note_id = note.id, "Note updated");
    Ok(StatusCode::NO_CONTENT)
}
