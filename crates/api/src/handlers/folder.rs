//! Handlers for the `/api/folder` resource.
//!
//! Folder names are returned exactly as stored; only notes are sanitized.

use axum::extract::{OriginalUri, Path, State};
use axum::http::{header, StatusCode};
use axum::Json;
use noteful_core::resource::Resource;
use noteful_core::validation::{require_any, required, truthy_text};
use noteful_db::models::folder::{CreateFolder, Folder, UpdateFolder};
use noteful_db::repositories::FolderRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::lookup;
use crate::state::AppState;

/// Body of `POST /api/folder`.
#[derive(Debug, Deserialize)]
pub struct CreateFolderRequest {
    pub folder_name: Option<String>,
}

impl CreateFolderRequest {
    fn validate(self) -> Result<CreateFolder, AppError> {
        Ok(CreateFolder {
            folder_name: required(self.folder_name, "folder_name")?,
        })
    }
}

/// Body of `PATCH /api/folder/{folder_id}`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateFolderRequest {
    pub folder_name: Option<String>,
}

impl UpdateFolderRequest {
    fn validate(self) -> Result<UpdateFolder, AppError> {
        let folder_name = truthy_text(self.folder_name);
        require_any(Resource::Folder, &[folder_name.is_some()])?;
        Ok(UpdateFolder { folder_name })
    }
}

/// GET /api/folder
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Folder>>> {
    let folders = FolderRepo::list(&state.pool).await?;
    Ok(Json(folders))
}

/// POST /api/folder
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    AppJson(body): AppJson<CreateFolderRequest>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Folder>)> {
    let input = body.validate()?;
    let folder = FolderRepo::create(&state.pool, &input).await?;
    tracing::info!(folder_id = folder.id, "Folder created");

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), folder.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(folder)))
}

/// GET /api/folder/{folder_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
) -> AppResult<Json<Folder>> {
    let folder = lookup::folder(&state.pool, &folder_id)
        .await?
        .require(Resource::Folder, &folder_id)?;
    Ok(Json(folder))
}

/// DELETE /api/folder/{folder_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
) -> AppResult<StatusCode> {
    let folder = lookup::folder(&state.pool, &folder_id)
        .await?
        .require(Resource::Folder, &folder_id)?;

    FolderRepo::delete(&state.pool, folder.id).await?;
    tracing::info!(folder_id = folder.id, "Folder deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/folder/{folder_id}
pub async fn update(
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
    body: Result<AppJson<UpdateFolderRequest>, AppError>,
) -> AppResult<StatusCode> {
    let folder = lookup::folder(&state.pool, &folder_id)
        .await?
        .require(Resource::Folder, &folder_id)?;

    let AppJson(body) = body?;
    let input = body.validate()?;
    FolderRepo::update(&state.pool, folder.id, &input).await?;
    tracing::info!(folder_id = folder.id, "Folder updated");
    Ok(StatusCode::NO_CONTENT)
}
