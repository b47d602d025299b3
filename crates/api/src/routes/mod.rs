pub mod folder;
pub mod health;
pub mod note;

use axum::http::StatusCode;
use axum::Router;

use crate::middleware::auth::require_api_token;
use crate::state::AppState;

/// Build the `/api` route tree. Every request under `/api` requires the
/// bearer token, including paths that match no route.
///
/// ```text
/// /folder                  list, create
/// /folder/{folder_id}      get, delete, patch
///
/// /note                    list, create
/// /note/{note_id}          get, delete, patch
/// ```
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/folder", folder::router())
        .nest("/note", note::router())
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(axum::middleware::from_fn_with_state(
            state,
            require_api_token,
        ))
}
