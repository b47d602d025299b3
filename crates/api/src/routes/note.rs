use axum::routing::get;
use axum::Router;

use crate::handlers::note;
use crate::state::AppState;

/// Routes mounted at `/api/note`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /{note_id}   -> get_by_id
/// DELETE /{note_id}   -> delete
/// PATCH  /{note_id}   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(note::list).post(note::create))
        .route(
            "/{note_id}",
            get(note::get_by_id).delete(note::delete).patch(note::update),
        )
}
