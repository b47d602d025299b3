use axum::routing::get;
use axum::Router;

use crate::handlers::folder;
use crate::state::AppState;

/// Routes mounted at `/api/folder`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{folder_id}   -> get_by_id
/// DELETE /{folder_id}   -> delete
/// PATCH  /{folder_id}   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(folder::list).post(folder::create))
        .route(
            "/{folder_id}",
            get(folder::get_by_id)
                .delete(folder::delete)
                .patch(folder::update),
        )
}
