//! Final say over unexpected-failure responses.
//!
//! [`AppError`](crate::error::AppError) always renders a `500` as the safe
//! production envelope and attaches a [`ServerErrorDetail`] extension. Outside
//! production this middleware swaps the body for one exposing those details.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ServerErrorDetail;
use crate::state::AppState;

pub async fn error_boundary(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(detail) = response.extensions_mut().remove::<ServerErrorDetail>() else {
        return response;
    };
    if state.config.environment.is_production() {
        return response;
    }

    (StatusCode::INTERNAL_SERVER_ERROR, Json(detail.development_body())).into_response()
}
