//! Static bearer-token gate for the `/api` routes.

use axum::extract::{FromRequestParts, OriginalUri, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use noteful_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried `Authorization: Bearer <API_TOKEN>`.
///
/// The token is compared by exact equality against
/// [`ServerConfig::api_token`](crate::config::ServerConfig::api_token).
#[derive(Debug, Clone, Copy)]
pub struct ApiToken;

impl FromRequestParts<AppState> for ApiToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorized = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .is_some_and(|token| token == state.config.api_token);

        if authorized {
            return Ok(ApiToken);
        }

        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.path(), |uri| uri.path());
        tracing::warn!(path, "Unauthorized request");
        Err(AppError::Core(CoreError::Unauthorized))
    }
}

/// Middleware: run the inner service only for requests holding an
/// [`ApiToken`]. Rejections never reach a router.
pub async fn require_api_token(_token: ApiToken, request: Request, next: Next) -> Response {
    next.run(request).await
}
