use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use noteful_core::error::CoreError;
use serde_json::json;

/// Message of the production `500` envelope.
pub const SERVER_ERROR_MESSAGE: &str = "server error";

/// Body of every auth failure. Note the bare string, unlike the
/// `{ "error": { "message": ... } }` envelope used everywhere else.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized request";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `noteful_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Raw details of an unexpected failure, attached to the `500` response as an
/// extension. The error boundary middleware decides whether clients see them.
#[derive(Debug, Clone)]
pub struct ServerErrorDetail {
    pub kind: &'static str,
    pub message: String,
    /// SQLSTATE for database errors.
    pub code: Option<String>,
}

impl ServerErrorDetail {
    /// Verbose body used outside production.
    pub fn development_body(&self) -> serde_json::Value {
        json!({
            "message": self.message,
            "error": {
                "kind": self.kind,
                "message": self.message,
                "code": self.code,
            },
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    message_response(StatusCode::NOT_FOUND, core.client_message())
                }
                CoreError::MissingField(_) | CoreError::EmptyUpdate(_) => {
                    message_response(StatusCode::BAD_REQUEST, core.client_message())
                }
                CoreError::Unauthorized => (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({ "error": UNAUTHORIZED_MESSAGE })),
                )
                    .into_response(),
            },
            AppError::Database(err) => {
                let code = match &err {
                    sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
                    _ => None,
                };
                server_error("database", err.to_string(), code)
            }
            AppError::BadRequest(msg) => message_response(StatusCode::BAD_REQUEST, msg),
        }
    }
}

/// `{ "error": { "message": ... } }` with the given status.
fn message_response(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "error": { "message": message } }))).into_response()
}

/// Log an unexpected failure and build the production-safe `500` response,
/// carrying the raw details as a [`ServerErrorDetail`] extension.
fn server_error(kind: &'static str, message: String, code: Option<String>) -> Response {
    tracing::error!(kind, error = %message, code = ?code, "Unhandled server error");

    let mut response =
        message_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE.to_string());
    response
        .extensions_mut()
        .insert(ServerErrorDetail { kind, message, code });
    response
}

/// Response for a panic caught by `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    server_error("panic", message, None)
}
