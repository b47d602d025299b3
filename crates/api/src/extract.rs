//! Request extractors with the API's own rejection handling.

use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Request};
use axum::Json;
use noteful_core::types::DbId;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;

use crate::error::AppError;

/// JSON request body whose rejections (bad syntax, wrong field types, missing
/// content type) become `400 { "error": { "message": ... } }`.
///
/// An absent or blank body reads as `{}`, so handlers report the missing
/// fields instead of a parse failure.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            let value = serde_json::from_slice(b"{}")
                .map_err(|err| AppError::BadRequest(err.to_string()))?;
            return Ok(AppJson(value));
        }

        let mut req = Request::new(Body::from(bytes));
        *req.headers_mut() = headers;
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

/// Optional id that also accepts its decimal string form (`1` or `"1"`).
/// An empty string counts as absent.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(DbId),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid id {text:?}, expected an integer"))),
    }
}
