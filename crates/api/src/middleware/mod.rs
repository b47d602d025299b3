//! Request middleware.
//!
//! - [`auth::require_api_token`] -- rejects `/api` requests lacking the
//!   configured bearer token.
//! - [`error_boundary::error_boundary`] -- controls how much of an unexpected
//!   failure a `500` response reveals.

pub mod auth;
pub mod error_boundary;
