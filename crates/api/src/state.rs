use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` (or a test) and handed to the router builder.
/// Cheaply cloneable: the pool is reference-counted and the config is behind
/// `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: noteful_db::DbPool,
    /// Server configuration (API token, environment mode).
    pub config: Arc<ServerConfig>,
}
