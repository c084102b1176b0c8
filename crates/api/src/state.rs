use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference-counted
/// and the config sits behind `Arc`); there is no other shared mutable
/// state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: waypost_db::DbPool,
    /// Server configuration (JWT secrets, timeouts, CORS origins).
    pub config: Arc<ServerConfig>,
}
