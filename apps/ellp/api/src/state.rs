//! Shared application state passed to route builders and the readiness probe.

use sea_orm::DatabaseConnection;

/// Cloned per router; the connection is a pool handle, so clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Connection pool shared by every workflow
    pub db: DatabaseConnection,
}
