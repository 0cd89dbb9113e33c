use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared application state available to all request handlers via Axum's `State` extractor.
///
/// The connection is the only handle on the document store; it is opened once in `main`
/// and cloned (cheaply, it is pooled) into every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
