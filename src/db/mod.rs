use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

/// Open the pooled connection to the document store and verify it answers.
///
/// Store-level timeouts live here; handlers never apply their own.
///
/// # Errors
///
/// Returns an error if the connection cannot be established or the first ping fails.
pub async fn connect(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    db.ping().await?;
    Ok(db)
}
