use anyhow::{Context, Result};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;

/// Build the database handle from a connection string.
///
/// The driver connects lazily; this only fails on a malformed URI. Callers
/// that want to know whether the server is actually reachable should ping.
pub async fn get_database(uri: &str) -> Result<Database> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("invalid MongoDB connection string")?;
    options.app_name = Some("portfolio-backend".to_string());
    options.server_selection_timeout = Some(Duration::from_secs(5));
    options.connect_timeout = Some(Duration::from_secs(10));

    let client = Client::with_options(options).context("failed to build MongoDB client")?;
    let db = client
        .default_database()
        .unwrap_or_else(|| client.database("portfolio"));
    Ok(db)
}
