use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Error type for MongoDB connection setup
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

async fn client_options(config: &MongoConfig) -> Result<ClientOptions, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client without touching the network.
///
/// The driver connects on first use, so a process can start (and answer
/// liveness probes) while the deployment is unreachable. Only parsing the
/// URL (including SRV resolution for `mongodb+srv://`) can fail here.
pub async fn client_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let client = Client::with_options(client_options(config).await?)?;
    info!(url = %config.redacted_url(), "MongoDB client created (lazy connection)");
    Ok(client)
}

/// Build a client and verify the deployment answers.
///
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(url = %config.redacted_url(), "Attempting to connect to MongoDB");

    let client = Client::with_options(client_options(config).await?)?;

    client
        .list_database_names()
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] with exponential backoff.
///
/// `None` uses [`RetryConfig::default`].
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}

/// Startup entry point: verified (with retry) or lazy, per
/// [`MongoConfig::verify_on_startup`].
pub async fn connect_for_startup(config: &MongoConfig) -> Result<Client, MongoError> {
    if config.verify_on_startup {
        connect_from_config_with_retry(config, None).await
    } else {
        client_from_config(config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_from_config_is_lazy() {
        // Nothing listens on this port; building the client must still succeed.
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "catalog");
        let client = client_from_config(&config).await;
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_client_from_config_rejects_bad_url() {
        let config = MongoConfig::new("not-a-mongo-url");
        let result = client_from_config(&config).await;
        assert!(matches!(result, Err(MongoError::Mongo(_))));
    }

    #[tokio::test]
    async fn test_connect_from_config_with_retry_gives_up() {
        let mut config = MongoConfig::with_database("mongodb://127.0.0.1:1", "catalog");
        config.connect_timeout_secs = 1;
        config.server_selection_timeout_secs = 1;
        let policy = RetryConfig::new()
            .with_max_retries(1)
            .with_initial_delay(10)
            .without_jitter();

        let result = connect_from_config_with_retry(&config, Some(policy)).await;
        assert!(matches!(result, Err(MongoError::ConnectionFailed(_))));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect_from_config() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let config = MongoConfig::with_database(url, "test");
        assert!(connect_from_config(&config).await.is_ok());
    }
}
