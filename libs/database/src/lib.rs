//! Database connectors and helpers.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction, startup retry, health ping
//! - `config` - `core_config::FromEnv` support for connector configs
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog");
//! let client = mongodb::connect_for_startup(&config).await?;
//! let collection = client.database(config.database()).collection::<Document>("products");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{RetryConfig, retry, retry_with_backoff};
