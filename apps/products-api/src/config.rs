//! Configuration for Products API

use axum_helpers::running_in_lambda;
use core_config::{app_info, env_flag, env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use database::mongodb::MongoConfig;
use domain_products::{ApiVariant, DEFAULT_COLLECTION};
use std::str::FromStr;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// How the process receives requests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RuntimeMode {
    /// Long-running HTTP server bound to `HOST:PORT`
    Server,
    /// AWS Lambda handler (API Gateway / function URL events)
    Lambda,
}

impl FromEnv for RuntimeMode {
    /// `RUNTIME_MODE` when set, otherwise `lambda` inside a Lambda sandbox
    fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("RUNTIME_MODE") {
            Ok(raw) => parse_setting("RUNTIME_MODE", &raw),
            Err(_) if running_in_lambda() => Ok(RuntimeMode::Lambda),
            Err(_) => Ok(RuntimeMode::Server),
        }
    }
}

/// Catalog settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductsConfig {
    pub collection: String,
    pub variant: ApiVariant,
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            variant: ApiVariant::default(),
        }
    }
}

impl FromEnv for ProductsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let variant = match std::env::var("PRODUCTS_API_VARIANT") {
            Ok(raw) => parse_setting("PRODUCTS_API_VARIANT", &raw)?,
            Err(_) => ApiVariant::default(),
        };

        Ok(Self {
            collection: env_or_default("PRODUCTS_COLLECTION", DEFAULT_COLLECTION),
            variant,
        })
    }
}

fn parse_setting<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(raw.trim()).map_err(|e| ConfigError::ParseError {
        key: key.to_string(),
        details: format!("'{}': {}", raw, e),
    })
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub products: ProductsConfig,
    pub runtime_mode: RuntimeMode,
    pub openapi_enabled: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let products = ProductsConfig::from_env()?;
        let runtime_mode = RuntimeMode::from_env()?;
        let openapi_enabled = env_flag("OPENAPI_ENABLED", true)?;

        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb.app_name = Some(app.name.to_string());
        }

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
            products,
            runtime_mode,
            openapi_enabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [(&str, Option<&str>); 2] = [
        ("MONGODB_URL", Some("mongodb://localhost:27017")),
        ("MONGODB_DATABASE", Some("catalog")),
    ];

    #[test]
    fn test_config_defaults() {
        let vars = [
            REQUIRED[0],
            REQUIRED[1],
            ("APP_ENV", None),
            ("PRODUCTS_COLLECTION", None),
            ("PRODUCTS_API_VARIANT", None),
            ("RUNTIME_MODE", None),
            ("AWS_LAMBDA_RUNTIME_API", None),
            ("OPENAPI_ENABLED", None),
            ("MONGODB_APP_NAME", None),
        ];
        temp_env::with_vars(vars, || {
            let config = Config::from_env().unwrap();

            assert_eq!(config.environment, Environment::Development);
            assert_eq!(config.products, ProductsConfig::default());
            assert_eq!(config.products.collection, "products");
            assert_eq!(config.runtime_mode, RuntimeMode::Server);
            assert!(config.openapi_enabled);
            assert_eq!(config.mongodb.app_name.as_deref(), Some("products_api"));
        });
    }

    #[test]
    fn test_config_overrides() {
        let vars = [
            REQUIRED[0],
            REQUIRED[1],
            ("APP_ENV", Some("production")),
            ("PRODUCTS_COLLECTION", Some("produtos")),
            ("PRODUCTS_API_VARIANT", Some("list-only")),
            ("RUNTIME_MODE", Some("lambda")),
            ("OPENAPI_ENABLED", Some("false")),
        ];
        temp_env::with_vars(vars, || {
            let config = Config::from_env().unwrap();

            assert!(config.environment.is_production());
            assert_eq!(config.products.collection, "produtos");
            assert_eq!(config.products.variant, ApiVariant::ListOnly);
            assert_eq!(config.runtime_mode, RuntimeMode::Lambda);
            assert!(!config.openapi_enabled);
        });
    }

    #[test]
    fn test_config_requires_mongodb_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
                ("MONGODB_DATABASE", Some("catalog")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        temp_env::with_var("PRODUCTS_API_VARIANT", Some("everything"), || {
            let err = ProductsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PRODUCTS_API_VARIANT"));
        });
    }

    #[test]
    fn test_runtime_mode_detects_lambda() {
        temp_env::with_vars(
            [
                ("RUNTIME_MODE", None::<&str>),
                ("AWS_LAMBDA_RUNTIME_API", Some("127.0.0.1:9001")),
            ],
            || {
                assert_eq!(RuntimeMode::from_env().unwrap(), RuntimeMode::Lambda);
            },
        );
    }

    #[test]
    fn test_runtime_mode_explicit_wins() {
        temp_env::with_vars(
            [
                ("RUNTIME_MODE", Some("Server")),
                ("AWS_LAMBDA_RUNTIME_API", Some("127.0.0.1:9001")),
            ],
            || {
                assert_eq!(RuntimeMode::from_env().unwrap(), RuntimeMode::Server);
            },
        );
    }

    #[test]
    fn test_runtime_mode_invalid() {
        temp_env::with_var("RUNTIME_MODE", Some("batch"), || {
            assert!(RuntimeMode::from_env().is_err());
        });
    }
}
