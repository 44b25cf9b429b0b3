//! Server infrastructure.
//!
//! - Router assembly with OpenAPI documentation and the shared layers
//! - Readiness check aggregation
//! - Graceful shutdown coordination
//! - AWS Lambda runtime adapter
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! let router = create_router::<ApiDoc>(api_routes, true)?;
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod lambda;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, run_health_checks};
pub use lambda::{run_lambda, running_in_lambda};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
