//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI documentation and common middleware
//! - `/healthcheck` liveness endpoint
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, None);
//! create_production_app(router, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_production_app, create_router};
pub use health::{HealthApiDoc, HealthResponse, health_router};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
