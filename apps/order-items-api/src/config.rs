//! Configuration for the Order Items API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_order_items::UpstreamConfig;
use std::env;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub environment: Environment,
    /// Comma-separated origins; CORS is disabled when unset
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let upstream = UpstreamConfig::from_env()?;

        let cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origins| !origins.trim().is_empty());

        Ok(Self {
            app: app_info!(),
            server,
            upstream,
            environment,
            cors_allowed_origin,
        })
    }
}
