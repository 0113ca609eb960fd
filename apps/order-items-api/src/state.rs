//! Application state management

use domain_order_items::{HttpOrderClient, OrderItemService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub order_items: OrderItemService<HttpOrderClient>,
}

impl AppState {
    /// Builds the pooled upstream client once for the whole process.
    pub fn new(config: crate::config::Config) -> eyre::Result<Self> {
        let client = HttpOrderClient::new(&config.upstream)?;
        Ok(Self {
            order_items: OrderItemService::new(client),
            config,
        })
    }
}
