//! Order Items Domain
//!
//! Read-only façade over the order-management service: resolves an order,
//! fetches the items of each of its packages and returns them as one flat list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoint, error → status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Aggregation across packages
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Client    │  ← Upstream access (trait + reqwest implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, upstream payloads
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_order_items::{HttpOrderClient, OrderItemService, UpstreamConfig, handlers};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = UpstreamConfig::new("https://orders.example.com", "api-key", "tenant");
//! let client = HttpOrderClient::new(&config)?;
//! let service = OrderItemService::new(client);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use client::{HttpOrderClient, OrderClient};
pub use config::UpstreamConfig;
pub use error::{OrderItemsError, OrderItemsResult, UpstreamError};
pub use handlers::ApiDoc;
pub use models::{Item, OrderResponse, PackageItemRecord, PackageSummary, ProductRecord};
pub use service::OrderItemService;
