//! Order-management service client

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::config::UpstreamConfig;
use crate::error::UpstreamError;
use crate::models::{OrderResponse, PackageItemRecord};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const TENANT_ID_HEADER: &str = "x-tenant-id";

/// Read access to orders held by the upstream service.
///
/// Implementations must be safe to share between concurrent requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderClient: Send + Sync {
    /// Fetch an order and its package descriptors
    async fn get_order(&self, order_id: Uuid) -> Result<OrderResponse, UpstreamError>;

    /// Fetch the items of one package of an order
    async fn list_package_items(
        &self,
        order_id: Uuid,
        package_id: Uuid,
    ) -> Result<Vec<PackageItemRecord>, UpstreamError>;
}

/// HTTP implementation of [`OrderClient`] backed by a pooled `reqwest::Client`.
///
/// Credentials are attached as default headers, and the configured timeout
/// applies to every call.
#[derive(Clone)]
pub struct HttpOrderClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            UpstreamError::InvalidConfig("API key is not a valid header value".into())
        })?;
        api_key.set_sensitive(true);
        let tenant_id = HeaderValue::from_str(&config.tenant_id).map_err(|_| {
            UpstreamError::InvalidConfig("tenant id is not a valid header value".into())
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(HeaderName::from_static(TENANT_ID_HEADER), tenant_id);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn order_url(&self, order_id: Uuid) -> String {
        format!("{}/orders/{}", self.base_url, order_id)
    }

    fn package_items_url(&self, order_id: Uuid, package_id: Uuid) -> String {
        format!(
            "{}/orders/{}/packages/{}/items",
            self.base_url, order_id, package_id
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        debug!(url = %url, "Calling order service");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Order service request failed");
            UpstreamError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Order service returned an error status");
            return Err(UpstreamError::Status(status));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(url = %url, error = %e, "Order service response could not be read");
            UpstreamError::from(e)
        })
    }
}

#[async_trait]
impl OrderClient for HttpOrderClient {
    #[instrument(skip(self), fields(order_id = %order_id))]
    async fn get_order(&self, order_id: Uuid) -> Result<OrderResponse, UpstreamError> {
        self.get_json(&self.order_url(order_id)).await
    }

    #[instrument(skip(self), fields(order_id = %order_id, package_id = %package_id))]
    async fn list_package_items(
        &self,
        order_id: Uuid,
        package_id: Uuid,
    ) -> Result<Vec<PackageItemRecord>, UpstreamError> {
        self.get_json(&self.package_items_url(order_id, package_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_id() -> Uuid {
        Uuid::parse_str("7e290683-d67b-4f96-a940-44bef1f69d21").unwrap()
    }

    #[test]
    fn test_urls_are_built_from_trimmed_base() {
        let config = UpstreamConfig::new("http://orders.local/api/", "key", "tenant");
        let client = HttpOrderClient::new(&config).unwrap();
        let package_id = Uuid::nil();

        assert_eq!(client.base_url(), "http://orders.local/api");
        assert_eq!(
            client.order_url(order_id()),
            "http://orders.local/api/orders/7e290683-d67b-4f96-a940-44bef1f69d21"
        );
        assert_eq!(
            client.package_items_url(order_id(), package_id),
            format!(
                "http://orders.local/api/orders/{}/packages/{}/items",
                order_id(),
                package_id
            )
        );
    }

    #[test]
    fn test_rejects_credentials_that_are_not_header_safe() {
        let config = UpstreamConfig::new("http://orders.local", "bad\nkey", "tenant");
        assert!(matches!(
            HttpOrderClient::new(&config),
            Err(UpstreamError::InvalidConfig(_))
        ));
    }
}
