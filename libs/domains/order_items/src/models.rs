use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One product line of an order, as returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Product code
    pub sku: String,
    /// Product description, empty when the upstream has none
    pub description: String,
    /// Product image URL, empty when the upstream has none
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    /// Product reference, empty when the upstream has none
    pub reference: String,
    /// Units of this product in the package
    pub quantity: i64,
}

impl From<PackageItemRecord> for Item {
    fn from(record: PackageItemRecord) -> Self {
        let ProductRecord {
            code,
            description,
            image_url,
            reference,
        } = record.product;

        Self {
            sku: code,
            description: description.unwrap_or_default(),
            image_url: image_url.unwrap_or_default(),
            reference: reference.unwrap_or_default(),
            quantity: record.quantity,
        }
    }
}

// Upstream payloads. Unknown fields are ignored.

/// `GET /orders/{order_id}` response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub packages: Vec<PackageSummary>,
}

/// Package descriptor inside an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub uuid: Uuid,
}

/// Element of the `GET /orders/{order_id}/packages/{package_id}/items` array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageItemRecord {
    pub product: ProductRecord,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}
