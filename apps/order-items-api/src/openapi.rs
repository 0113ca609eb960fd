//! OpenAPI documentation configuration

use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDoc;

/// Service-level metadata
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Items API",
        version = "0.1.0",
        description = "Lists the items of an order across all of its packages"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ServiceInfo;

/// Combined OpenAPI documentation for the Order Items API
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> OpenApiDoc {
        ServiceInfo::openapi().merge_from(domain_order_items::ApiDoc::openapi())
    }
}
