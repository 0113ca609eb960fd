//! HTTP handlers for the Order Items API

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    UuidPath,
    errors::responses::{BadGatewayResponse, NotFoundResponse, UnprocessableUuidResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::client::OrderClient;
use crate::error::OrderItemsResult;
use crate::models::Item;
use crate::service::OrderItemService;

/// OpenAPI documentation for the Order Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_order_items),
    components(
        schemas(Item),
        responses(NotFoundResponse, BadGatewayResponse, UnprocessableUuidResponse)
    ),
    tags(
        (name = "Orders", description = "Order item lookup")
    )
)]
pub struct ApiDoc;

/// Create the order items router
pub fn router<C: OrderClient + 'static>(service: OrderItemService<C>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/orders/{order_id}/items", get(list_order_items::<C>))
        .with_state(shared_service)
}

/// List every item of an order, across all of its packages
#[utoipa::path(
    get,
    path = "/orders/{order_id}/items",
    tag = "Orders",
    params(
        ("order_id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Items of the order", body = Vec<Item>),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableUuidResponse),
        (status = 502, response = BadGatewayResponse)
    )
)]
async fn list_order_items<C: OrderClient>(
    State(service): State<Arc<OrderItemService<C>>>,
    UuidPath(order_id): UuidPath,
) -> OrderItemsResult<Json<Vec<Item>>> {
    let items = service.fetch_items(order_id).await?;
    Ok(Json(items))
}
