//! Order item aggregation

use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::client::OrderClient;
use crate::error::{OrderItemsResult, UpstreamCall, translate};
use crate::models::Item;

/// Flattens the items of every package of an order into one list.
///
/// Upstream calls are issued one at a time: the order lookup first, then one
/// call per package in the order the upstream lists them. The first failure
/// aborts the aggregation and no partial result is returned.
pub struct OrderItemService<C: OrderClient> {
    client: Arc<C>,
}

impl<C: OrderClient> OrderItemService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Items of `order_id`, in package order then item order.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn fetch_items(&self, order_id: Uuid) -> OrderItemsResult<Vec<Item>> {
        let order = self
            .client
            .get_order(order_id)
            .await
            .map_err(|e| translate(UpstreamCall::OrderLookup { order_id }, e))?;

        debug!(packages = order.packages.len(), "Order resolved");

        let mut items = Vec::new();
        for package in &order.packages {
            let package_id = package.uuid;
            let records = self
                .client
                .list_package_items(order_id, package_id)
                .await
                .map_err(|e| {
                    translate(
                        UpstreamCall::PackageItems {
                            order_id,
                            package_id,
                        },
                        e,
                    )
                })?;

            debug!(package_id = %package_id, items = records.len(), "Package items fetched");
            items.extend(records.into_iter().map(Item::from));
        }

        info!(
            packages = order.packages.len(),
            items = items.len(),
            "Order items aggregated"
        );
        Ok(items)
    }
}

impl<C: OrderClient> Clone for OrderItemService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}
