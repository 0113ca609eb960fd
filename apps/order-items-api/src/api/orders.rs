//! Order items routes

use axum::Router;
use domain_order_items::handlers;

use crate::state::AppState;

/// Create order items router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.order_items.clone())
}
