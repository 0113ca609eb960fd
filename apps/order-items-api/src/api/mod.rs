//! API routes module

pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().merge(orders::router(state))
}
