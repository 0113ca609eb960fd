use axum::{Json, Router, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Liveness payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests
    pub status: String,
}

/// OpenAPI documentation for the health endpoint
#[derive(OpenApi)]
#[openapi(
    paths(healthcheck),
    components(schemas(HealthResponse)),
    tags((name = "Health", description = "Liveness probe"))
)]
pub struct HealthApiDoc;

/// Liveness probe. Does not touch upstream dependencies.
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn healthcheck() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

/// Creates a router with the `/healthcheck` endpoint.
pub fn health_router() -> Router {
    Router::new().route("/healthcheck", get(healthcheck))
}
