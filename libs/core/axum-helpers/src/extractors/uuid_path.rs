//! UUID path parameter extractor with automatic validation.

use crate::errors::{AppError, ErrorCode, error_response};
use axum::{
    extract::{FromRequestParts, Path, rejection::PathRejection},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// A malformed identifier, including one that does not percent-decode to
/// UTF-8, is rejected with `422 Unprocessable Entity` and the standard error
/// body.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn get_order(UuidPath(id): UuidPath) -> String {
///     format!("Order ID: {}", id)
/// }
///
/// let app = Router::new().route("/orders/{id}", get(get_order));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::FailedToDeserializePathParams(e) => {
                    tracing::warn!(
                        error_code = ErrorCode::InvalidUuid.code(),
                        "Undecodable path parameter: {}",
                        e.body_text()
                    );
                    error_response(
                        StatusCode::UNPROCESSABLE_ENTITY,
                        ErrorCode::InvalidUuid.default_message().to_string(),
                        ErrorCode::InvalidUuid,
                    )
                }
                other => other.into_response(),
            })?;

        Uuid::parse_str(&id)
            .map(UuidPath)
            .map_err(|e| AppError::from(e).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/orders/{id}/items",
            get(|UuidPath(id): UuidPath| async move { id.to_string() }),
        )
    }

    #[tokio::test]
    async fn test_valid_uuid_is_extracted() {
        let id = "7e290683-d67b-4f96-a940-44bef1f69d21";
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/orders/{id}/items"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], id.as_bytes());
    }

    #[tokio::test]
    async fn test_invalid_uuid_is_rejected_with_422() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/orders/valor-invalido/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_non_utf8_segment_is_rejected_with_json_422() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/orders/%FF/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.headers()["content-type"], "application/json");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 1002);
        assert_eq!(body["error"], "INVALID_UUID");
        assert_eq!(body["message"], "Invalid UUID format");
    }
}
