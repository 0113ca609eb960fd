use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use reqwest::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// Message returned to clients when the order does not exist upstream
pub const ORDER_NOT_FOUND_MESSAGE: &str = "Pedido não encontrado";

/// Message returned to clients when the upstream service fails
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Falha de comunicação com o servidor remoto";

/// Failure talking to the order-management service, before translation.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream responded with status {0}")]
    Status(StatusCode),

    #[error("upstream request timed out: {0}")]
    Timeout(String),

    #[error("failed to connect to upstream: {0}")]
    Connect(String),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    #[error("upstream request failed: {0}")]
    Request(String),

    #[error("invalid upstream client configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status)
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Which upstream call produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCall {
    OrderLookup { order_id: Uuid },
    PackageItems { order_id: Uuid, package_id: Uuid },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderItemsError {
    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("Upstream communication failure: {0}")]
    UpstreamCommunicationFailure(String),
}

pub type OrderItemsResult<T> = Result<T, OrderItemsError>;

/// Map an upstream failure to a domain error.
///
/// Only a 404 on the order lookup means the order does not exist. A 404 on a
/// package-items call, and every other failure, is a communication failure.
pub fn translate(call: UpstreamCall, err: UpstreamError) -> OrderItemsError {
    match (call, &err) {
        (UpstreamCall::OrderLookup { order_id }, UpstreamError::Status(status))
            if *status == StatusCode::NOT_FOUND =>
        {
            OrderItemsError::OrderNotFound(order_id)
        }
        (UpstreamCall::OrderLookup { order_id }, _) => {
            OrderItemsError::UpstreamCommunicationFailure(format!(
                "order {} lookup: {}",
                order_id, err
            ))
        }
        (
            UpstreamCall::PackageItems {
                order_id,
                package_id,
            },
            _,
        ) => OrderItemsError::UpstreamCommunicationFailure(format!(
            "order {} package {} items: {}",
            order_id, package_id, err
        )),
    }
}

/// Upstream detail stays in the logs, clients only get the fixed messages.
impl From<OrderItemsError> for AppError {
    fn from(err: OrderItemsError) -> Self {
        match err {
            OrderItemsError::OrderNotFound(_) => {
                AppError::NotFound(ORDER_NOT_FOUND_MESSAGE.to_string())
            }
            OrderItemsError::UpstreamCommunicationFailure(_) => {
                AppError::BadGateway(UPSTREAM_FAILURE_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for OrderItemsError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode as HttpStatus;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn order_id() -> Uuid {
        Uuid::parse_str("7e290683-d67b-4f96-a940-44bef1f69d21").unwrap()
    }

    fn lookup() -> UpstreamCall {
        UpstreamCall::OrderLookup {
            order_id: order_id(),
        }
    }

    fn package_items() -> UpstreamCall {
        UpstreamCall::PackageItems {
            order_id: order_id(),
            package_id: Uuid::nil(),
        }
    }

    #[test]
    fn test_lookup_404_is_order_not_found() {
        let err = translate(lookup(), UpstreamError::Status(StatusCode::NOT_FOUND));
        assert_eq!(err, OrderItemsError::OrderNotFound(order_id()));
    }

    #[test]
    fn test_lookup_other_failures_are_communication_failures() {
        let failures = [
            UpstreamError::Status(StatusCode::INTERNAL_SERVER_ERROR),
            UpstreamError::Status(StatusCode::UNAUTHORIZED),
            UpstreamError::Status(StatusCode::FORBIDDEN),
            UpstreamError::Timeout("deadline".into()),
            UpstreamError::Connect("refused".into()),
            UpstreamError::Decode("bad json".into()),
            UpstreamError::Request("reset".into()),
        ];

        for failure in failures {
            assert!(matches!(
                translate(lookup(), failure),
                OrderItemsError::UpstreamCommunicationFailure(_)
            ));
        }
    }

    #[test]
    fn test_package_items_404_is_communication_failure() {
        let err = translate(
            package_items(),
            UpstreamError::Status(StatusCode::NOT_FOUND),
        );
        assert!(matches!(err, OrderItemsError::UpstreamCommunicationFailure(_)));
    }

    #[test]
    fn test_communication_failure_detail_names_the_call() {
        let err = translate(package_items(), UpstreamError::Connect("refused".into()));
        let OrderItemsError::UpstreamCommunicationFailure(detail) = err else {
            panic!("expected communication failure");
        };
        assert!(detail.contains(&Uuid::nil().to_string()));
        assert!(detail.contains("refused"));
    }

    #[test]
    fn test_boundary_status_codes() {
        let not_found = OrderItemsError::OrderNotFound(order_id()).into_response();
        let upstream =
            OrderItemsError::UpstreamCommunicationFailure("boom".into()).into_response();

        assert_eq!(not_found.status(), HttpStatus::NOT_FOUND);
        assert_eq!(upstream.status(), HttpStatus::BAD_GATEWAY);
    }

    #[derive(Clone, Default)]
    struct EventCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_boundary_logs_each_failure_once() {
        for err in [
            OrderItemsError::OrderNotFound(order_id()),
            OrderItemsError::UpstreamCommunicationFailure("connect refused".into()),
        ] {
            let counter = EventCounter::default();
            let subscriber = tracing_subscriber::registry().with(counter.clone());

            tracing::subscriber::with_default(subscriber, || {
                let _ = err.into_response();
            });

            assert_eq!(counter.0.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_boundary_hides_upstream_detail() {
        let app_error: AppError =
            OrderItemsError::UpstreamCommunicationFailure("secret host 10.0.0.1".into()).into();
        let AppError::BadGateway(message) = app_error else {
            panic!("expected bad gateway");
        };
        assert_eq!(message, UPSTREAM_FAILURE_MESSAGE);
    }
}
