//! Request logging middleware: binds a unique ID to each request and logs
//! its completion.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Wraps the handler chain with request-scoped logging.
///
/// A new UUID v4 is generated for every request — never taken from the
/// client, so two concurrent requests cannot share one. The ID is:
/// - bound to a `request` span instrumenting the downstream handlers, so
///   every log entry on the request path carries `request_id`,
/// - set on the response headers for client correlation.
///
/// After the handler returns, one info-level entry records method, path,
/// and the response status (200 unless a handler set one explicitly).
pub async fn request_log_middleware(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let span = tracing::info_span!("request", request_id = %request_id);

    let mut response = async {
        let response = next.run(req).await;

        tracing::info!(
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            "request completed"
        );

        response
    }
    .instrument(span)
    .await;

    if let Ok(val) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID.clone(), val);
    }

    response
}
