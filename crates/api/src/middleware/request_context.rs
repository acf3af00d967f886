//! Task-local access to the current request's correlation id.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Header carrying the correlation id, set by `SetRequestIdLayer`.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

tokio::task_local! {
    static REQUEST_ID: String;
}

/// Run the rest of the request with its `x-request-id` in task-local scope.
///
/// Must sit inside `SetRequestIdLayer` so the header is already present.
pub async fn scope_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_owned();

    REQUEST_ID.scope(request_id, next.run(request)).await
}

/// The correlation id of the request being handled, if called within one.
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok()
}
