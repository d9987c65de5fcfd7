//! Request trace id, reachable from anywhere inside a request's future.
//!
//! `TraceSpan` scopes each request with its id; Problem Details bodies and
//! the extractor's logs read it back. Domain code never touches this.

use tokio::task_local;

/// Returned outside of any request scope.
pub const UNKNOWN: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or `None` outside a request scope.
pub fn current() -> Option<String> {
    TRACE_ID.try_with(Clone::clone).ok()
}

/// Trace id of the current request, or `"unknown"`.
pub fn trace_id() -> String {
    current().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
