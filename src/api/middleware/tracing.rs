//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the request tracing layer.
///
/// Each request gets an `INFO` span carrying method, URI and version. The
/// start of a request is logged at `DEBUG`, the response at `INFO` with its
/// status and latency in milliseconds:
///
/// ```text
/// INFO request{method=GET uri=/api/pins/110001 version=HTTP/1.1}: finished processing request latency=184 ms status=200
/// ```
///
/// Failed requests still finish with `400`, so they are logged as normal
/// responses here; the error itself is logged by [`crate::error::AppError`]
/// with its incident id.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
