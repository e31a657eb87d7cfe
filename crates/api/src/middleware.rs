use std::time::Instant;

use axum::{
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use books_core::RequestId;

use crate::context::RequestContext;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags each request with a [`RequestId`] and logs its outcome.
///
/// A well-formed inbound `x-request-id` is reused; anything else gets a fresh id.
pub async fn request_logging(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let request_id = extract_request_id(req.headers()).unwrap_or_default();
    req.extensions_mut().insert(RequestContext::new(request_id));

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let span = tracing::info_span!("http", %request_id, %method, %path);

    let started = Instant::now();
    let mut res = next.run(req).instrument(span.clone()).await;
    let latency_ms = started.elapsed().as_millis() as u64;

    span.in_scope(|| {
        tracing::info!(status = res.status().as_u16(), latency_ms, "request completed");
    });

    if let Ok(v) = HeaderValue::from_str(&request_id.to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER, v);
    }
    res
}

fn extract_request_id(headers: &HeaderMap) -> Option<RequestId> {
    headers
        .get(REQUEST_ID_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
