//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: upstream client wiring and the list/create operations
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: response DTOs
//! - `errors.rs`: error envelopes

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: services::AppServices) -> Router {
    let services = Arc::new(services);

    Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_logging)))
}
