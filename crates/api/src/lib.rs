//! HTTP API server with observability for the order service.
//!
//! Exposes batch order ingest, per-customer item lookup and customer
//! summaries over REST, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::{InMemoryOrderStore, OrderStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: OrderStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::ops::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::ops::health::<S>))
        .route("/orders", post(routes::orders::create::<S>))
        .route(
            "/customer/{customer_id}/items",
            get(routes::customers::items::<S>),
        )
        .route("/summary", get(routes::summary::list::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by an empty in-memory store.
pub fn create_default_state(config: &Config) -> Arc<AppState<InMemoryOrderStore>> {
    Arc::new(AppState {
        store: InMemoryOrderStore::new(),
        max_batch_size: config.max_batch_size,
    })
}
