//! Batch order ingest endpoint.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use domain::{Order, validate_batch};
use order_store::OrderStore;
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub store: S,
    pub max_batch_size: usize,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /orders — append a batch of orders.
///
/// The body is decoded as JSON whatever its `Content-Type`; a `null` body is
/// an empty batch. Checks run in a fixed order: JSON shape, order
/// validation, batch size. Any failure rejects the whole batch.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    ingest(&*state, &body).inspect_err(|err| {
        metrics::counter!("order_batches_rejected_total", "reason" => err.reason()).increment(1);
    })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Orders added successfully",
        }),
    ))
}

fn ingest<S: OrderStore>(state: &AppState<S>, body: &[u8]) -> Result<(), ApiError> {
    let orders = serde_json::from_slice::<Option<Vec<Order>>>(body)
        .map_err(|err| {
            tracing::debug!(error = %err, "rejected malformed order batch");
            ApiError::InvalidInput
        })?
        .unwrap_or_default();

    if let Err(err) = validate_batch(&orders) {
        tracing::debug!(error = %err, "rejected invalid order batch");
        return Err(ApiError::InvalidInput);
    }

    if orders.len() > state.max_batch_size {
        tracing::warn!(
            batch_size = orders.len(),
            limit = state.max_batch_size,
            "rejected oversized order batch"
        );
        return Err(ApiError::BatchTooLarge {
            limit: state.max_batch_size,
        });
    }

    let batch_size = orders.len();
    state
        .store
        .append(orders)
        .map_err(|err| ApiError::from_store(err, "Failed to add orders"))?;

    metrics::counter!("order_batches_accepted_total").increment(1);
    metrics::counter!("orders_ingested_total").increment(batch_size as u64);
    tracing::info!(batch_size, "orders added");
    Ok(())
}
