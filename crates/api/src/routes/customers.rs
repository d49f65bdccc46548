//! Per-customer item lookup.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use domain::{CustomerId, CustomerItem};
use order_store::{OrderStore, StoreError};
use serde::Serialize;

use crate::error::ApiError;
use crate::routes::orders::AppState;

#[derive(Serialize)]
pub struct ItemsResponse {
    pub items: Vec<CustomerItem>,
}

/// GET /customer/{customer_id}/items — every item the customer bought.
#[tracing::instrument(skip(state))]
pub async fn items<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let result = state.store.items_by_customer(&customer_id);

    let outcome = match &result {
        Ok(_) => "found",
        Err(StoreError::CustomerNotFound { .. }) => "not_found",
        Err(_) => "internal",
    };
    metrics::counter!("customer_item_queries_total", "outcome" => outcome).increment(1);

    let items = result.map_err(|err| ApiError::from_store(err, "Failed to retrieve items"))?;

    Ok(Json(ItemsResponse { items }))
}
