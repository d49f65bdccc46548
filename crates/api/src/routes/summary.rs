//! Customer spend summaries.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::Summary;
use order_store::OrderStore;
use serde::Serialize;

use crate::error::ApiError;
use crate::routes::orders::AppState;

#[derive(Serialize)]
pub struct SummariesResponse {
    pub summaries: Vec<Summary>,
}

/// GET /summary — item count and total spend for every customer.
#[tracing::instrument(skip(state))]
pub async fn list<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<SummariesResponse>, ApiError> {
    metrics::counter!("summary_queries_total").increment(1);

    let summaries = state
        .store
        .summaries()
        .map_err(|err| ApiError::from_store(err, "Failed to retrieve summaries"))?;

    Ok(Json(SummariesResponse { summaries }))
}
