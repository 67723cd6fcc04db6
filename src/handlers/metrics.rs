//! Metrics snapshot endpoint.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;
use crate::telemetry::MetricsSnapshot;

#[derive(Serialize)]
pub struct MetricsResponse {
    pub store_size: usize,
    #[serde(flatten)]
    pub counters: MetricsSnapshot,
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        store_size: state.store.len(),
        counters: state.metrics.snapshot(),
    })
}
