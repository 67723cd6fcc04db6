//! Shared application state.

use std::sync::Arc;

use crate::store::memory::LogStore;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub store: LogStore,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

/// The store is owned here and handed to handlers through axum state,
/// never reached through a global.
pub fn build_state() -> AppState {
    Arc::new(AppStateInner {
        store: LogStore::new(),
        metrics: Metrics::new(),
    })
}
