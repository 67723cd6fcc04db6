//! Recent log entries endpoint.
//! Used by: server.

use axum::extract::State;
use axum::Json;

use crate::error::Result;
use crate::state::AppState;
use crate::store::memory::LogRecord;

/// Fixed read window: the API serves at most the 10 newest entries.
pub const RECENT_LIMIT: usize = 10;

pub async fn recent(State(state): State<AppState>) -> Result<Json<Vec<LogRecord>>> {
    let records = state.store.recent(RECENT_LIMIT)?;
    state.metrics.record_read();
    Ok(Json(records))
}
