//! Log entry creation endpoint with input validation.
//! Used by: server.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::store::memory::LogRecord;

/// Fields arrive as raw JSON values so validation can name the field that
/// failed instead of surfacing a generic deserializer message. Unknown
/// extra fields are ignored.
#[derive(Deserialize)]
pub struct AppendRequest {
    pub user: Option<Value>,
    pub action: Option<Value>,
}

fn require_string(field: &'static str, value: Option<Value>) -> Result<String> {
    match value {
        None => Err(Error::Validation {
            field,
            message: "is required",
        }),
        Some(Value::String(s)) if s.is_empty() => Err(Error::Validation {
            field,
            message: "must not be empty",
        }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(Error::Validation {
            field,
            message: "must be a string",
        }),
    }
}

fn parse_request(
    payload: std::result::Result<Json<AppendRequest>, JsonRejection>,
) -> Result<(String, String)> {
    let Json(req) = payload.map_err(|rejection| Error::InvalidBody(rejection.body_text()))?;
    let user = require_string("user", req.user)?;
    let action = require_string("action", req.action)?;
    Ok((user, action))
}

pub async fn append(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AppendRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LogRecord>)> {
    let (user, action) = match parse_request(payload) {
        Ok(fields) => fields,
        Err(err) => {
            state.metrics.record_reject();
            crate::console::log_reject(&err.to_string());
            tracing::warn!(error = %err, "log entry rejected");
            return Err(err);
        }
    };

    let record = state.store.append(user, action)?;
    state.metrics.record_append();
    crate::console::log_append(&record.user, &record.action);
    tracing::info!(user = %record.user, action = %record.action, "log entry appended");
    Ok((StatusCode::CREATED, Json(record)))
}
