//! Unified error types for actionlog.
//! Used by: store, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{field} {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),
}

/// JSON error body. `field` is set for validation failures so callers can
/// tell which input field was rejected.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation { .. } | Error::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::LockPoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let (error, field, detail) = match self {
            Error::Validation { field, message } => {
                (format!("{} {}", field, message), Some(field), None)
            }
            Error::InvalidBody(detail) => ("invalid request body".to_string(), None, Some(detail)),
            Error::LockPoisoned(what) => (format!("{} lock poisoned", what), None, None),
        };
        (status, Json(ErrorBody { error, field, detail })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn lock_err<T>(what: &'static str) -> impl Fn(std::sync::PoisonError<T>) -> Error {
    move |_| Error::LockPoisoned(what)
}
