//! Service info endpoint.
//! Used by: server.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [Endpoint],
}

#[derive(Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "POST",
        path: "/log",
        description: "Create a new log entry",
    },
    Endpoint {
        method: "GET",
        path: "/logs",
        description: "Get the latest 10 log entries",
    },
    Endpoint {
        method: "GET",
        path: "/",
        description: "Service info",
    },
    Endpoint {
        method: "GET",
        path: "/health",
        description: "Health check",
    },
    Endpoint {
        method: "GET",
        path: "/metrics",
        description: "Telemetry counters",
    },
];

pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Logging API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}
