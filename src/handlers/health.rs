//! # Health Check Handler
//!
//! Endpoint used by load balancers and uptime monitors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

/// Body of a successful health check
#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    /// ISO-8601 UTC with millisecond precision, e.g. "2024-01-15T10:30:00.000Z"
    timestamp: String,
}

/// Health check endpoint
///
/// ## Route
/// GET /api/health
///
/// ## Response
/// ```json
/// { "status": "ok", "timestamp": "2024-01-15T10:30:00.000Z" }
/// ```
///
/// If building the body fails the handler answers 500 with
/// `{ "status": "error", "message": "Health check failed" }` instead.
pub async fn health_check() -> Response {
    health_response(health_report(Utc::now()))
}

/// Turn the outcome of building a health report into the HTTP response
///
/// Any failure is logged and replaced with the fixed 500 payload; the
/// underlying error never reaches the client.
fn health_response<E: std::fmt::Debug>(report: Result<Value, E>) -> Response {
    match report {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": "Health check failed"
                })),
            )
                .into_response()
        }
    }
}

fn health_report(now: DateTime<Utc>) -> Result<Value, serde_json::Error> {
    serde_json::to_value(HealthReport {
        status: "ok",
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
