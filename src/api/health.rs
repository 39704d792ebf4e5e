//! Health check endpoint

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::warn;

use crate::api::types::Json;

use super::state::AppState;

/// Liveness plus store reachability
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub database: DatabaseStatus,
    pub version: &'static str,
    pub latency_ms: u64,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

/// Always 200 while the process serves requests; a store outage only shows
/// in the `database` field
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let reachable = tokio::try_join!(
        state.inquiry_service.ping(),
        state.project_service.ping()
    );

    let database = match reachable {
        Ok(_) => DatabaseStatus::Connected,
        Err(e) => {
            warn!(error = %e, "Health check could not reach the store");
            DatabaseStatus::Disconnected
        }
    };

    let response = HealthResponse {
        status: "ok",
        message: "Server is running",
        database,
        version: env!("CARGO_PKG_VERSION"),
        latency_ms: start.elapsed().as_millis() as u64,
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape() {
        let response = HealthResponse {
            status: "ok",
            message: "Server is running",
            database: DatabaseStatus::Disconnected,
            version: "0.1.0",
            latency_ms: 3,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["database"], "disconnected");
        assert_eq!(json["latencyMs"], 3);
        assert_eq!(json["status"], "ok");
    }
}
