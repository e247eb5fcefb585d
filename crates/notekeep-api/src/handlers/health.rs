//! Liveness and store reachability.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    pub version: String,
    /// Store backend name ("postgres" or "memory")
    pub store: String,
}

#[utoipa::path(get, path = "/health", tag = "System",
    responses(
        (status = 200, description = "Service and store are up", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.notes.backend_name().to_string();
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.notes.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                version,
                store,
            }),
        ),
        Err(e) => {
            warn!(
                subsystem = "api",
                component = "health",
                error = %e,
                "Store ping failed"
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    version,
                    store,
                }),
            )
        }
    }
}
