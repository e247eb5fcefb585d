//! notekeep-api - HTTP API for notekeep
//!
//! The binary in `main.rs` wires configuration, logging and storage; this
//! library holds the router so tests can drive it without a socket.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use notekeep_core::{NoteRepository, ValidationLimits};

pub use config::{ApiConfig, StoreBackend};
pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Note store; Postgres in production, in-memory in tests.
    pub notes: Arc<dyn NoteRepository>,
    /// Length bounds for the validation pipeline.
    pub limits: ValidationLimits,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteRepository>, limits: ValidationLimits) -> Self {
        Self { notes, limits }
    }
}

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Parse configured CORS origins, skipping values that are not valid headers.
fn cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect()
}

/// Routes only, no middleware.
pub fn routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // OpenAPI document
        .route("/openapi.json", get(openapi::openapi_json))
        // Notes CRUD
        .route(
            "/notes",
            get(handlers::notes::get_all_notes).post(handlers::notes::create_note),
        )
        .route(
            "/notes/:id",
            get(handlers::notes::get_note_by_id)
                .put(handlers::notes::update_note)
                .delete(handlers::notes::delete_note),
        )
        .with_state(state)
}

/// Full application router with tracing, request ids, CORS and body limit.
pub fn build_router(state: AppState, config: &ApiConfig) -> Router {
    let allowed_origins = cors_origins(&config.allowed_origins);

    routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .max_age(std::time::Duration::from_secs(3600)),
        )
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
}
