//! HTTP API for sizing calculations, catalog listings, health checks and
//! Prometheus metrics

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};
use serde::Serialize;
use sizer_lib::{K8sSizingInput, ResourceCatalog, SizingEngine};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::observability::ServerMetrics;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SizingEngine>,
    pub catalog: Arc<dyn ResourceCatalog>,
    pub metrics: ServerMetrics,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ResourceCatalog>, metrics: ServerMetrics) -> Self {
        Self {
            engine: Arc::new(SizingEngine::new(catalog.clone())),
            catalog,
            metrics,
        }
    }
}

/// Error body returned for rejected sizing requests; the engine's message
/// is surfaced verbatim since it always names a correctable field or id.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Run a sizing calculation
async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(input): Json<K8sSizingInput>,
) -> impl IntoResponse {
    let start = Instant::now();
    let result = state.engine.calculate(&input);
    state
        .metrics
        .observe_calculation_latency(start.elapsed().as_secs_f64());

    match result {
        Ok(result) => {
            state.metrics.record_calculation();
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            state.metrics.record_error();
            warn!(error = %err, "sizing request rejected");
            // Lookup misses point at a missing catalog entry
            let status = if err.is_lookup_miss() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            (
                status,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// List known distribution ids
async fn distributions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.distributions())
}

/// List known technology ids
async fn technologies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.technologies())
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness probe; the server is stateless, so healthy once serving
async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}

#[derive(Debug, Serialize)]
struct ReadinessResponse {
    ready: bool,
}

/// Readiness probe
async fn readyz() -> impl IntoResponse {
    (StatusCode::OK, Json(ReadinessResponse { ready: true }))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        warn!(error = %err, "failed to encode metrics");
        return (StatusCode::INTERNAL_SERVER_ERROR, Vec::new()).into_response();
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
        .into_response()
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/calculate", post(calculate))
        .route("/api/v1/distributions", get(distributions))
        .route("/api/v1/technologies", get(technologies))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
