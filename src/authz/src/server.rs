//! Diagnostic HTTP front-end
//!
//! - `POST /v1/requirements` - Operations and label requirements for a resource coordinate
//! - `GET /health` - Health check

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::middleware::log_request_details;
use crate::registry::TenantRegistry;
use crate::selector::LabelRequirement;
use crate::types::{Operation, ResourceCoordinate};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    registry: Arc<TenantRegistry>,
    start_time: Instant,
}

impl AppState {
    /// Creates state around a registry; uptime counts from here
    pub fn new(registry: Arc<TenantRegistry>) -> Self {
        Self {
            registry,
            start_time: Instant::now(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

/// Application error type
#[derive(Debug)]
enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Requirements response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequirementsResponse {
    operations: Vec<Operation>,
    requirements: Vec<LabelRequirement>,
    label_selector: String,
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    uptime_seconds: u64,
    version: String,
    tenants: usize,
}

/// POST /v1/requirements - Aggregate requirements for a coordinate
async fn requirements(
    State(state): State<AppState>,
    Json(coord): Json<ResourceCoordinate>,
) -> Result<Json<RequirementsResponse>, AppError> {
    if coord.kind.is_empty() || coord.version.is_empty() {
        return Err(AppError::BadRequest(
            "kind and version are required".to_string(),
        ));
    }

    let result = state.registry.aggregate(&coord);

    info!(
        coordinate = %coord,
        operations = result.operations.len(),
        requirements = result.requirements.len(),
        "Aggregated cluster-scope requirements"
    );

    let label_selector = result.label_selector();

    Ok(Json(RequirementsResponse {
        operations: result.operations,
        requirements: result.requirements,
        label_selector,
    }))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        version: crate::VERSION.to_string(),
        tenants: state.registry.len(),
    })
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/v1/requirements", post(requirements))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_request_details))
                .layer(trace),
        )
        .with_state(state)
}
