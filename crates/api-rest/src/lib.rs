//! # API REST
//!
//! REST API implementation for the skin disease detection service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, error statuses)
//!
//! Uses `api-shared` for wire types and `derm-core` for the analysis itself.

#![warn(rust_2018_idioms)]

pub mod error;

use api_shared::{AnalyzeReq, AnalyzeRes, ErrorRes, HealthRes, HealthService, RootRes};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use derm_core::AnalysisService;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    analysis: AnalysisService,
}

impl AppState {
    pub fn new(analysis: AnalysisService) -> Self {
        Self { analysis }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(root, health, analyze),
    components(schemas(RootRes, HealthRes, AnalyzeReq, AnalyzeRes, ErrorRes))
)]
pub struct ApiDoc;

/// Builds the REST router with permissive CORS and Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = RootRes)
    )
)]
#[axum::debug_handler]
async fn root() -> Json<RootRes> {
    Json(HealthService::root())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeReq,
    responses(
        (status = 200, description = "Predicted disease with its information", body = AnalyzeRes),
        (status = 400, description = "Image data could not be decoded", body = ErrorRes),
        (status = 500, description = "Analysis failed", body = ErrorRes)
    )
)]
/// Analyse a base64-encoded skin image
///
/// Classifies the image and enriches the predicted disease with its
/// description, symptoms, treatments and when to seek medical care.
///
/// # Errors
/// Returns `400 Bad Request` if the image cannot be decoded and
/// `500 Internal Server Error` for any other failure.
#[axum::debug_handler]
async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeReq>,
) -> Result<Json<AnalyzeRes>, ApiError> {
    tracing::info!(user_id = ?req.user_id, "starting image analysis");
    let result = state.analysis.analyze(&req.image_data).await?;
    Ok(Json(result.into()))
}
