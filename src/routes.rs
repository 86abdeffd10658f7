use axum::{
    error_handling::HandleErrorLayer, http::StatusCode, routing::get, BoxError, Json, Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::dashboard::handlers as dashboard_handlers;
use crate::error::ErrorResponse;
use crate::openapi::swagger_ui;
use crate::AppState;

/// Build the dashboard API routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_handlers::get_dashboard))
        .route("/dashboard/{city}", get(dashboard_handlers::get_dashboard))
}

/// Build all API v1 routes
pub fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(dashboard_routes())
}

/// Handle request timeout errors
async fn handle_timeout_error(err: BoxError) -> (StatusCode, Json<ErrorResponse>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse::with_code("Request timed out", "TIMEOUT")),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(format!("Internal error: {}", err))),
        )
    }
}

/// Build the complete application router
pub fn build_router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        // Health check at root level
        .route("/", get(dashboard_handlers::health))
        .route("/health", get(dashboard_handlers::health))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
        // Swagger UI for API documentation
        .merge(swagger_ui())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(request_timeout),
        )
        // The dashboard page is served from elsewhere and calls us cross-origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
