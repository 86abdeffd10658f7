use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use super::models::DashboardViewModel;
use super::service::DashboardError;
use crate::extractors::CityParam;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// False until an OpenWeatherMap API key is provided
    pub configured: bool,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        configured: state.config.api_key_configured(),
    })
}

/// Build the dashboard for a searched city
///
/// GET /dashboard?city=London
/// GET /dashboard/{city}
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    params(
        ("city" = Option<String>, Query, description = "City to search; blank uses the default city")
    ),
    responses(
        (status = 200, description = "Dashboard view model", body = DashboardViewModel),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse),
        (status = 503, description = "API key not configured", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    city: CityParam,
) -> Result<Json<DashboardViewModel>, DashboardError> {
    let view = Arc::clone(&state.dashboard_service)
        .build_dashboard(city.as_deref())
        .await?;
    Ok(Json(view))
}
