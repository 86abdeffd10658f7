use axum::http::StatusCode;
use std::sync::Arc;
use thiserror::Error;

use super::models::DashboardViewModel;
use crate::air_quality::AirQualityService;
use crate::client::JsonFetcher;
use crate::config::AppConfig;
use crate::error::HttpError;
use crate::forecast::ForecastService;
use crate::impl_into_response;
use crate::weather::{WeatherError, WeatherService};

/// The single error that replaces the whole dashboard
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Weather service not configured: OpenWeatherMap API key missing")]
    Configuration,

    #[error("Unable to reach weather provider: {0}")]
    Transport(String),

    #[error("API Error: {message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    #[error("System failure: the dashboard could not be built")]
    System,
}

impl From<WeatherError> for DashboardError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::NotConfigured => Self::Configuration,
            WeatherError::Transport(msg) => Self::Transport(msg),
            WeatherError::ApiError { status, message } => Self::Api {
                status: Some(status),
                message,
            },
            WeatherError::InvalidResponse(msg) => Self::Api {
                status: None,
                message: format!("unexpected response: {msg}"),
            },
        }
    }
}

impl HttpError for DashboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Configuration => StatusCode::SERVICE_UNAVAILABLE,
            Self::Transport(_) => StatusCode::BAD_GATEWAY,
            Self::Api {
                status: Some(404), ..
            } => StatusCode::NOT_FOUND,
            Self::Api { .. } => StatusCode::BAD_GATEWAY,
            Self::System => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::Configuration => Some("CONFIGURATION_ERROR"),
            Self::Transport(_) => Some("TRANSPORT_ERROR"),
            Self::Api { .. } => Some("API_ERROR"),
            Self::System => Some("SYSTEM_ERROR"),
        }
    }
}

impl_into_response!(DashboardError);

pub struct DashboardService {
    weather: WeatherService,
    forecast: ForecastService,
    air_quality: AirQualityService,
    default_city: String,
}

impl DashboardService {
    pub fn new(
        weather: WeatherService,
        forecast: ForecastService,
        air_quality: AirQualityService,
        default_city: impl Into<String>,
    ) -> Self {
        Self {
            weather,
            forecast,
            air_quality,
            default_city: default_city.into(),
        }
    }

    /// Wire all three normalizers to one fetcher, base URL and API key
    pub fn from_config(fetcher: Arc<dyn JsonFetcher>, config: &AppConfig) -> Self {
        let base_url = config.api_base_url.as_str();
        let api_key = config.openweathermap_api_key.clone();

        Self::new(
            WeatherService::new(Arc::clone(&fetcher), base_url, api_key.clone()),
            ForecastService::new(Arc::clone(&fetcher), base_url, api_key.clone()),
            AirQualityService::new(fetcher, base_url, api_key),
            config.default_city.clone(),
        )
    }

    /// Trimmed input, or the default city when nothing was typed
    pub fn resolve_city<'a>(&'a self, city: Option<&'a str>) -> &'a str {
        match city.map(str::trim) {
            Some(city) if !city.is_empty() => city,
            _ => &self.default_city,
        }
    }

    /// Build the dashboard for one search.
    ///
    /// The pipeline runs on its own task so that a panic inside it surfaces as
    /// `DashboardError::System` instead of tearing down the connection.
    pub async fn build_dashboard(
        self: Arc<Self>,
        city: Option<&str>,
    ) -> Result<DashboardViewModel, DashboardError> {
        let city = self.resolve_city(city).to_string();
        let service = Arc::clone(&self);

        match tokio::spawn(async move { service.assemble(&city).await }).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Dashboard pipeline aborted");
                Err(DashboardError::System)
            }
        }
    }

    async fn assemble(&self, city: &str) -> Result<DashboardViewModel, DashboardError> {
        // Coordinates for the air quality lookup come from here; nothing else runs if it fails
        let current = self.weather.fetch_current(city).await?;

        let (forecast, air_quality) = tokio::join!(
            self.forecast.fetch_forecast(city),
            self.air_quality.fetch_air_quality(current.lat, current.lon),
        );

        tracing::info!(
            city = %current.city,
            chart_points = forecast.chart.len(),
            days = forecast.weekly.len(),
            aqi = air_quality.index,
            "Dashboard built"
        );

        Ok(DashboardViewModel {
            current,
            chart: forecast.chart,
            weekly: forecast.weekly,
            air_quality,
        })
    }
}
