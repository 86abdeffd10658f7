//! Weather dashboard backend.
//!
//! Fetches current conditions, the 5 day / 3 hour forecast and air pollution
//! from OpenWeatherMap, normalizes them and serves one dashboard view model
//! (or one error) per searched city.

pub mod air_quality;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod extractors;
pub mod forecast;
pub mod openapi;
pub mod routes;
pub mod weather;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::dashboard::DashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService>,
    pub config: Arc<AppConfig>,
}
