use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Current Weather API Response (Internal)
// ============================================================================

#[derive(Debug, Deserialize)]
pub(super) struct OpenWeatherMapResponse {
    pub name: String,
    pub coord: Coordinates,
    pub main: MainInfo,
    pub weather: Vec<WeatherInfo>,
    pub wind: WindInfo,
    pub sys: SysInfo,
    /// Seconds east of UTC
    pub timezone: i64,
    pub visibility: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct MainInfo {
    pub temp: f64,
    pub humidity: u32,
    pub pressure: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct WeatherInfo {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct WindInfo {
    /// m/s under metric units
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct SysInfo {
    pub sunrise: i64,
    pub sunset: i64,
}

// ============================================================================
// Normalized current conditions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CurrentConditions {
    pub city: String,
    /// Degrees Celsius, one decimal
    pub temperature: f64,
    pub condition: String,
    /// Percent
    pub humidity: u32,
    /// km/h
    pub wind_speed: f64,
    /// Kilometers
    pub visibility: f64,
    /// hPa
    pub pressure: u32,
    pub lat: f64,
    pub lon: f64,
    /// Local time, e.g. "06:15 AM"
    pub sunrise: String,
    pub sunset: String,
}
