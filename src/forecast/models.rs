use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// 5 day / 3 hour Forecast API Response (Internal)
// ============================================================================

#[derive(Debug, Deserialize)]
pub(super) struct ForecastApiResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastEntry {
    pub dt: i64,
    /// Only read for entries inside the chart window
    pub dt_txt: Option<String>,
    pub main: Option<ForecastMain>,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastMain {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct WeatherCondition {
    pub icon: String,
}

// ============================================================================
// Normalized forecast
// ============================================================================

/// One point on the near-term temperature chart
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ForecastPoint {
    /// Provider label, "YYYY-MM-DD HH:MM:SS"
    pub time: String,
    pub temperature: f64,
}

/// One card on the weekly strip
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyForecast {
    /// English weekday name from the UTC timestamp
    pub day: String,
    pub temperature: i64,
    pub icon: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Forecast {
    pub chart: Vec<ForecastPoint>,
    pub weekly: Vec<DailyForecast>,
}

impl Forecast {
    pub fn is_empty(&self) -> bool {
        self.chart.is_empty() && self.weekly.is_empty()
    }
}
