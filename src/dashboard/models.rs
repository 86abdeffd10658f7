use serde::Serialize;
use utoipa::ToSchema;

use crate::air_quality::AirQuality;
use crate::forecast::{DailyForecast, ForecastPoint};
use crate::weather::CurrentConditions;

/// Everything the dashboard page renders for one search
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardViewModel {
    pub current: CurrentConditions,
    /// Near-term temperature series for the line chart
    pub chart: Vec<ForecastPoint>,
    /// One card per weekday, at most 7
    pub weekly: Vec<DailyForecast>,
    pub air_quality: AirQuality,
}
