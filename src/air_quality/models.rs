use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Air Pollution API Response (Internal)
// ============================================================================

#[derive(Debug, Deserialize)]
pub(super) struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AirPollutionEntry {
    pub main: AqiInfo,
    pub components: Components,
}

#[derive(Debug, Deserialize)]
pub(super) struct AqiInfo {
    pub aqi: u32,
}

/// Concentrations in μg/m3; any absent pollutant reads as 0
#[derive(Debug, Default, Deserialize)]
pub(super) struct Components {
    #[serde(default)]
    pub pm10: f64,
    #[serde(default)]
    pub o3: f64,
    #[serde(default)]
    pub so2: f64,
    #[serde(default)]
    pub pm2_5: f64,
    #[serde(default)]
    pub co: f64,
    #[serde(default)]
    pub no2: f64,
}

// ============================================================================
// Normalized air quality
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Severity {
    Good,
    Moderate,
    Poor,
}

impl Severity {
    /// ≤100 good, ≤200 moderate, above that poor
    pub fn from_concentration(value: f64) -> Self {
        if value > 200.0 {
            Self::Poor
        } else if value > 100.0 {
            Self::Moderate
        } else {
            Self::Good
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum AqiStatus {
    Good,
    Poor,
}

impl AqiStatus {
    /// Strictly below 3 is good. An index of 0 (no data) therefore reads as good too.
    pub fn from_index(index: u32) -> Self {
        if index < 3 {
            Self::Good
        } else {
            Self::Poor
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PollutantReading {
    pub label: String,
    pub value: f64,
    pub severity: Severity,
}

impl PollutantReading {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
            severity: Severity::from_concentration(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AirQuality {
    /// Provider scale 1-5, 0 when unavailable
    pub index: u32,
    pub status: AqiStatus,
    /// PM10, O3, SO2, PM2.5, CO, NO2 in that order
    pub pollutants: Vec<PollutantReading>,
}
