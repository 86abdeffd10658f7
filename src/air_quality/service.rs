use std::sync::Arc;
use thiserror::Error;

use super::models::*;
use crate::client::{FetchError, JsonFetcher};

#[derive(Error, Debug)]
pub enum AirQualityError {
    #[error("Air quality service not configured: OpenWeatherMap API key missing")]
    NotConfigured,

    #[error("Failed to fetch air quality: {0}")]
    RequestError(#[from] FetchError),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl AirQuality {
    fn from_components(index: u32, c: &Components) -> Self {
        Self {
            index,
            status: AqiStatus::from_index(index),
            pollutants: vec![
                PollutantReading::new("PM10", c.pm10),
                PollutantReading::new("O3", c.o3),
                PollutantReading::new("SO2", c.so2),
                PollutantReading::new("PM2.5", c.pm2_5),
                PollutantReading::new("CO", c.co),
                PollutantReading::new("NO2", c.no2),
            ],
        }
    }

    /// Index 0 with every pollutant at 0, shown when the provider can't be used
    pub fn unavailable() -> Self {
        Self::from_components(0, &Components::default())
    }
}

pub struct AirQualityService {
    fetcher: Arc<dyn JsonFetcher>,
    url: String,
    api_key: Option<String>,
}

impl AirQualityService {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            fetcher,
            url: format!("{}/air_pollution", base_url.trim_end_matches('/')),
            api_key,
        }
    }

    /// Air quality at a coordinate.
    ///
    /// Failures are logged and replaced by `AirQuality::unavailable()`.
    pub async fn fetch_air_quality(&self, lat: f64, lon: f64) -> AirQuality {
        match self.try_fetch_air_quality(lat, lon).await {
            Ok(air_quality) => air_quality,
            Err(e) => {
                tracing::warn!(
                    lat = %lat,
                    lon = %lon,
                    error = %e,
                    "Air quality unavailable, using zero readings"
                );
                AirQuality::unavailable()
            }
        }
    }

    async fn try_fetch_air_quality(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<AirQuality, AirQualityError> {
        let api_key = self.api_key.as_deref().ok_or(AirQualityError::NotConfigured)?;

        tracing::debug!(lat = %lat, lon = %lon, "Fetching air quality");

        let lat = lat.to_string();
        let lon = lon.to_string();
        let body = self
            .fetcher
            .fetch_json(
                &self.url,
                &[
                    ("lat", lat.as_str()),
                    ("lon", lon.as_str()),
                    ("appid", api_key),
                ],
            )
            .await?;

        let data: AirPollutionResponse = serde_json::from_value(body)
            .map_err(|e| AirQualityError::InvalidResponse(e.to_string()))?;

        let entry = data.list.first().ok_or_else(|| {
            AirQualityError::InvalidResponse("No air pollution data available".to_string())
        })?;

        Ok(AirQuality::from_components(entry.main.aqi, &entry.components))
    }
}
