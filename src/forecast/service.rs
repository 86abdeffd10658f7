use chrono::DateTime;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use super::models::*;
use crate::client::{FetchError, JsonFetcher};

/// 9 entries at 3-hour resolution covers roughly the next 27 hours
const CHART_POINTS: usize = 9;
const WEEKLY_DAYS: usize = 7;
const ICON_URL_BASE: &str = "https://openweathermap.org/img/w";

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Forecast service not configured: OpenWeatherMap API key missing")]
    NotConfigured,

    #[error("Failed to fetch forecast: {0}")]
    RequestError(#[from] FetchError),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

pub struct ForecastService {
    fetcher: Arc<dyn JsonFetcher>,
    url: String,
    api_key: Option<String>,
}

impl ForecastService {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            fetcher,
            url: format!("{}/forecast", base_url.trim_end_matches('/')),
            api_key,
        }
    }

    /// Chart series and weekly strip for a city.
    ///
    /// Never fails: any error is logged and both sequences come back empty.
    pub async fn fetch_forecast(&self, city: &str) -> Forecast {
        match self.try_fetch_forecast(city).await {
            Ok(forecast) => forecast,
            Err(e) => {
                tracing::warn!(
                    city = %city,
                    error = %e,
                    "Forecast unavailable, using empty forecast"
                );
                Forecast::default()
            }
        }
    }

    async fn try_fetch_forecast(&self, city: &str) -> Result<Forecast, ForecastError> {
        let api_key = self.api_key.as_deref().ok_or(ForecastError::NotConfigured)?;

        tracing::debug!(city = %city, "Fetching forecast");

        let body = self
            .fetcher
            .fetch_json(
                &self.url,
                &[("q", city), ("appid", api_key), ("units", "metric")],
            )
            .await?;

        let data: ForecastApiResponse = serde_json::from_value(body)
            .map_err(|e| ForecastError::InvalidResponse(e.to_string()))?;

        let forecast = Forecast {
            chart: chart_series(&data.list)?,
            weekly: weekly_strip(&data.list)?,
        };

        tracing::debug!(
            chart_points = forecast.chart.len(),
            days = forecast.weekly.len(),
            "Forecast fetched successfully"
        );

        Ok(forecast)
    }
}

fn chart_series(entries: &[ForecastEntry]) -> Result<Vec<ForecastPoint>, ForecastError> {
    entries
        .iter()
        .take(CHART_POINTS)
        .map(|e| {
            let time = e.dt_txt.clone().ok_or_else(|| {
                ForecastError::InvalidResponse(format!("Missing dt_txt for entry {}", e.dt))
            })?;
            Ok(ForecastPoint {
                time,
                temperature: temperature(e)?,
            })
        })
        .collect()
}

/// First entry per weekday name, in provider order, at most 7.
///
/// Keyed on the name rather than the date, so a forecast longer than a week
/// would collide on repeated names. The provider's 5-day window never gets there.
fn weekly_strip(entries: &[ForecastEntry]) -> Result<Vec<DailyForecast>, ForecastError> {
    let mut seen = HashSet::new();
    let mut days = Vec::new();

    for entry in entries {
        if days.len() >= WEEKLY_DAYS {
            break;
        }

        let day = weekday_name(entry.dt).ok_or_else(|| {
            ForecastError::InvalidResponse(format!("Timestamp out of range: {}", entry.dt))
        })?;
        if !seen.insert(day.clone()) {
            continue;
        }

        let icon = entry
            .weather
            .first()
            .map(|w| w.icon.clone())
            .ok_or_else(|| {
                ForecastError::InvalidResponse("No weather information available".to_string())
            })?;

        days.push(DailyForecast {
            day,
            temperature: temperature(entry)?.round() as i64,
            icon_url: format!("{}/{}.png", ICON_URL_BASE, icon),
            icon,
        });
    }

    Ok(days)
}

fn temperature(entry: &ForecastEntry) -> Result<f64, ForecastError> {
    entry
        .main
        .as_ref()
        .map(|m| m.temp)
        .ok_or_else(|| {
            ForecastError::InvalidResponse(format!("Missing main for entry {}", entry.dt))
        })
}

/// Weekday name of a UTC unix timestamp
fn weekday_name(utc_ts: i64) -> Option<String> {
    DateTime::from_timestamp(utc_ts, 0).map(|t| t.format("%A").to_string())
}
