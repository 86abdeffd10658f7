use chrono::DateTime;
use std::sync::Arc;
use thiserror::Error;

use super::models::*;
use crate::client::{FetchError, JsonFetcher};

/// Used when the provider omits `visibility`
const DEFAULT_VISIBILITY_METERS: f64 = 10_000.0;
const MPS_TO_KMH: f64 = 3.6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    #[error("Weather service not configured: OpenWeatherMap API key missing")]
    NotConfigured,

    #[error("Failed to fetch weather data: {0}")]
    Transport(String),

    #[error("API Error: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<FetchError> for WeatherError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Transport(msg) => Self::Transport(msg),
            FetchError::Api { status, message } => Self::ApiError { status, message },
        }
    }
}

pub struct WeatherService {
    fetcher: Arc<dyn JsonFetcher>,
    url: String,
    api_key: Option<String>,
}

impl WeatherService {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            fetcher,
            url: format!("{}/weather", base_url.trim_end_matches('/')),
            api_key,
        }
    }

    /// Fetch and normalize current conditions. Any missing required field fails the whole call.
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::NotConfigured)?;

        tracing::debug!(city = %city, "Fetching current weather");

        let body = self
            .fetcher
            .fetch_json(
                &self.url,
                &[("q", city), ("appid", api_key), ("units", "metric")],
            )
            .await?;

        let data: OpenWeatherMapResponse = serde_json::from_value(body)
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;

        let conditions = normalize(data)?;

        tracing::info!(
            city = %conditions.city,
            temp = %conditions.temperature,
            "Current weather fetched successfully"
        );

        Ok(conditions)
    }
}

fn normalize(data: OpenWeatherMapResponse) -> Result<CurrentConditions, WeatherError> {
    let weather_info = data.weather.first().ok_or_else(|| {
        WeatherError::InvalidResponse("No weather information available".to_string())
    })?;

    let sunrise = format_local_time(data.sys.sunrise, data.timezone).ok_or_else(|| {
        WeatherError::InvalidResponse(format!("Sunrise out of range: {}", data.sys.sunrise))
    })?;
    let sunset = format_local_time(data.sys.sunset, data.timezone).ok_or_else(|| {
        WeatherError::InvalidResponse(format!("Sunset out of range: {}", data.sys.sunset))
    })?;

    Ok(CurrentConditions {
        city: data.name,
        temperature: round_to_tenth(data.main.temp),
        condition: title_case(&weather_info.description),
        humidity: data.main.humidity,
        wind_speed: data.wind.speed * MPS_TO_KMH,
        visibility: data.visibility.unwrap_or(DEFAULT_VISIBILITY_METERS) / 1000.0,
        pressure: data.main.pressure,
        lat: data.coord.lat,
        lon: data.coord.lon,
        sunrise,
        sunset,
    })
}

/// Round half away from zero to one decimal place
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format `utc_ts + offset_secs` as a 12-hour clock ("06:15 AM")
pub fn format_local_time(utc_ts: i64, offset_secs: i64) -> Option<String> {
    let local = DateTime::from_timestamp(utc_ts.checked_add(offset_secs)?, 0)?;
    Some(local.format("%I:%M %p").to_string())
}

/// Uppercase the first letter of every word, lowercase the rest.
/// A word starts after any non-alphabetic character.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
