use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::client::{FetchError, JsonFetcher};

pub const TEST_BASE_URL: &str = "http://provider.test/data/2.5";
pub const TEST_API_KEY: &str = "test_api_key";

/// Scripted `JsonFetcher`: answers per endpoint (last path segment) and records every call
#[derive(Default)]
pub struct FakeFetcher {
    responses: Mutex<HashMap<String, Result<Value, FetchError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, endpoint: &str, response: Result<Value, FetchError>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), response);
        self
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.endpoint == endpoint)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_query(&self, endpoint: &str) -> Option<Vec<(String, String)>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|c| c.endpoint == endpoint)
            .map(|c| c.query.clone())
    }
}

#[async_trait]
impl JsonFetcher for FakeFetcher {
    async fn fetch_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        let endpoint = url.rsplit('/').next().unwrap_or_default().to_string();
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.clone(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        self.responses
            .lock()
            .unwrap()
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Transport(format!("no route for {endpoint}"))))
    }
}

/// Fetcher that panics on any call
pub struct PanickingFetcher;

#[async_trait]
impl JsonFetcher for PanickingFetcher {
    async fn fetch_json(&self, _url: &str, _query: &[(&str, &str)]) -> Result<Value, FetchError> {
        panic!("provider client exploded");
    }
}

pub fn not_found() -> FetchError {
    FetchError::Api {
        status: 404,
        message: "city not found".to_string(),
    }
}

/// Current-conditions body modeled on the provider's documented response
pub fn current_weather_body() -> Value {
    json!({
        "coord": { "lon": 77.6033, "lat": 12.9762 },
        "weather": [
            { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" }
        ],
        "base": "stations",
        "main": {
            "temp": 24.56,
            "feels_like": 24.8,
            "temp_min": 23.9,
            "temp_max": 25.1,
            "pressure": 1012,
            "humidity": 69
        },
        "visibility": 6000,
        "wind": { "speed": 4.12, "deg": 260 },
        "clouds": { "all": 40 },
        "dt": 1700000000,
        "sys": { "country": "IN", "sunrise": 1699924380, "sunset": 1699966080 },
        "timezone": 19800,
        "id": 1277333,
        "name": "Bengaluru",
        "cod": 200
    })
}

/// One forecast list entry at `dt` (unix seconds)
pub fn forecast_entry(dt: i64, temp: f64, icon: &str) -> Value {
    let label = chrono::DateTime::from_timestamp(dt, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();
    json!({
        "dt": dt,
        "main": { "temp": temp, "humidity": 60 },
        "weather": [ { "id": 800, "main": "Clear", "description": "clear sky", "icon": icon } ],
        "dt_txt": label
    })
}

/// Forecast body with `count` entries spaced `step_secs` apart from `start`
pub fn forecast_body(start: i64, step_secs: i64, count: usize) -> Value {
    let list: Vec<Value> = (0..count)
        .map(|i| {
            let i = i as i64;
            forecast_entry(
                start + i * step_secs,
                20.0 + i as f64 * 0.5,
                &format!("{:02}d", i % 10),
            )
        })
        .collect();
    json!({ "cod": "200", "cnt": count, "list": list, "city": { "name": "Bengaluru" } })
}

pub fn air_pollution_body(aqi: u32) -> Value {
    json!({
        "coord": { "lon": 77.6033, "lat": 12.9762 },
        "list": [{
            "main": { "aqi": aqi },
            "components": {
                "co": 230.31,
                "no": 0.0,
                "no2": 12.34,
                "o3": 68.66,
                "so2": 5.6,
                "pm2_5": 18.2,
                "pm10": 24.9,
                "nh3": 3.1
            },
            "dt": 1700000000
        }]
    })
}
