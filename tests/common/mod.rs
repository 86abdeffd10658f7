#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::MockServer;

use weather_dashboard::client::ReqwestJsonClient;
use weather_dashboard::config::AppConfig;
use weather_dashboard::dashboard::DashboardService;
use weather_dashboard::routes::build_router;
use weather_dashboard::AppState;

pub const API_KEY: &str = "integration_key";
pub const API_PREFIX: &str = "/data/2.5";

/// 2023-11-13 00:00:00 UTC, a Monday
pub const MONDAY: i64 = 1_699_833_600;

pub fn test_client() -> ReqwestJsonClient {
    ReqwestJsonClient::with_timeouts(Duration::from_millis(500), Duration::from_millis(500))
        .expect("client builds")
}

/// Router wired against a mock provider
pub fn app(server: &MockServer, api_key: Option<&str>) -> Router {
    let config = AppConfig {
        openweathermap_api_key: api_key.map(str::to_string),
        api_base_url: format!("{}{}", server.uri(), API_PREFIX),
        ..AppConfig::default()
    };

    let dashboard_service = Arc::new(DashboardService::from_config(
        Arc::new(test_client()),
        &config,
    ));

    build_router(AppState {
        dashboard_service,
        config: Arc::new(config),
    })
}

/// Issue a GET against the router, returning status and parsed JSON body
pub async fn get_json(app: Router, uri: &str) -> (u16, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn current_weather_body(name: &str) -> Value {
    json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [
            { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }
        ],
        "main": { "temp": 11.04, "feels_like": 10.2, "pressure": 1008, "humidity": 87 },
        "wind": { "speed": 5.0, "deg": 230 },
        "dt": 1700000000,
        "sys": { "country": "GB", "sunrise": 1699946160, "sunset": 1699979100 },
        "timezone": 0,
        "name": name,
        "cod": 200
    })
}

pub fn forecast_body(count: usize) -> Value {
    let list: Vec<Value> = (0..count)
        .map(|i| {
            let dt = MONDAY + i as i64 * 3 * 3600;
            let label = chrono::DateTime::from_timestamp(dt, 0)
                .unwrap()
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            json!({
                "dt": dt,
                "main": { "temp": 8.0 + i as f64 * 0.25 },
                "weather": [ { "icon": "04n" } ],
                "dt_txt": label
            })
        })
        .collect();
    json!({ "cod": "200", "cnt": count, "list": list })
}

pub fn air_pollution_body(aqi: u32) -> Value {
    json!({
        "list": [{
            "main": { "aqi": aqi },
            "components": { "co": 201.94, "no2": 15.1, "o3": 68.66, "pm2_5": 0.5, "pm10": 0.54, "nh3": 0.12 }
        }]
    })
}
