use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Shared HTTP client configuration
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 90;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network failure, timeout, or a success body that is not valid JSON
    #[error("Request failed: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

/// Issues a single GET and hands back the parsed JSON body
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError>;
}

/// Conventional error body returned by OpenWeatherMap,
/// e.g. `{"cod": "404", "message": "city not found"}`
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// `JsonFetcher` backed by a pooled reqwest client
#[derive(Clone)]
pub struct ReqwestJsonClient {
    client: Client,
}

impl ReqwestJsonClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a client with per-call and connect timeouts
    pub fn with_timeouts(timeout: Duration, connect_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::new(client))
    }
}

#[async_trait]
impl JsonFetcher for ReqwestJsonClient {
    async fn fetch_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        tracing::debug!(url = %url, status = %status, "Received provider response");

        let body = response.text().await.map_err(|e| transport_error(&e))?;

        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: error_message(&body, status.as_u16()),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| FetchError::Transport(format!("Malformed JSON body: {e}")))
    }
}

fn transport_error(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Transport(format!("Request timed out: {err}"))
    } else {
        FetchError::Transport(err.to_string())
    }
}

/// Pull the provider's `message` field out of an error body, or describe the status
fn error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ProviderErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("HTTP {}", status))
}
