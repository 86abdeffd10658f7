use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Variable name used by earlier deployments of the dashboard
const LEGACY_API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// OpenWeatherMap API key. Absence is reported per request, not at startup.
    #[serde(default)]
    pub openweathermap_api_key: Option<String>,

    /// City used when the search box is left blank
    #[serde(default = "default_city")]
    pub default_city: String,

    /// OpenWeatherMap data API root
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-call timeout for provider requests
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    #[serde(default = "default_http_connect_timeout_secs")]
    pub http_connect_timeout_secs: u64,

    /// Overall timeout for an incoming request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_city() -> String {
    "Bangalore".to_string()
}

fn default_api_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_http_timeout_secs() -> u64 {
    10
}

fn default_http_connect_timeout_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            openweathermap_api_key: None,
            default_city: default_city(),
            api_base_url: default_api_base_url(),
            http_timeout_secs: default_http_timeout_secs(),
            http_connect_timeout_secs: default_http_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Start with default values
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            .set_default("default_city", default_city())?
            .set_default("api_base_url", default_api_base_url())?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with DASHBOARD_)
            .add_source(
                Environment::with_prefix("DASHBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config.with_legacy_api_key(std::env::var(LEGACY_API_KEY_VAR).ok()))
    }

    /// Fall back to the legacy variable, and treat an empty key as missing
    fn with_legacy_api_key(mut self, legacy: Option<String>) -> Self {
        let key = self
            .openweathermap_api_key
            .take()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| legacy.filter(|k| !k.trim().is_empty()));
        self.openweathermap_api_key = key;
        self
    }

    pub fn api_key_configured(&self) -> bool {
        self.openweathermap_api_key.is_some()
    }
}
