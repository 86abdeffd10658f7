pub mod models;
mod service;

pub use models::{DailyForecast, Forecast, ForecastPoint};
pub use service::{ForecastError, ForecastService};
