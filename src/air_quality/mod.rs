pub mod models;
mod service;

pub use models::{AirQuality, AqiStatus, PollutantReading, Severity};
pub use service::{AirQualityError, AirQualityService};
