pub mod models;
mod service;

pub use models::CurrentConditions;
pub use service::{format_local_time, title_case, WeatherError, WeatherService};
