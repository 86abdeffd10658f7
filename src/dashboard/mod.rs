pub mod handlers;
pub mod models;
mod service;

pub use models::DashboardViewModel;
pub use service::{DashboardError, DashboardService};
