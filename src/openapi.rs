use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::air_quality::{AirQuality, AqiStatus, PollutantReading, Severity};
use crate::dashboard::DashboardViewModel;
use crate::error::ErrorResponse;
use crate::forecast::{DailyForecast, ForecastPoint};
use crate::weather::CurrentConditions;

/// OpenAPI documentation for the dashboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Dashboard API",
        version = "1.0.0",
        description = "Current conditions, a 27-hour temperature series, a weekly strip and air quality for one city, normalized from OpenWeatherMap.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(crate::dashboard::handlers::get_dashboard),
    tags(
        (name = "dashboard", description = "Aggregated dashboard view model")
    ),
    components(
        schemas(
            ErrorResponse,
            DashboardViewModel,
            CurrentConditions,
            ForecastPoint,
            DailyForecast,
            AirQuality,
            PollutantReading,
            Severity,
            AqiStatus,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
