use std::{sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_dashboard::client::ReqwestJsonClient;
use weather_dashboard::config::AppConfig;
use weather_dashboard::dashboard::DashboardService;
use weather_dashboard::routes::build_router;
use weather_dashboard::AppState;

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl+c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(default_city = %config.default_city, "Configuration loaded successfully");

    if !config.api_key_configured() {
        tracing::warn!(
            "No OpenWeatherMap API key configured; set DASHBOARD_OPENWEATHERMAP_API_KEY. \
             Dashboard requests will report a configuration error."
        );
    }

    // Create shared HTTP client with connection pooling
    let http_client = ReqwestJsonClient::with_timeouts(
        Duration::from_secs(config.http_timeout_secs),
        Duration::from_secs(config.http_connect_timeout_secs),
    )?;
    tracing::debug!("Shared HTTP client created");

    let dashboard_service = Arc::new(DashboardService::from_config(
        Arc::new(http_client),
        &config,
    ));

    let addr = format!("{}:{}", config.host, config.port);

    let state = AppState {
        dashboard_service,
        config: Arc::new(config),
    };

    let app = build_router(state);

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
