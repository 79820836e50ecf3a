//! Main entry point for the Route View Gateway

use route_view_gateway::{
    api,
    config::Settings,
    provider::{DgisRoutingClient, RoutingProvider},
    AppState,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Secrets usually come from a local .env file
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Load configuration
    let settings = Settings::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let json = settings.logging.is_json();

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer()))
        .init();

    info!(dotenv = dotenv_loaded, "Starting Route View Gateway");

    settings.validate()?;
    info!(
        "Loaded configuration: server={}:{}, provider={}",
        settings.server.host,
        settings.server.port,
        settings.routing.url()
    );

    let provider: Arc<dyn RoutingProvider> = Arc::new(DgisRoutingClient::new(&settings.routing)?);
    info!(
        provider = %provider.name(),
        timeout_ms = settings.routing.timeout_ms,
        "Routing provider initialized"
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Create application state
    let app_state = Arc::new(AppState {
        settings: Arc::new(settings),
        provider,
    });

    // Build the router
    let app = api::routes::create_router(app_state);

    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
