//! Garden Weather Advisor - server entry point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use garden_advisor_backend::{create_app, services::AdvisoryService, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gwa_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Garden Weather Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    // Create application state
    let state = AppState {
        advisory: AdvisoryService::new(&config),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
