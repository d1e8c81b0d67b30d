// Smoke-test page server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lamp_smoke::app;
use lamp_smoke::config::PageConfig;
use lamp_smoke::db::MySqlConnector;
use lamp_smoke::error::{AppError, AppResult};
use lamp_smoke::handlers::PageState;
use lamp_smoke::services::page::HealthPage;

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() -> AppResult<()> {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load page configuration from environment
    let config = PageConfig::from_env();
    tracing::info!(
        site = %config.site_fqdn,
        database = ?config.database,
        "Configuration loaded"
    );

    // No connection is opened here; each page render makes its own attempt
    let page = HealthPage::new(config.database.clone(), Arc::new(MySqlConnector::new()));
    let app_state = Arc::new(PageState::new(page, config.site_fqdn.clone()));
    let app = app::router(app_state);

    // Parse server address from config
    let server_addr = config.server_addr();
    let addr: SocketAddr = server_addr
        .parse()
        .map_err(|e| AppError::InvalidAddress(server_addr.clone(), e))?;

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Bind(server_addr, e))?;
    axum::serve(listener, app).await?;

    Ok(())
}
