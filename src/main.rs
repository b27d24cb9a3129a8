use std::sync::Arc;
use std::time::Duration;

use four_weeks::config::Config;
use four_weeks::fetcher::Fetcher;
use four_weeks::page::HomePage;
use four_weeks::routes::{self, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "four_weeks=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load_or_default("four_weeks.toml")?;
    info!("Reading news from {}", Fetcher::news_url(&config.api_base));

    // Mount the home page; the news load runs in the background
    let fetcher = Fetcher::new(&config.api_base, Duration::from_secs(config.request_timeout))?;
    let page = Arc::new(HomePage::new());
    let mount = page.mount(fetcher);

    let state = Arc::new(AppState { page });
    let app = routes::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server starting on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    mount.unmount();
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
