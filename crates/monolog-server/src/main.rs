use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use monolog_server::config::ServerConfig;
use monolog_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let profile = config.load_profile()?;
    let state = AppState::new(profile);

    if !config.assets_dir.join("index.html").exists() {
        tracing::warn!(
            assets_dir = %config.assets_dir.display(),
            "index.html not found, SPA fallback will return 404"
        );
    }

    let app = monolog_server::app(state, &config.assets_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
