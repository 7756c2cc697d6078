mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "ragdesk failed");
        eprintln!("ragdesk: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| HostError::LogFilter(e.to_string()))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = routes::app()?;
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "ragdesk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
