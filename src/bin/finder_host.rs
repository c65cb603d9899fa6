//! Search service binary.
//!
//! Loads the TOML config (path from `SMK_FINDER_CONFIG`, else the default
//! config path), starts the HTTP server and runs until Ctrl-C.

use anyhow::Context;
use smk_finder::{FinderConfig, FinderServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = FinderConfig::resolve_config_path();
    let config = FinderConfig::load_or_default(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    tracing::info!("smk-finder starting");

    let mut server = FinderServer::start(&config.server, &config.search)
        .await
        .context("failed to start search server")?;

    tokio::select! {
        result = server.wait() => {
            result.context("search server stopped unexpectedly")?;
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for shutdown signal")?;
        }
    }

    server.shutdown();
    tracing::info!("smk-finder shut down cleanly");
    Ok(())
}
