//! tutor-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus `TUTOR_*`
//! environment overrides, opens the SQLite store, and serves the JSON API
//! over HTTP.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tutor_api::AppState;
use tutor_oracle::OpenAiOracle;
use tutor_server::{ServerConfig, expand_tilde};
use tutor_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Tutoring backend API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let config = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  if config.oracle.api_key.is_empty() {
    tracing::warn!("no oracle API key configured; content generation will fail");
  }

  let store_path = expand_tilde(&config.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let oracle = OpenAiOracle::new(config.oracle.clone())
    .context("failed to build content oracle client")?;
  tracing::info!(
    base_url = %oracle.config().base_url,
    model = %oracle.config().model,
    vision_model = %oracle.config().vision_model,
    timeout_secs = oracle.config().timeout_secs,
    "content oracle ready"
  );

  let app = tutor_server::app(AppState::new(store, oracle), &config);
  let address = config.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
