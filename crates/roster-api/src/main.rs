//! roster server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, and serves the person API over HTTP.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use clap::Parser;
use roster_api::ServerConfig;
use roster_core::service::PersonService;
use roster_enrich::{ApiEnricher, EnrichConfig};
use roster_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roster person service")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ROSTER"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open SQLite store.
  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| {
      format!("failed to open store at {:?}", server_cfg.store_path)
    })?;

  // Build the enricher, honouring any lookup overrides from the config.
  let mut enrich_cfg = EnrichConfig::default();
  if let Some(url) = server_cfg.agify_url.clone() {
    enrich_cfg.agify_url = url;
  }
  if let Some(url) = server_cfg.genderize_url.clone() {
    enrich_cfg.genderize_url = url;
  }
  if let Some(url) = server_cfg.nationalize_url.clone() {
    enrich_cfg.nationalize_url = url;
  }
  enrich_cfg.timeout = Duration::from_secs(server_cfg.lookup_timeout_secs);

  let enricher =
    ApiEnricher::with_config(enrich_cfg).context("failed to build enricher")?;

  let service = Arc::new(PersonService::new(store, enricher));

  let app = axum::Router::new()
    .nest("/api", roster_api::api_router(service))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
