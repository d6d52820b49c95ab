//! JSON REST API for roster.
//!
//! Exposes an axum [`Router`] backed by any [`PersonStore`] + [`Enricher`]
//! pair composed into a [`PersonService`]. Auth, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", roster_api::api_router(service.clone()))
//! ```

pub mod error;
pub mod people;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, put},
};
use roster_core::{enrich::Enricher, service::PersonService, store::PersonStore};
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Server settings as read from `config.toml` layered with the `ROSTER_*`
/// environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  /// SQLite database file.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Lookup service overrides; the public endpoints are used when unset.
  pub agify_url:       Option<String>,
  pub genderize_url:   Option<String>,
  pub nationalize_url: Option<String>,
  /// Per-lookup timeout in seconds.
  #[serde(default = "default_lookup_timeout_secs")]
  pub lookup_timeout_secs: u64,
}

fn default_host() -> String {
  "127.0.0.1".into()
}

fn default_port() -> u16 {
  8080
}

fn default_store_path() -> PathBuf {
  "roster.db".into()
}

fn default_lookup_timeout_secs() -> u64 {
  30
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, E>(service: Arc<PersonService<S, E>>) -> Router<()>
where
  S: PersonStore + 'static,
  E: Enricher + 'static,
{
  Router::new()
    .route("/people", get(people::list::<S, E>).post(people::create::<S, E>))
    .route(
      "/people/{id}",
      put(people::update_one::<S, E>).delete(people::delete_one::<S, E>),
    )
    .with_state(service)
}
