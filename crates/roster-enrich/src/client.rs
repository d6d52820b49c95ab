//! [`ApiEnricher`] — the reqwest-backed enrichment client and its lookup
//! orchestration.

use std::time::Duration;

use reqwest::Client;
use roster_core::{enrich::Enricher, person::PersonDraft};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Lookup, Result};

/// Sentinel nationality when the service has no confident guess.
const UNKNOWN_NATIONALITY: &str = "unknown";

// ─── Configuration ───────────────────────────────────────────────────────────

/// Where each lookup goes and how long to wait for it.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
  pub agify_url:       String,
  pub genderize_url:   String,
  pub nationalize_url: String,
  /// Per-request timeout; there are no retries, so this bounds how long a
  /// single enrichment can stall on one slow service.
  pub timeout:         Duration,
}

impl Default for EnrichConfig {
  fn default() -> Self {
    Self {
      agify_url:       "https://api.agify.io".into(),
      genderize_url:   "https://api.genderize.io".into(),
      nationalize_url: "https://api.nationalize.io".into(),
      timeout:         Duration::from_secs(30),
    }
  }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Enrichment client over the agify/genderize/nationalize lookup services.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiEnricher {
  client: Client,
  config: EnrichConfig,
}

/// `{"age": 54}`; `null` for names the service has never seen.
#[derive(Debug, Deserialize)]
struct AgeResponse {
  age: Option<i64>,
}

/// `{"gender": "male"}`; `null` for names the service has never seen.
#[derive(Debug, Deserialize)]
struct GenderResponse {
  gender: Option<String>,
}

/// `{"country": [{"country_id": "UA"}, ...]}` ordered by descending
/// confidence.
#[derive(Debug, Deserialize)]
struct NationalizeResponse {
  #[serde(default)]
  country: Vec<CountryGuess>,
}

#[derive(Debug, Deserialize)]
struct CountryGuess {
  country_id: String,
}

impl ApiEnricher {
  /// Build an enricher against the public lookup services.
  pub fn new() -> Result<Self> {
    Self::with_config(EnrichConfig::default())
  }

  pub fn with_config(config: EnrichConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(Error::Client)?;
    Ok(Self { client, config })
  }

  /// `GET {base}/?name=<name>`, decoding the JSON body as `T`.
  async fn fetch<T>(&self, lookup: Lookup, base: &str, name: &str) -> Result<T>
  where
    T: serde::de::DeserializeOwned,
  {
    let resp = self
      .client
      .get(format!("{}/", base.trim_end_matches('/')))
      .query(&[("name", name)])
      .send()
      .await
      .map_err(|e| Error::Request { lookup, source: e })?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status { lookup, status });
    }

    resp
      .json::<T>()
      .await
      .map_err(|e| Error::Decode { lookup, source: e })
  }

  async fn lookup_age(&self, name: &str) -> Result<i64> {
    let resp: AgeResponse =
      self.fetch(Lookup::Age, &self.config.agify_url, name).await?;
    Ok(resp.age.unwrap_or(0))
  }

  async fn lookup_gender(&self, name: &str) -> Result<String> {
    let resp: GenderResponse =
      self.fetch(Lookup::Gender, &self.config.genderize_url, name).await?;
    Ok(resp.gender.unwrap_or_default())
  }

  /// The highest-confidence guess wins. An empty list is not an error — the
  /// absence of a confident guess maps to the `"unknown"` sentinel.
  async fn lookup_nationality(&self, name: &str) -> Result<String> {
    let resp: NationalizeResponse = self
      .fetch(Lookup::Nationality, &self.config.nationalize_url, name)
      .await?;
    Ok(
      resp
        .country
        .into_iter()
        .next()
        .map(|c| c.country_id)
        .unwrap_or_else(|| UNKNOWN_NATIONALITY.into()),
    )
  }
}

impl Enricher for ApiEnricher {
  type Error = Error;

  /// Run the three lookups in fixed order — age, then gender, then
  /// nationality — aborting on the first failure. A gender failure means the
  /// nationality request is never issued; the caller must not persist the
  /// draft on error.
  async fn enrich(&self, draft: &mut PersonDraft) -> Result<()> {
    draft.age = self.lookup_age(&draft.name).await?;
    draft.gender = self.lookup_gender(&draft.name).await?;
    draft.nationality = self.lookup_nationality(&draft.name).await?;

    debug!(name = %draft.name, "enriched draft");
    Ok(())
  }
}
