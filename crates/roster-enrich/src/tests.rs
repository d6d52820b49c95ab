//! Tests for the enrichment client against a local stand-in for the three
//! lookup services.
//!
//! The stand-in is a throwaway axum server on an ephemeral port; each
//! endpoint serves one canned response and counts its hits so the tests can
//! assert which lookups were actually attempted.

use std::{
  sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
  },
  time::Duration,
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use roster_core::{enrich::Enricher, person::PersonDraft};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::{ApiEnricher, EnrichConfig, Error, Lookup};

// ─── Lookup stand-in ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct Canned {
  hits:   Arc<AtomicUsize>,
  status: StatusCode,
  body:   Value,
}

impl Canned {
  fn ok(body: Value) -> Self {
    Self::status(StatusCode::OK, body)
  }

  fn status(status: StatusCode, body: Value) -> Self {
    Self { hits: Arc::new(AtomicUsize::new(0)), status, body }
  }

  fn respond(&self) -> (StatusCode, Json<Value>) {
    self.hits.fetch_add(1, Ordering::SeqCst);
    (self.status, Json(self.body.clone()))
  }

  fn hits(&self) -> usize {
    self.hits.load(Ordering::SeqCst)
  }
}

#[derive(Clone)]
struct MockApis {
  age:         Canned,
  gender:      Canned,
  nationality: Canned,
}

impl MockApis {
  fn all_ok() -> Self {
    Self {
      age:         Canned::ok(json!({ "name": "dmitriy", "age": 54, "count": 100 })),
      gender:      Canned::ok(
        json!({ "name": "dmitriy", "gender": "male", "probability": 0.98 }),
      ),
      nationality: Canned::ok(json!({
        "name": "dmitriy",
        "country": [
          { "country_id": "UA", "probability": 0.42 },
          { "country_id": "RU", "probability": 0.31 }
        ]
      })),
    }
  }
}

async fn age_handler(State(apis): State<MockApis>) -> (StatusCode, Json<Value>) {
  apis.age.respond()
}

async fn gender_handler(State(apis): State<MockApis>) -> (StatusCode, Json<Value>) {
  apis.gender.respond()
}

async fn nationality_handler(
  State(apis): State<MockApis>,
) -> (StatusCode, Json<Value>) {
  apis.nationality.respond()
}

/// Bind the stand-in on an ephemeral port and return its base URL.
async fn serve(apis: MockApis) -> String {
  let app = Router::new()
    .route("/age/", get(age_handler))
    .route("/gender/", get(gender_handler))
    .route("/nationality/", get(nationality_handler))
    .with_state(apis);

  let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
  let addr = listener.local_addr().expect("local addr");
  tokio::spawn(async move {
    axum::serve(listener, app).await.expect("mock server");
  });
  format!("http://{addr}")
}

fn enricher(base: &str) -> ApiEnricher {
  ApiEnricher::with_config(EnrichConfig {
    agify_url:       format!("{base}/age"),
    genderize_url:   format!("{base}/gender"),
    nationalize_url: format!("{base}/nationality"),
    timeout:         Duration::from_secs(5),
  })
  .expect("client")
}

fn draft() -> PersonDraft {
  PersonDraft {
    name: "Dmitriy".into(),
    surname: "Ushakov".into(),
    ..PersonDraft::default()
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn enrich_populates_all_three_fields() {
  let apis = MockApis::all_ok();
  let base = serve(apis.clone()).await;

  let mut d = draft();
  enricher(&base).enrich(&mut d).await.unwrap();

  assert_eq!(d.age, 54);
  assert_eq!(d.gender, "male");
  assert_eq!(d.nationality, "UA");

  assert_eq!(apis.age.hits(), 1);
  assert_eq!(apis.gender.hits(), 1);
  assert_eq!(apis.nationality.hits(), 1);
}

#[tokio::test]
async fn gender_failure_aborts_before_nationality() {
  let mut apis = MockApis::all_ok();
  apis.gender =
    Canned::status(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "down" }));
  let base = serve(apis.clone()).await;

  let mut d = draft();
  let err = enricher(&base).enrich(&mut d).await.unwrap_err();

  assert_eq!(err.lookup(), Some(Lookup::Gender));
  assert!(matches!(err, Error::Status { .. }));

  // The age lookup ran; the nationality lookup was never attempted.
  assert_eq!(apis.age.hits(), 1);
  assert_eq!(apis.nationality.hits(), 0);
}

#[tokio::test]
async fn empty_country_list_yields_unknown_not_failure() {
  let mut apis = MockApis::all_ok();
  apis.nationality = Canned::ok(json!({ "name": "zzyzx", "country": [] }));
  let base = serve(apis.clone()).await;

  let mut d = draft();
  enricher(&base).enrich(&mut d).await.unwrap();

  assert_eq!(d.nationality, "unknown");
}

#[tokio::test]
async fn null_age_decodes_as_zero() {
  let mut apis = MockApis::all_ok();
  apis.age = Canned::ok(json!({ "name": "zzyzx", "age": null, "count": 0 }));
  let base = serve(apis.clone()).await;

  let mut d = draft();
  enricher(&base).enrich(&mut d).await.unwrap();

  assert_eq!(d.age, 0);
}

#[tokio::test]
async fn undecodable_body_names_the_failing_lookup() {
  let mut apis = MockApis::all_ok();
  apis.age = Canned::ok(json!("not an object"));
  let base = serve(apis.clone()).await;

  let mut d = draft();
  let err = enricher(&base).enrich(&mut d).await.unwrap_err();

  assert!(matches!(err, Error::Decode { lookup: Lookup::Age, .. }));
}

#[tokio::test]
async fn connection_failure_surfaces_as_request_error() {
  // Nothing is listening on this port.
  let e = ApiEnricher::with_config(EnrichConfig {
    agify_url:       "http://127.0.0.1:9".into(),
    genderize_url:   "http://127.0.0.1:9".into(),
    nationalize_url: "http://127.0.0.1:9".into(),
    timeout:         Duration::from_secs(1),
  })
  .unwrap();

  let mut d = draft();
  let err = e.enrich(&mut d).await.unwrap_err();
  assert!(matches!(err, Error::Request { lookup: Lookup::Age, .. }));
}
