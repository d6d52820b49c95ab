//! Handlers for `/people` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/people` | Body: creation payload; enriched before persisting |
//! | `GET`    | `/people` | `?name=&surname=&page=&limit=` |
//! | `PUT`    | `/people/{id}` | Body: untyped patch object; 404 if not found |
//! | `DELETE` | `/people/{id}` | 204 on success |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  enrich::Enricher,
  patch::PersonPatch,
  person::{NewPerson, Person},
  service::PersonService,
  store::{PersonQuery, PersonStore},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /people` — body: `{"name":"...","surname":"...","patronymic":"..."}`
pub async fn create<S, E>(
  State(service): State<Arc<PersonService<S, E>>>,
  Json(input): Json<NewPerson>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let person = service.add(input).await?;
  Ok((StatusCode::CREATED, Json(person)))
}

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub name:    Option<String>,
  pub surname: Option<String>,
  #[serde(default = "default_page")]
  pub page:    u32,
  #[serde(default = "default_limit")]
  pub limit:   u32,
}

fn default_page() -> u32 {
  1
}

fn default_limit() -> u32 {
  10
}

/// `GET /people[?name=..&surname=..&page=..&limit=..]`
pub async fn list<S, E>(
  State(service): State<Arc<PersonService<S, E>>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let query = PersonQuery {
    name:    params.name,
    surname: params.surname,
    page:    params.page,
    limit:   params.limit,
  };
  let people = service.list(&query).await?;
  Ok(Json(people))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /people/{id}` — body: partial field map, e.g. `{"age": "29"}`
pub async fn update_one<S, E>(
  State(service): State<Arc<PersonService<S, E>>>,
  Path(id): Path<Uuid>,
  Json(patch): Json<PersonPatch>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  let person = service.update(id, &patch).await?;
  Ok(Json(person))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /people/{id}`
pub async fn delete_one<S, E>(
  State(service): State<Arc<PersonService<S, E>>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore,
  E: Enricher,
{
  service.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
