//! The `PersonStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! Higher layers (`roster-api`, the service) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::person::{Person, PersonDraft};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`PersonStore::find_all`].
#[derive(Debug, Clone)]
pub struct PersonQuery {
  /// Exact-match filter on `name`.
  pub name:    Option<String>,
  /// Exact-match filter on `surname`.
  pub surname: Option<String>,
  /// 1-based page number.
  pub page:    u32,
  /// Records per page. The record offset is `limit * (page - 1)`.
  pub limit:   u32,
}

impl Default for PersonQuery {
  fn default() -> Self {
    Self { name: None, surname: None, page: 1, limit: 10 }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a persisted collection of [`Person`] records.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a draft. The store assigns the identity and the creation
  /// timestamp and returns the stored record.
  fn create(
    &self,
    draft: PersonDraft,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Return the page of records selected by `query`, in insertion order.
  fn find_all<'a>(
    &'a self,
    query: &'a PersonQuery,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;

  /// Retrieve a record by identity. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Persist a full record by identity. Errors if no such record exists.
  fn update<'a>(
    &'a self,
    person: &'a Person,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove a record by identity. Returns whether a record was removed.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
