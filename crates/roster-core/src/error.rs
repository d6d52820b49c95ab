//! Error types for `roster-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// A required input field was missing or empty.
  #[error("{field} must not be empty")]
  EmptyField { field: &'static str },

  /// A recognized patch key carried a value of the wrong type.
  #[error("invalid value for {field}: expected {expected}, got {actual}")]
  InvalidPatchField {
    field:    &'static str,
    expected: &'static str,
    actual:   &'static str,
  },

  /// An age string that failed base-10 integer parsing.
  #[error("invalid age value: {0}")]
  InvalidAge(String),

  #[error("person not found: {0}")]
  PersonNotFound(Uuid),

  #[error("enrichment failed: {0}")]
  Enrichment(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("storage error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
