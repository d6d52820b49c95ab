//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::Error as CoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler; a thin status-code mapping over the
/// core error taxonomy.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] CoreError);

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self.0 {
      CoreError::EmptyField { .. }
      | CoreError::InvalidPatchField { .. }
      | CoreError::InvalidAge(_) => StatusCode::BAD_REQUEST,
      CoreError::PersonNotFound(_) => StatusCode::NOT_FOUND,
      // An upstream lookup failed; the request itself was fine.
      CoreError::Enrichment(_) => StatusCode::BAD_GATEWAY,
      CoreError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
