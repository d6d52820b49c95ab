//! Error types for `roster-enrich`.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Which of the three outbound lookups an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
  Age,
  Gender,
  Nationality,
}

impl fmt::Display for Lookup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Lookup::Age => "age",
      Lookup::Gender => "gender",
      Lookup::Nationality => "nationality",
    })
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  /// The request never produced a response (connect error, timeout, ...).
  #[error("{lookup} lookup request failed: {source}")]
  Request {
    lookup: Lookup,
    #[source]
    source: reqwest::Error,
  },

  #[error("{lookup} lookup returned status {status}")]
  Status { lookup: Lookup, status: StatusCode },

  #[error("{lookup} lookup returned an undecodable body: {source}")]
  Decode {
    lookup: Lookup,
    #[source]
    source: reqwest::Error,
  },
}

impl Error {
  /// The lookup this error came from, if any.
  pub fn lookup(&self) -> Option<Lookup> {
    match self {
      Error::Client(_) => None,
      Error::Request { lookup, .. }
      | Error::Status { lookup, .. }
      | Error::Decode { lookup, .. } => Some(*lookup),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
