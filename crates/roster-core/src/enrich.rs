//! The `Enricher` trait — outbound demographic lookups.

use std::future::Future;

use crate::person::PersonDraft;

/// Populates `age`, `gender` and `nationality` on a draft from external
/// lookup services keyed by the draft's first name.
///
/// The contract is all-or-nothing at the record level: on error the draft
/// must not be persisted, whatever fields the implementation may already
/// have written to it.
pub trait Enricher: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn enrich<'a>(
    &'a self,
    draft: &'a mut PersonDraft,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
