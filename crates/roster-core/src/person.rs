//! Person — the record type and its creation-time precursors.
//!
//! A [`Person`] only ever comes out of a store. Callers hand in a
//! [`NewPerson`] payload, which becomes a [`PersonDraft`] that the enricher
//! fills in before the store assigns identity and timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted, enriched person record.
///
/// `id` and `created_at` are assigned by the store on creation and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
  pub id:          Uuid,
  pub name:        String,
  pub surname:     String,
  /// May be empty — not every person has one.
  pub patronymic:  String,
  pub age:         i64,
  /// Gender token, e.g. `"male"` / `"female"`; empty when unknown.
  pub gender:      String,
  /// Country token from the nationality lookup, or `"unknown"`.
  pub nationality: String,
  pub created_at:  DateTime<Utc>,
}

/// Creation payload as accepted at the boundary.
///
/// Carries no identity and no enrichment fields; those are populated
/// downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerson {
  pub name:       String,
  pub surname:    String,
  #[serde(default)]
  pub patronymic: String,
}

/// A record on its way to persistence: name fields set, enrichment fields
/// awaiting the enricher, identity and timestamp awaiting the store.
#[derive(Debug, Clone, Default)]
pub struct PersonDraft {
  pub name:        String,
  pub surname:     String,
  pub patronymic:  String,
  pub age:         i64,
  pub gender:      String,
  pub nationality: String,
}

impl NewPerson {
  /// Build a draft with enrichment fields unset.
  pub fn into_draft(self) -> PersonDraft {
    PersonDraft {
      name: self.name,
      surname: self.surname,
      patronymic: self.patronymic,
      ..PersonDraft::default()
    }
  }
}
