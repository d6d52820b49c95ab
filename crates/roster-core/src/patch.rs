//! Patch application — merging an untyped bag of field changes into a typed
//! record.
//!
//! A patch arrives off the wire as JSON with no schema; each value is kept as
//! a [`PatchValue`] variant so per-field coercion can match on the observed
//! kind instead of inspecting types at runtime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result, person::Person};

// ─── Patch types ─────────────────────────────────────────────────────────────

/// A single untyped patch value as received off the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchValue {
  Int(i64),
  Float(f64),
  Text(String),
  /// Anything else (object, array, boolean, null). Carried only so a
  /// rejection can name the observed kind.
  Other(Value),
}

impl PatchValue {
  /// JSON kind name used in rejection messages.
  pub fn kind(&self) -> &'static str {
    match self {
      PatchValue::Int(_) => "integer",
      PatchValue::Float(_) => "number",
      PatchValue::Text(_) => "string",
      PatchValue::Other(Value::Object(_)) => "object",
      PatchValue::Other(Value::Array(_)) => "array",
      PatchValue::Other(Value::Bool(_)) => "boolean",
      _ => "null",
    }
  }
}

/// An unordered set of field changes keyed by field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonPatch(pub BTreeMap<String, PatchValue>);

// ─── Application ─────────────────────────────────────────────────────────────

/// Apply `patch` to a copy of `person`, leaving the original untouched.
///
/// Only the enumerated field names are ever matched; unrecognized keys are
/// silently skipped. Any single invalid value rejects the whole patch — the
/// working copy is discarded, so no partially-updated record can escape.
/// `id` and `created_at` are never touched.
pub fn apply_patch(person: &Person, patch: &PersonPatch) -> Result<Person> {
  let mut updated = person.clone();

  for (field, value) in &patch.0 {
    match field.as_str() {
      "name" => updated.name = text_value("name", value)?,
      "surname" => updated.surname = text_value("surname", value)?,
      "patronymic" => updated.patronymic = text_value("patronymic", value)?,
      "gender" => updated.gender = text_value("gender", value)?,
      "nationality" => updated.nationality = text_value("nationality", value)?,
      "age" => updated.age = age_value(value)?,
      _ => {}
    }
  }

  Ok(updated)
}

fn text_value(field: &'static str, value: &PatchValue) -> Result<String> {
  match value {
    PatchValue::Text(s) => Ok(s.clone()),
    other => Err(Error::InvalidPatchField {
      field,
      expected: "string",
      actual: other.kind(),
    }),
  }
}

fn age_value(value: &PatchValue) -> Result<i64> {
  match value {
    PatchValue::Int(n) => Ok(*n),
    // Fractional ages truncate toward zero.
    PatchValue::Float(f) => Ok(*f as i64),
    PatchValue::Text(s) => {
      s.parse::<i64>().map_err(|e| Error::InvalidAge(format!("{s:?}: {e}")))
    }
    other => Err(Error::InvalidPatchField {
      field: "age",
      expected: "integer, number or numeric string",
      actual: other.kind(),
    }),
  }
}
