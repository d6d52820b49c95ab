//! Conversion helpers between domain types and their SQLite representations.

use chrono::{DateTime, Utc};
use roster_core::person::Person;
use uuid::Uuid;

use crate::{Error, Result};

pub fn encode_uuid(id: Uuid) -> String {
  id.to_string()
}

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

/// A `people` row as read from SQLite, before field decoding.
pub struct RawPerson {
  pub id:          String,
  pub name:        String,
  pub surname:     String,
  pub patronymic:  String,
  pub age:         i64,
  pub gender:      String,
  pub nationality: String,
  pub created_at:  String,
}

impl RawPerson {
  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:          Uuid::parse_str(&self.id)?,
      name:        self.name,
      surname:     self.surname,
      patronymic:  self.patronymic,
      age:         self.age,
      gender:      self.gender,
      nationality: self.nationality,
      created_at:  DateTime::parse_from_rfc3339(&self.created_at)
        .map_err(|e| Error::DateParse(e.to_string()))?
        .with_timezone(&Utc),
    })
  }
}
