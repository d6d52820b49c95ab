//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use roster_core::{
  person::{Person, PersonDraft},
  store::{PersonQuery, PersonStore},
};

use crate::{
  Error, Result,
  encode::{RawPerson, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster person store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

const SELECT_COLUMNS: &str =
  "id, name, surname, patronymic, age, gender, nationality, created_at";

fn row_to_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawPerson> {
  Ok(RawPerson {
    id:          row.get(0)?,
    name:        row.get(1)?,
    surname:     row.get(2)?,
    patronymic:  row.get(3)?,
    age:         row.get(4)?,
    gender:      row.get(5)?,
    nationality: row.get(6)?,
    created_at:  row.get(7)?,
  })
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn create(&self, draft: PersonDraft) -> Result<Person> {
    let person = Person {
      id:          Uuid::new_v4(),
      name:        draft.name,
      surname:     draft.surname,
      patronymic:  draft.patronymic,
      age:         draft.age,
      gender:      draft.gender,
      nationality: draft.nationality,
      created_at:  Utc::now(),
    };

    let id_str = encode_uuid(person.id);
    let at_str = encode_dt(person.created_at);
    let row = person.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO people (
             id, name, surname, patronymic, age, gender, nationality, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            row.name,
            row.surname,
            row.patronymic,
            row.age,
            row.gender,
            row.nationality,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(person)
  }

  async fn find_all(&self, query: &PersonQuery) -> Result<Vec<Person>> {
    let name_filter    = query.name.clone();
    let surname_filter = query.surname.clone();
    let limit_val      = i64::from(query.limit);
    // 1-based pages; the first page starts at row zero.
    let offset_val     = i64::from(query.limit) * i64::from(query.page.saturating_sub(1));

    let raws: Vec<RawPerson> = self
      .conn
      .call(move |conn| {
        // Build WHERE clause dynamically; exact matches only.
        let mut conds: Vec<&'static str> = vec![];
        if name_filter.is_some() {
          conds.push("name = ?1");
        }
        if surname_filter.is_some() {
          conds.push("surname = ?2");
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT {SELECT_COLUMNS}
           FROM people
           {where_clause}
           ORDER BY rowid
           LIMIT ?3 OFFSET ?4"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![
              name_filter.as_deref(),
              surname_filter.as_deref(),
              limit_val,
              offset_val,
            ],
            row_to_raw,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Person>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {SELECT_COLUMNS} FROM people WHERE id = ?1"),
              rusqlite::params![id_str],
              row_to_raw,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn update(&self, person: &Person) -> Result<()> {
    let id_str = encode_uuid(person.id);
    let row = person.clone();

    // created_at is immutable; it is deliberately absent from the SET list.
    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE people
           SET name = ?2, surname = ?3, patronymic = ?4,
               age = ?5, gender = ?6, nationality = ?7
           WHERE id = ?1",
          rusqlite::params![
            id_str,
            row.name,
            row.surname,
            row.patronymic,
            row.age,
            row.gender,
            row.nationality,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::PersonNotFound(person.id));
    }
    Ok(())
  }

  async fn delete(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let removed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM people WHERE id = ?1", rusqlite::params![id_str])?)
      })
      .await?;

    Ok(removed > 0)
  }
}
