//! `PersonService` — the request-level composition of a [`PersonStore`] and
//! an [`Enricher`].
//!
//! Creation enriches first and persists only on full success; updates go
//! through [`apply_patch`] so an invalid patch never reaches the store.

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
  Error, Result,
  enrich::Enricher,
  patch::{PersonPatch, apply_patch},
  person::{NewPerson, Person},
  store::{PersonQuery, PersonStore},
};

pub struct PersonService<S, E> {
  store:    S,
  enricher: E,
}

impl<S, E> PersonService<S, E>
where
  S: PersonStore,
  E: Enricher,
{
  pub fn new(store: S, enricher: E) -> Self {
    Self { store, enricher }
  }

  /// Enrich and persist a new person.
  ///
  /// If any lookup fails the creation is abandoned; nothing is persisted.
  pub async fn add(&self, input: NewPerson) -> Result<Person> {
    if input.name.is_empty() {
      return Err(Error::EmptyField { field: "name" });
    }
    if input.surname.is_empty() {
      return Err(Error::EmptyField { field: "surname" });
    }

    let mut draft = input.into_draft();
    self
      .enricher
      .enrich(&mut draft)
      .await
      .map_err(|e| Error::Enrichment(Box::new(e)))?;

    let person = self
      .store
      .create(draft)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    info!(id = %person.id, "created person");
    Ok(person)
  }

  /// Return one page of records, optionally filtered by exact name/surname.
  ///
  /// Page and limit bounds are a boundary concern; this layer passes them
  /// through as given.
  pub async fn list(&self, query: &PersonQuery) -> Result<Vec<Person>> {
    let people = self
      .store
      .find_all(query)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    debug!(count = people.len(), "fetched people");
    Ok(people)
  }

  /// Apply a patch to an existing person and persist the result.
  ///
  /// An unknown identity fails with [`Error::PersonNotFound`] before the
  /// patch is ever examined.
  pub async fn update(&self, id: Uuid, patch: &PersonPatch) -> Result<Person> {
    let person = self
      .store
      .find_by_id(id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?
      .ok_or(Error::PersonNotFound(id))?;

    let updated = apply_patch(&person, patch)?;

    self
      .store
      .update(&updated)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    info!(id = %id, "updated person");
    Ok(updated)
  }

  pub async fn delete(&self, id: Uuid) -> Result<()> {
    let removed = self
      .store
      .delete(id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    if !removed {
      return Err(Error::PersonNotFound(id));
    }

    info!(id = %id, "deleted person");
    Ok(())
  }
}
