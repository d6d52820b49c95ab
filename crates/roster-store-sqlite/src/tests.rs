//! Integration tests for `SqliteStore` against an in-memory database.

use roster_core::{
  person::PersonDraft,
  store::{PersonQuery, PersonStore},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory().await.expect("in-memory store")
}

fn draft(name: &str, surname: &str) -> PersonDraft {
  PersonDraft {
    name:        name.into(),
    surname:     surname.into(),
    patronymic:  String::new(),
    age:         35,
    gender:      "male".into(),
    nationality: "RU".into(),
  }
}

// ─── Create / find by id ─────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_identity_and_timestamp() {
  let s = store().await;

  let person = s.create(draft("Ivan", "Ivanov")).await.unwrap();
  assert_ne!(person.id, Uuid::nil());

  let fetched = s.find_by_id(person.id).await.unwrap().unwrap();
  assert_eq!(fetched, person);
}

#[tokio::test]
async fn create_assigns_distinct_identities() {
  let s = store().await;

  let a = s.create(draft("Ivan", "Ivanov")).await.unwrap();
  let b = s.create(draft("Ivan", "Ivanov")).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  let result = s.find_by_id(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

// ─── find_all — filtering and paging ─────────────────────────────────────────

#[tokio::test]
async fn find_all_pages_in_insertion_order() {
  let s = store().await;
  for i in 0..15 {
    s.create(draft(&format!("Person{i}"), "Common")).await.unwrap();
  }

  let page1 = s
    .find_all(&PersonQuery { page: 1, limit: 10, ..PersonQuery::default() })
    .await
    .unwrap();
  assert_eq!(page1.len(), 10);
  assert_eq!(page1[0].name, "Person0");

  // Offset for page 2 is limit * (page - 1) = 10.
  let page2 = s
    .find_all(&PersonQuery { page: 2, limit: 10, ..PersonQuery::default() })
    .await
    .unwrap();
  assert_eq!(page2.len(), 5);
  assert_eq!(page2[0].name, "Person10");
}

#[tokio::test]
async fn find_all_filters_by_exact_surname_with_offset() {
  let s = store().await;
  for i in 0..12 {
    s.create(draft(&format!("Smith{i}"), "Smith")).await.unwrap();
    s.create(draft(&format!("Jones{i}"), "Jones")).await.unwrap();
  }

  let page2 = s
    .find_all(&PersonQuery {
      surname: Some("Smith".into()),
      page: 2,
      limit: 10,
      ..PersonQuery::default()
    })
    .await
    .unwrap();

  // 12 Smiths total; the second page of 10 holds the last two.
  assert_eq!(page2.len(), 2);
  assert!(page2.iter().all(|p| p.surname == "Smith"));
  assert_eq!(page2[0].name, "Smith10");
}

#[tokio::test]
async fn find_all_matches_exactly_not_by_prefix() {
  let s = store().await;
  s.create(draft("Anna", "Smith")).await.unwrap();
  s.create(draft("Boris", "Smithson")).await.unwrap();

  let smiths = s
    .find_all(&PersonQuery { surname: Some("Smith".into()), ..PersonQuery::default() })
    .await
    .unwrap();
  assert_eq!(smiths.len(), 1);
  assert_eq!(smiths[0].name, "Anna");
}

#[tokio::test]
async fn find_all_combines_name_and_surname_filters() {
  let s = store().await;
  s.create(draft("Anna", "Smith")).await.unwrap();
  s.create(draft("Anna", "Jones")).await.unwrap();
  s.create(draft("Boris", "Smith")).await.unwrap();

  let found = s
    .find_all(&PersonQuery {
      name: Some("Anna".into()),
      surname: Some("Smith".into()),
      ..PersonQuery::default()
    })
    .await
    .unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].surname, "Smith");
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_persists_full_record() {
  let s = store().await;
  let mut person = s.create(draft("Ivan", "Ivanov")).await.unwrap();

  person.surname = "Orlov".into();
  person.age = 29;
  s.update(&person).await.unwrap();

  let fetched = s.find_by_id(person.id).await.unwrap().unwrap();
  assert_eq!(fetched.surname, "Orlov");
  assert_eq!(fetched.age, 29);
  // Identity and creation timestamp survive an update untouched.
  assert_eq!(fetched.id, person.id);
  assert_eq!(fetched.created_at, person.created_at);
}

#[tokio::test]
async fn update_missing_person_errors() {
  let s = store().await;
  let mut person = s.create(draft("Ivan", "Ivanov")).await.unwrap();
  assert!(s.delete(person.id).await.unwrap());

  person.age = 50;
  let err = s.update(&person).await.unwrap_err();
  assert!(matches!(err, crate::Error::PersonNotFound(_)));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record() {
  let s = store().await;
  let person = s.create(draft("Ivan", "Ivanov")).await.unwrap();

  assert!(s.delete(person.id).await.unwrap());
  assert!(s.find_by_id(person.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_returns_false() {
  let s = store().await;
  assert!(!s.delete(Uuid::new_v4()).await.unwrap());
}
