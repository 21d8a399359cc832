//! Integration tests for `SqlitePersonStore` and `PersonService` against an
//! in-memory database.

use std::sync::Arc;

use roster_core::{
  Error as ServiceError,
  person::NewPerson,
  service::PersonService,
  store::PersonStore,
  validate::PersonValidator,
};

use crate::SqlitePersonStore;

async fn store() -> SqlitePersonStore {
  SqlitePersonStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn service() -> PersonService<SqlitePersonStore> {
  PersonService::new(Arc::new(store().await), PersonValidator)
}

fn ana() -> NewPerson {
  NewPerson {
    name:        "Ana".into(),
    national_id: "12345678901".into(),
    age:         30,
  }
}

fn bruno() -> NewPerson {
  NewPerson {
    name:        "Bruno".into(),
    national_id: "98765432109".into(),
    age:         41,
  }
}

// ─── Store: insert / get ─────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_ids_starting_at_one() {
  let s = store().await;

  let first = s.insert(ana()).await.unwrap();
  let second = s.insert(bruno()).await.unwrap();

  assert_eq!(first.id, 1);
  assert_eq!(second.id, 2);
}

#[tokio::test]
async fn insert_and_get_round_trip() {
  let s = store().await;

  let person = s.insert(ana()).await.unwrap();
  let fetched = s.get(person.id).await.unwrap();

  assert_eq!(fetched, Some(person));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert_eq!(s.get(99).await.unwrap(), None);
}

#[tokio::test]
async fn insert_duplicate_national_id_rejected_by_index() {
  let s = store().await;
  s.insert(ana()).await.unwrap();

  let mut other = bruno();
  other.national_id = ana().national_id;

  let err = s.insert(other).await.unwrap_err();
  assert!(matches!(err, crate::Error::DuplicateNationalId(_)));
}

// ─── Store: lookups by national id ───────────────────────────────────────────

#[tokio::test]
async fn find_by_national_id_returns_matching_record() {
  let s = store().await;
  let person = s.insert(ana()).await.unwrap();

  let found = s.find_by_national_id("12345678901").await.unwrap();
  assert_eq!(found, Some(person));

  let missing = s.find_by_national_id("00000000000").await.unwrap();
  assert_eq!(missing, None);
}

#[tokio::test]
async fn exists_by_national_id_reflects_store_contents() {
  let s = store().await;
  assert!(!s.exists_by_national_id("12345678901").await.unwrap());

  s.insert(ana()).await.unwrap();
  assert!(s.exists_by_national_id("12345678901").await.unwrap());
}

// ─── Store: update / delete ──────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_all_fields() {
  let s = store().await;
  let person = s.insert(ana()).await.unwrap();

  let changed = bruno().into_person(person.id);
  let updated = s.update(changed.clone()).await.unwrap();
  assert_eq!(updated, Some(changed.clone()));

  assert_eq!(s.get(person.id).await.unwrap(), Some(changed));
}

#[tokio::test]
async fn update_missing_row_returns_none() {
  let s = store().await;
  let result = s.update(ana().into_person(42)).await.unwrap();
  assert_eq!(result, None);
}

#[tokio::test]
async fn update_to_taken_national_id_rejected_by_index() {
  let s = store().await;
  s.insert(ana()).await.unwrap();
  let second = s.insert(bruno()).await.unwrap();

  let mut clash = second.clone();
  clash.national_id = ana().national_id;

  let err = s.update(clash).await.unwrap_err();
  assert!(matches!(err, crate::Error::DuplicateNationalId(_)));
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
  let s = store().await;
  let person = s.insert(ana()).await.unwrap();

  assert!(s.delete(person.id).await.unwrap());
  assert!(!s.delete(person.id).await.unwrap());
}

// ─── Store: list ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_on_empty_store_is_empty() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_all_returns_every_record() {
  let s = store().await;
  let first = s.insert(ana()).await.unwrap();
  let second = s.insert(bruno()).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 2);
  assert!(all.contains(&first));
  assert!(all.contains(&second));
}

// ─── Service: create ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_by_id_round_trip() {
  let svc = service().await;

  let created = svc.create(ana()).await.unwrap();
  assert_eq!(created.id, 1);
  assert_eq!(created.name, "Ana");
  assert_eq!(created.national_id, "12345678901");
  assert_eq!(created.age, 30);

  let fetched = svc.get_by_id(created.id).await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_duplicate_national_id_fails_without_insert() {
  let svc = service().await;
  svc.create(ana()).await.unwrap();

  let mut other = bruno();
  other.national_id = ana().national_id;

  let err = svc.create(other).await.unwrap_err();
  assert!(matches!(err, ServiceError::DuplicateNationalId));

  assert_eq!(svc.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_blank_name_fails_validation() {
  let svc = service().await;

  let mut input = ana();
  input.name = String::new();

  let err = svc.create(input).await.unwrap_err();
  let ServiceError::Invalid(violations) = err else {
    panic!("expected validation failure, got {err:?}");
  };
  assert_eq!(violations.len(), 1);
  assert_eq!(violations[0].field, "name");
}

#[tokio::test]
async fn create_malformed_national_id_fails_validation() {
  let svc = service().await;

  let mut input = ana();
  input.national_id = "123".into();

  let err = svc.create(input).await.unwrap_err();
  let ServiceError::Invalid(violations) = err else {
    panic!("expected validation failure, got {err:?}");
  };
  assert_eq!(violations.len(), 1);
  assert_eq!(violations[0].field, "national_id");
}

#[tokio::test]
async fn create_negative_age_fails_validation() {
  let svc = service().await;

  let mut input = ana();
  input.age = -1;

  let err = svc.create(input).await.unwrap_err();
  let ServiceError::Invalid(violations) = err else {
    panic!("expected validation failure, got {err:?}");
  };
  assert_eq!(violations.len(), 1);
  assert_eq!(violations[0].field, "age");
}

#[tokio::test]
async fn create_reports_all_violations_at_once() {
  let svc = service().await;

  let input = NewPerson {
    name:        String::new(),
    national_id: "123".into(),
    age:         -1,
  };

  let err = svc.create(input).await.unwrap_err();
  let ServiceError::Invalid(violations) = err else {
    panic!("expected validation failure, got {err:?}");
  };
  assert_eq!(violations.len(), 3);

  // Nothing was persisted.
  assert!(svc.list_all().await.unwrap().is_empty());
}

// ─── Service: lookups ────────────────────────────────────────────────────────

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
  let svc = service().await;
  let err = svc.get_by_id(99).await.unwrap_err();
  assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn get_by_national_id_finds_record() {
  let svc = service().await;
  let created = svc.create(ana()).await.unwrap();

  let fetched = svc.get_by_national_id("12345678901").await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_by_national_id_missing_is_not_found() {
  let svc = service().await;
  let err = svc.get_by_national_id("00000000000").await.unwrap_err();
  assert!(matches!(err, ServiceError::NotFound));
}

// ─── Service: delete ─────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_get_is_not_found() {
  let svc = service().await;
  let created = svc.create(ana()).await.unwrap();

  svc.delete_by_id(created.id).await.unwrap();

  let err = svc.get_by_id(created.id).await.unwrap_err();
  assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn delete_missing_is_not_found() {
  let svc = service().await;
  let err = svc.delete_by_id(99).await.unwrap_err();
  assert!(matches!(err, ServiceError::NotFound));
}

// ─── Service: list ───────────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_returns_both_records() {
  let svc = service().await;
  let first = svc.create(ana()).await.unwrap();
  let second = svc.create(bruno()).await.unwrap();

  let all = svc.list_all().await.unwrap();
  assert_eq!(all.len(), 2);
  assert!(all.contains(&first));
  assert!(all.contains(&second));
}

// ─── Service: update ─────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_every_mutable_field() {
  let svc = service().await;
  let created = svc.create(ana()).await.unwrap();

  let updated = svc.update(created.id, bruno()).await.unwrap();
  assert_eq!(updated.id, created.id);
  assert_eq!(updated.name, "Bruno");
  assert_eq!(updated.national_id, "98765432109");
  assert_eq!(updated.age, 41);

  assert_eq!(svc.get_by_id(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn update_missing_is_not_found() {
  let svc = service().await;
  let err = svc.update(99, ana()).await.unwrap_err();
  assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn update_to_taken_national_id_is_rejected() {
  let svc = service().await;
  svc.create(ana()).await.unwrap();
  let second = svc.create(bruno()).await.unwrap();

  let mut clash = bruno();
  clash.national_id = ana().national_id;

  let err = svc.update(second.id, clash).await.unwrap_err();
  assert!(matches!(err, ServiceError::DuplicateNationalId));

  // The record is unchanged.
  let fetched = svc.get_by_id(second.id).await.unwrap();
  assert_eq!(fetched.national_id, "98765432109");
}

#[tokio::test]
async fn update_keeping_own_national_id_succeeds() {
  let svc = service().await;
  let created = svc.create(ana()).await.unwrap();

  let mut renamed = ana();
  renamed.name = "Ana Clara".into();

  let updated = svc.update(created.id, renamed).await.unwrap();
  assert_eq!(updated.name, "Ana Clara");
  assert_eq!(updated.national_id, created.national_id);
}

#[tokio::test]
async fn update_invalid_input_is_rejected() {
  let svc = service().await;
  let created = svc.create(ana()).await.unwrap();

  let mut input = ana();
  input.age = -5;

  let err = svc.update(created.id, input).await.unwrap_err();
  assert!(matches!(err, ServiceError::Invalid(_)));
}
