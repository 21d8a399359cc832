//! [`PersonService`] — orchestrates validation, uniqueness enforcement, and
//! store operations.

use std::sync::Arc;

use crate::{
  Error, Result,
  person::{NewPerson, Person},
  store::PersonStore,
  validate::PersonValidator,
};

/// Service over a [`PersonStore`]; dependencies are passed in explicitly at
/// construction.
///
/// The uniqueness check in [`create`](Self::create) is check-then-insert and
/// therefore not atomic under concurrent requests carrying the same national
/// id; the unique index on the `national_id` column is the storage-layer
/// safety net, and a lost race surfaces as a store error.
#[derive(Clone)]
pub struct PersonService<S> {
  store:     Arc<S>,
  validator: PersonValidator,
}

impl<S: PersonStore> PersonService<S> {
  pub fn new(store: Arc<S>, validator: PersonValidator) -> Self {
    Self { store, validator }
  }

  fn check(&self, input: &NewPerson) -> Result<()> {
    let violations = self.validator.validate(input);
    if violations.is_empty() {
      Ok(())
    } else {
      Err(Error::Invalid(violations))
    }
  }

  /// Validate, enforce national-id uniqueness, and persist a new record.
  pub async fn create(&self, input: NewPerson) -> Result<Person> {
    self.check(&input)?;
    if self
      .store
      .exists_by_national_id(&input.national_id)
      .await
      .map_err(store_err)?
    {
      return Err(Error::DuplicateNationalId);
    }
    self.store.insert(input).await.map_err(store_err)
  }

  pub async fn get_by_id(&self, id: i64) -> Result<Person> {
    self
      .store
      .get(id)
      .await
      .map_err(store_err)?
      .ok_or(Error::NotFound)
  }

  pub async fn get_by_national_id(&self, national_id: &str) -> Result<Person> {
    self
      .store
      .find_by_national_id(national_id)
      .await
      .map_err(store_err)?
      .ok_or(Error::NotFound)
  }

  /// Fetch first so a missing id surfaces as `NotFound`, then remove.
  pub async fn delete_by_id(&self, id: i64) -> Result<()> {
    self.get_by_id(id).await?;
    self.store.delete(id).await.map_err(store_err)?;
    Ok(())
  }

  pub async fn list_all(&self) -> Result<Vec<Person>> {
    self.store.list_all().await.map_err(store_err)
  }

  /// Overwrite all three mutable fields of an existing record from `input`.
  /// No partial-update semantics.
  ///
  /// A changed national id is re-checked for uniqueness before the write so
  /// the conflict surfaces as a typed failure rather than a raw storage
  /// constraint error.
  pub async fn update(&self, id: i64, input: NewPerson) -> Result<Person> {
    self.check(&input)?;
    let current = self.get_by_id(id).await?;
    if input.national_id != current.national_id
      && self
        .store
        .exists_by_national_id(&input.national_id)
        .await
        .map_err(store_err)?
    {
      return Err(Error::DuplicateNationalId);
    }
    self
      .store
      .update(input.into_person(id))
      .await
      .map_err(store_err)?
      .ok_or(Error::NotFound)
  }
}

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> Error {
  Error::Store(Box::new(e))
}
