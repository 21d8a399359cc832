//! Person — the sole entity of the service.

/// A stored person record.
///
/// `id` is assigned by the store at insert time and never changes afterwards.
/// The remaining fields change only through an explicit update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
  pub id:          i64,
  pub name:        String,
  pub national_id: String,
  pub age:         i64,
}

/// Input to [`crate::store::PersonStore::insert`] — a person record with the
/// id not yet assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
  pub name:        String,
  pub national_id: String,
  pub age:         i64,
}

impl NewPerson {
  /// Attach a store-assigned id, producing the persisted entity.
  pub fn into_person(self, id: i64) -> Person {
    Person {
      id,
      name: self.name,
      national_id: self.national_id,
      age: self.age,
    }
  }
}
