//! Wire-level request and response shapes, and their conversions to and from
//! the domain entity.
//!
//! Conversions are pure and side-effect free; validation happens in the
//! service layer, never here.

use roster_core::person::{NewPerson, Person};
use serde::{Deserialize, Serialize};

/// JSON body accepted by `POST /people` and `PUT /people/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonBody {
  pub name:        String,
  pub national_id: String,
  pub age:         i64,
}

impl From<PersonBody> for NewPerson {
  fn from(b: PersonBody) -> Self {
    Self {
      name:        b.name,
      national_id: b.national_id,
      age:         b.age,
    }
  }
}

/// JSON shape returned for a single person record.
#[derive(Debug, Clone, Serialize)]
pub struct PersonResponse {
  pub id:          i64,
  pub name:        String,
  pub national_id: String,
  pub age:         i64,
}

impl From<Person> for PersonResponse {
  fn from(p: Person) -> Self {
    Self {
      id:          p.id,
      name:        p.name,
      national_id: p.national_id,
      age:         p.age,
    }
  }
}

/// Order-preserving list conversion.
pub fn to_response_list(people: Vec<Person>) -> Vec<PersonResponse> {
  people.into_iter().map(PersonResponse::from).collect()
}
