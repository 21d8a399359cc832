//! [`SqlitePersonStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use roster_core::{
  person::{NewPerson, Person},
  store::PersonStore,
};
use rusqlite::OptionalExtension as _;

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqlitePersonStore {
  conn: tokio_rusqlite::Connection,
}

impl SqlitePersonStore {
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

// ─── Row helpers ─────────────────────────────────────────────────────────────

fn row_to_person(row: &rusqlite::Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:          row.get(0)?,
    name:        row.get(1)?,
    national_id: row.get(2)?,
    age:         row.get(3)?,
  })
}

/// `true` when SQLite rejected a write on a constraint — for the `people`
/// table that is the unique index on `national_id`.
fn is_constraint_violation(e: &tokio_rusqlite::Error) -> bool {
  matches!(
    e,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(f, _))
      if f.code == rusqlite::ErrorCode::ConstraintViolation
  )
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqlitePersonStore {
  type Error = Error;

  async fn insert(&self, input: NewPerson) -> Result<Person> {
    let name        = input.name.clone();
    let national_id = input.national_id.clone();
    let age         = input.age;

    let result = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO people (name, national_id, age) VALUES (?1, ?2, ?3)",
          rusqlite::params![name, national_id, age],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await;

    match result {
      Ok(id) => Ok(input.into_person(id)),
      Err(e) if is_constraint_violation(&e) => {
        Err(Error::DuplicateNationalId(input.national_id))
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn get(&self, id: i64) -> Result<Option<Person>> {
    let person = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, national_id, age FROM people WHERE id = ?1",
              rusqlite::params![id],
              row_to_person,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(person)
  }

  async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Person>> {
    let national_id = national_id.to_owned();

    let person = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, national_id, age FROM people WHERE national_id = ?1",
              rusqlite::params![national_id],
              row_to_person,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(person)
  }

  async fn exists_by_national_id(&self, national_id: &str) -> Result<bool> {
    let national_id = national_id.to_owned();

    let exists = self
      .conn
      .call(move |conn| {
        let exists: bool = conn
          .query_row(
            "SELECT 1 FROM people WHERE national_id = ?1",
            rusqlite::params![national_id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        Ok(exists)
      })
      .await?;
    Ok(exists)
  }

  async fn update(&self, person: Person) -> Result<Option<Person>> {
    let id          = person.id;
    let name        = person.name.clone();
    let national_id = person.national_id.clone();
    let age         = person.age;

    let result = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE people SET name = ?1, national_id = ?2, age = ?3 WHERE id = ?4",
          rusqlite::params![name, national_id, age, id],
        )?)
      })
      .await;

    match result {
      Ok(0) => Ok(None),
      Ok(_) => Ok(Some(person)),
      Err(e) if is_constraint_violation(&e) => {
        Err(Error::DuplicateNationalId(person.national_id))
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let rows = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM people WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(rows > 0)
  }

  async fn list_all(&self) -> Result<Vec<Person>> {
    let people = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, name, national_id, age FROM people")?;
        let rows = stmt
          .query_map([], row_to_person)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(people)
  }
}
