//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A write was rejected by the unique index on the national id column.
  #[error("national id {0:?} is already registered")]
  DuplicateNationalId(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
