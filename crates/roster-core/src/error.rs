//! Error types for `roster-core`.

use thiserror::Error;

use crate::validate::FieldViolation;

#[derive(Debug, Error)]
pub enum Error {
  #[error("person not found")]
  NotFound,

  #[error("national id is already registered")]
  DuplicateNationalId,

  /// One or more field constraints failed; every violation is reported.
  #[error("validation failed")]
  Invalid(Vec<FieldViolation>),

  /// Any other storage-layer failure.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
