//! Field validation for inbound person data.
//!
//! All rules are checked in one pass; the caller receives every violation at
//! once rather than failing on the first.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::person::NewPerson;

static NATIONAL_ID_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[0-9]{11}$").expect("valid national id regex"));

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
  pub field:   &'static str,
  pub message: String,
}

impl FieldViolation {
  fn new(field: &'static str, message: impl Into<String>) -> Self {
    Self { field, message: message.into() }
  }
}

/// Structural validator for [`NewPerson`] input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonValidator;

impl PersonValidator {
  /// Check all field constraints, returning every violation found.
  pub fn validate(&self, input: &NewPerson) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if input.name.trim().is_empty() {
      violations.push(FieldViolation::new("name", "name must not be blank"));
    }

    if input.national_id.trim().is_empty() {
      violations.push(FieldViolation::new(
        "national_id",
        "national id must not be blank",
      ));
    } else if !NATIONAL_ID_RE.is_match(&input.national_id) {
      violations.push(FieldViolation::new(
        "national_id",
        "national id must be exactly 11 numeric digits",
      ));
    }

    if input.age < 0 {
      violations.push(FieldViolation::new("age", "age must not be negative"));
    }

    violations
  }
}
