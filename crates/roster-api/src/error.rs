//! API error type and [`axum::response::IntoResponse`] implementation — the
//! single point where internal failures become HTTP responses.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::{Error as ServiceError, validate::FieldViolation};
use serde::Serialize;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation failed")]
  Validation(Vec<FieldViolation>),

  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  Conflict(String),

  #[error("internal error: {0}")]
  Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl From<ServiceError> for ApiError {
  fn from(e: ServiceError) -> Self {
    let message = e.to_string();
    match e {
      ServiceError::Invalid(violations) => Self::Validation(violations),
      ServiceError::NotFound => Self::NotFound(message),
      ServiceError::DuplicateNationalId => Self::Conflict(message),
      ServiceError::Store(source) => Self::Internal(source),
    }
  }
}

/// The JSON error body shared by every failure response:
/// `{errors, status, message}` with `errors` null unless field violations
/// are being reported.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub errors:  Option<Vec<FieldViolation>>,
  pub status:  String,
  pub message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, errors, message) = match self {
      ApiError::Validation(violations) => (
        StatusCode::BAD_REQUEST,
        Some(violations),
        "validation failed for one or more fields".to_string(),
      ),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, None, m),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, None, m),
      ApiError::Internal(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, None, e.to_string())
      }
    };

    // The status label in the body always agrees with the transport status.
    let body = ErrorBody {
      errors,
      status: status.to_string(),
      message,
    };
    (status, Json(body)).into_response()
  }
}
