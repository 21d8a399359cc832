//! Handlers for `/people` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/people` | All records |
//! | `POST`   | `/people` | Body: [`PersonBody`]; returns 201 + created record |
//! | `GET`    | `/people/{id}` | 404 if not found |
//! | `GET`    | `/people/national_id/{value}` | Lookup by unique national id |
//! | `PUT`    | `/people/{id}` | Full overwrite of the mutable fields |
//! | `DELETE` | `/people/{id}` | 204 on success, empty body |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{service::PersonService, store::PersonStore};

use crate::{
  dto::{PersonBody, PersonResponse, to_response_list},
  error::ApiError,
};

/// `GET /people`
pub async fn list<S>(
  State(service): State<Arc<PersonService<S>>>,
) -> Result<Json<Vec<PersonResponse>>, ApiError>
where
  S: PersonStore,
{
  let people = service.list_all().await?;
  Ok(Json(to_response_list(people)))
}

/// `POST /people` — returns 201 + the created record.
pub async fn create<S>(
  State(service): State<Arc<PersonService<S>>>,
  Json(body): Json<PersonBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
{
  let person = service.create(body.into()).await?;
  Ok((StatusCode::CREATED, Json(PersonResponse::from(person))))
}

/// `GET /people/{id}`
pub async fn get_one<S>(
  State(service): State<Arc<PersonService<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<PersonResponse>, ApiError>
where
  S: PersonStore,
{
  let person = service.get_by_id(id).await?;
  Ok(Json(PersonResponse::from(person)))
}

/// `GET /people/national_id/{value}`
pub async fn get_by_national_id<S>(
  State(service): State<Arc<PersonService<S>>>,
  Path(value): Path<String>,
) -> Result<Json<PersonResponse>, ApiError>
where
  S: PersonStore,
{
  let person = service.get_by_national_id(&value).await?;
  Ok(Json(PersonResponse::from(person)))
}

/// `PUT /people/{id}` — overwrites name, national id, and age.
pub async fn update_one<S>(
  State(service): State<Arc<PersonService<S>>>,
  Path(id): Path<i64>,
  Json(body): Json<PersonBody>,
) -> Result<Json<PersonResponse>, ApiError>
where
  S: PersonStore,
{
  let person = service.update(id, body.into()).await?;
  Ok(Json(PersonResponse::from(person)))
}

/// `DELETE /people/{id}` — 204 with an empty body.
pub async fn delete_one<S>(
  State(service): State<Arc<PersonService<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore,
{
  service.delete_by_id(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
