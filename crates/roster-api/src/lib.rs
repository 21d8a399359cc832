//! JSON REST API for the roster person service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roster_core::store::PersonStore`]. Transport concerns (listeners, TLS,
//! middleware) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, roster_api::api_router(service)).await?;
//! ```

pub mod dto;
pub mod error;
pub mod people;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::{service::PersonService, store::PersonStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: Arc<PersonService<S>>) -> Router<()>
where
  S: PersonStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/people", get(people::list::<S>).post(people::create::<S>))
    .route(
      "/people/{id}",
      get(people::get_one::<S>)
        .put(people::update_one::<S>)
        .delete(people::delete_one::<S>),
    )
    .route(
      "/people/national_id/{value}",
      get(people::get_by_national_id::<S>),
    )
    .with_state(service)
}

// ─── Integration tests ───────────────────────────────────────────────────────
