//! JSON HTTP API for the tutoring backend.
//!
//! Exposes an axum [`Router`] backed by any [`TutorStore`] and
//! [`ContentOracle`]. TLS, CORS and transport limits are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", tutor_api::api_router(state))
//! ```

pub mod auth;
pub mod chat;
pub mod content;
pub mod error;
pub mod syllabus;
pub mod users;
mod validate;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use tutor_core::{oracle::ContentOracle, store::TutorStore};

pub use auth::AuthUser;
pub use error::ApiError;

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S, O> {
  pub store:  Arc<S>,
  pub oracle: Arc<O>,
}

impl<S, O> AppState<S, O> {
  pub fn new(store: S, oracle: O) -> Self {
    Self { store: Arc::new(store), oracle: Arc::new(oracle) }
  }
}

// Manual impl: the derive would demand `S: Clone` and `O: Clone`.
impl<S, O> Clone for AppState<S, O> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), oracle: Arc::clone(&self.oracle) }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, O>(state: AppState<S, O>) -> Router<()>
where
  S: TutorStore + 'static,
  O: ContentOracle + 'static,
{
  Router::new()
    // Accounts
    .route("/auth/signup", post(users::signup::<S, O>))
    .route("/auth/login", post(users::login::<S, O>))
    .route(
      "/auth/profile",
      get(users::profile::<S, O>).delete(users::delete_profile::<S, O>),
    )
    // Reference data
    .route("/syllabus/subjects/{grade}", get(syllabus::subjects))
    .route("/syllabus/topics/{grade}/{subject}", get(syllabus::topics))
    .route("/syllabus/all", get(syllabus::all))
    .route("/taxonomy", get(syllabus::taxonomy))
    // Study content and the ledger
    .route("/content/study-material", get(content::study_material::<S, O>))
    .route("/content/materials", get(content::materials::<S, O>))
    .route("/content/submit-answer", post(content::submit_answer::<S, O>))
    .route(
      "/content/submit-handwritten-answer",
      post(content::submit_handwritten_answer::<S, O>),
    )
    .route("/content/progress", get(content::progress::<S, O>))
    // Tutoring conversations
    .route("/chat/chat", post(chat::chat::<S, O>))
    .route("/chat/history", get(chat::history::<S, O>))
    .with_state(state)
}
