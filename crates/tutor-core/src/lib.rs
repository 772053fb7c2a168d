//! Core types and trait definitions for the tutoring backend.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The storage backend, the content oracle and the HTTP layer all depend on
//! it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod conversation;
pub mod error;
pub mod material;
pub mod oracle;
pub mod progress;
pub mod store;
pub mod syllabus;
pub mod taxonomy;
pub mod user;

pub use error::{Error, Result};
pub use taxonomy::TaxonomyLevel;
