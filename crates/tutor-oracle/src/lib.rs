//! LLM-backed [`ContentOracle`] for the tutoring backend.
//!
//! Talks to any OpenAI-compatible `/v1/chat/completions` endpoint and asks for
//! JSON object responses. Replies are validated against the
//! [`tutor_core::material`] payload types before they are returned.
//!
//! [`ContentOracle`]: tutor_core::oracle::ContentOracle

mod chat;
mod client;
pub mod config;
mod prompt;

pub use client::OpenAiOracle;
pub use config::OracleConfig;
pub use prompt::strip_markdown_json;

#[cfg(test)]
mod tests;
