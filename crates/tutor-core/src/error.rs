//! Error types for `tutor-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("score must be a finite number between 0 and 100, got {0}")]
  InvalidScore(f64),

  #[error("unknown taxonomy level: {0:?}")]
  UnknownLevel(String),

  #[error("malformed generated payload: {0}")]
  MalformedPayload(String),

  #[error("invalid image data: {0}")]
  InvalidImage(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
