//! Error type for `tutor-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("unknown taxonomy level in database: {0:?}")]
  UnknownLevel(String),

  #[error("negative counter in database: {0}")]
  NegativeCounter(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
