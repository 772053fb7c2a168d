//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tutor_core::oracle::OracleError;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("unauthorized")]
  Unauthorized,

  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("content generation failed: {0}")]
  Oracle(#[from] OracleError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }

  /// Stable machine-readable tag for the `kind` field.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::BadRequest(_) => "validation",
      Self::Unauthorized => "unauthorized",
      Self::NotFound(_) => "not_found",
      Self::Conflict(_) => "conflict",
      Self::Oracle(OracleError::Timeout) => "oracle_timeout",
      Self::Oracle(OracleError::Malformed(_)) => "oracle_malformed",
      Self::Oracle(_) => "oracle",
      Self::Store(_) => "storage",
      Self::Internal(_) => "internal",
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::BadRequest(_) => StatusCode::BAD_REQUEST,
      Self::Unauthorized => StatusCode::UNAUTHORIZED,
      Self::NotFound(_) => StatusCode::NOT_FOUND,
      Self::Conflict(_) => StatusCode::CONFLICT,
      Self::Oracle(OracleError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
      Self::Oracle(_) => StatusCode::BAD_GATEWAY,
      Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// The message sent to clients. Store and internal failures are only
  /// described in the log.
  fn public_message(&self) -> String {
    match self {
      Self::Store(_) => "storage failure".to_owned(),
      Self::Internal(_) => "internal error".to_owned(),
      _ => self.to_string(),
    }
  }

  pub fn is_retryable(&self) -> bool {
    match self {
      Self::Oracle(e) => e.is_retryable(),
      _ => false,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    match &self {
      Self::Store(_) | Self::Internal(_) => tracing::error!(error = %self, "request failed"),
      Self::Oracle(_) => tracing::warn!(error = %self, "content oracle failed"),
      _ => tracing::debug!(error = %self, "request rejected"),
    }

    let body = Json(json!({
      "error": self.public_message(),
      "kind": self.kind(),
      "retryable": self.is_retryable(),
    }));
    let mut res = (status, body).into_response();

    if matches!(self, Self::Unauthorized) {
      res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"tutor\""),
      );
    }
    res
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
    let resp   = err.into_response();
    let status = resp.status();
    let bytes  = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn store_error_details_stay_out_of_the_body() {
    let cause = std::io::Error::other("database disk image is malformed");
    let (status, body) = body_of(ApiError::store(cause)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "storage failure");
    assert_eq!(body["kind"], "storage");
    assert_eq!(body["retryable"], false);
  }

  #[tokio::test]
  async fn validation_message_is_returned() {
    let (status, body) = body_of(ApiError::BadRequest("topic is required".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad request: topic is required");
  }
}
