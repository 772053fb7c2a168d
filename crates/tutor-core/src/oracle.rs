//! The `ContentOracle` trait: the external content-generation service.
//!
//! Implemented by `tutor-oracle` against an LLM API. Every call is fallible
//! and callers surface failures rather than substituting defaults.

use std::future::Future;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use thiserror::Error;

use crate::{
  Error, TaxonomyLevel,
  conversation::TurnContext,
  material::{Assessment, StudyMaterialContent, TutorReply},
};

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum OracleError {
  #[error("content oracle timed out")]
  Timeout,

  #[error("content oracle unreachable: {0}")]
  Transport(String),

  #[error("content oracle returned HTTP {code}: {body}")]
  Status { code: u16, body: String },

  #[error("content oracle returned a malformed payload: {0}")]
  Malformed(String),
}

impl OracleError {
  /// Whether a caller may reasonably retry the triggering request.
  pub fn is_retryable(&self) -> bool {
    match self {
      Self::Timeout | Self::Transport(_) => true,
      Self::Status { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
      Self::Malformed(_) => false,
    }
  }
}

// ─── Requests ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MaterialRequest {
  pub grade:   String,
  pub subject: String,
  pub topic:   String,
}

#[derive(Debug, Clone)]
pub struct ConverseRequest {
  pub grade:   String,
  pub subject: String,
  pub topic:   String,
  pub context: TurnContext,
}

#[derive(Debug, Clone)]
pub struct AssessRequest {
  pub question: String,
  pub answer:   String,
  pub level:    TaxonomyLevel,
}

#[derive(Debug, Clone)]
pub struct HandwritingRequest {
  pub image:        ImageData,
  pub question:     String,
  pub level:        TaxonomyLevel,
  pub typed_answer: Option<String>,
}

/// A base64 image as sent by browsers: `data:image/png;base64,....`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
  media_type: String,
  url:        String,
}

impl ImageData {
  /// Parse a data URL, checking the media type and that the payload decodes.
  pub fn parse(data_url: &str) -> crate::Result<Self> {
    let rest = data_url
      .strip_prefix("data:")
      .ok_or_else(|| Error::InvalidImage("expected a data: URL".into()))?;
    let (media_type, payload) = rest
      .split_once(";base64,")
      .ok_or_else(|| Error::InvalidImage("expected base64 encoding".into()))?;

    if !media_type.starts_with("image/") {
      return Err(Error::InvalidImage(format!(
        "unsupported media type {media_type:?}"
      )));
    }
    if payload.is_empty() {
      return Err(Error::InvalidImage("empty image payload".into()));
    }
    B64
      .decode(payload)
      .map_err(|e| Error::InvalidImage(e.to_string()))?;

    Ok(Self { media_type: media_type.to_owned(), url: data_url.to_owned() })
  }

  pub fn media_type(&self) -> &str { &self.media_type }

  /// The original data URL, suitable for an `image_url` content part.
  pub fn as_url(&self) -> &str { &self.url }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the content-generation service.
///
/// All methods return `Send` futures so implementations can be shared across
/// axum handlers.
pub trait ContentOracle: Send + Sync {
  /// A study guide plus one practice question per taxonomy level.
  fn generate_material(
    &self,
    request: MaterialRequest,
  ) -> impl Future<Output = Result<StudyMaterialContent, OracleError>> + Send + '_;

  /// The tutor's reply to the latest turn in `request.context.history`.
  fn converse(
    &self,
    request: ConverseRequest,
  ) -> impl Future<Output = Result<TutorReply, OracleError>> + Send + '_;

  /// Score a typed answer.
  fn assess(
    &self,
    request: AssessRequest,
  ) -> impl Future<Output = Result<Assessment, OracleError>> + Send + '_;

  /// Transcribe and score a handwritten answer.
  fn assess_handwriting(
    &self,
    request: HandwritingRequest,
  ) -> impl Future<Output = Result<Assessment, OracleError>> + Send + '_;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_png_data_url() {
    let image = ImageData::parse("data:image/png;base64,aGVsbG8=").unwrap();
    assert_eq!(image.media_type(), "image/png");
    assert!(image.as_url().starts_with("data:image/png"));
  }

  #[test]
  fn rejects_non_image_media() {
    assert!(matches!(
      ImageData::parse("data:text/plain;base64,aGVsbG8="),
      Err(Error::InvalidImage(_))
    ));
  }

  #[test]
  fn rejects_bad_base64() {
    assert!(ImageData::parse("data:image/jpeg;base64,***").is_err());
    assert!(ImageData::parse("data:image/jpeg;base64,").is_err());
    assert!(ImageData::parse("https://example.com/a.png").is_err());
  }

  #[test]
  fn retryable_errors() {
    assert!(OracleError::Timeout.is_retryable());
    assert!(OracleError::Status { code: 503, body: String::new() }.is_retryable());
    assert!(!OracleError::Status { code: 401, body: String::new() }.is_retryable());
    assert!(!OracleError::Malformed("bad json".into()).is_retryable());
  }
}
