//! Oracle client configuration.

use std::fmt;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_VISION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the content oracle.
///
/// Every field except `api_key` has a default, so a config file only needs
/// to supply the key.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
  pub api_key:      String,
  /// Scheme and host, without the `/v1/...` path.
  pub base_url:     String,
  /// Model used for text generation and text assessment.
  pub model:        String,
  /// Model used for handwriting assessment; must accept image input.
  pub vision_model: String,
  /// Upper bound on a single oracle request, connect to last byte.
  pub timeout_secs: u64,
}

impl Default for OracleConfig {
  fn default() -> Self {
    Self {
      api_key:      String::new(),
      base_url:     DEFAULT_BASE_URL.to_owned(),
      model:        DEFAULT_MODEL.to_owned(),
      vision_model: DEFAULT_VISION_MODEL.to_owned(),
      timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
  }
}

impl fmt::Debug for OracleConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OracleConfig")
      .field("api_key", &"***")
      .field("base_url", &self.base_url)
      .field("model", &self.model)
      .field("vision_model", &self.vision_model)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}
