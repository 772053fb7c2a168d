//! [`OpenAiOracle`]: the chat-completions implementation of
//! [`ContentOracle`].

use std::{fmt, time::Duration};

use serde::de::DeserializeOwned;
use tutor_core::{
  material::{Assessment, StudyMaterialContent, TutorReply},
  oracle::{
    AssessRequest, ContentOracle, ConverseRequest, HandwritingRequest,
    MaterialRequest, OracleError,
  },
};

use crate::{
  chat::{ChatRequest, ChatResponse, ResponseFormat},
  config::OracleConfig,
  prompt::{self, Prompt, strip_markdown_json},
};

/// Longest slice of an error body kept in [`OracleError::Status`].
const MAX_ERROR_BODY: usize = 200;

/// Content oracle backed by an OpenAI-compatible chat-completions API.
///
/// Each call is a single HTTP request bounded by the configured timeout.
/// Failures are returned to the caller as-is; nothing is retried here.
#[derive(Clone)]
pub struct OpenAiOracle {
  client: reqwest::Client,
  config: OracleConfig,
}

impl fmt::Debug for OpenAiOracle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OpenAiOracle")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

impl OpenAiOracle {
  /// Build a client from `config`.
  pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(|e| OracleError::Transport(format!("client init: {e}")))?;

    let config = OracleConfig {
      base_url: config.base_url.trim_end_matches('/').to_owned(),
      ..config
    };
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &OracleConfig { &self.config }

  /// Send one chat completion and return the assistant's message text.
  async fn complete(&self, model: &str, prompt: Prompt) -> Result<String, OracleError> {
    let request = ChatRequest {
      model:           model.to_owned(),
      messages:        prompt.messages,
      temperature:     prompt.temperature,
      max_tokens:      prompt.max_tokens,
      response_format: ResponseFormat::json_object(),
    };

    tracing::debug!(model, messages = request.messages.len(), "oracle request");

    let response = self
      .client
      .post(format!("{}/v1/chat/completions", self.config.base_url))
      .bearer_auth(&self.config.api_key)
      .json(&request)
      .send()
      .await
      .map_err(transport_error)?;

    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
      tracing::warn!(model, status = status.as_u16(), "oracle returned an error status");
      return Err(OracleError::Status {
        code: status.as_u16(),
        body: truncate(&body, MAX_ERROR_BODY).to_owned(),
      });
    }

    let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
      OracleError::Malformed(format!(
        "chat completion envelope: {e} (body: {})",
        truncate(&body, MAX_ERROR_BODY)
      ))
    })?;

    parsed
      .choices
      .into_iter()
      .next()
      .and_then(|choice| choice.message.content)
      .filter(|content| !content.trim().is_empty())
      .ok_or_else(|| OracleError::Malformed("empty completion".into()))
  }

  /// Complete `prompt` and deserialise the reply as `T`.
  async fn complete_json<T: DeserializeOwned>(
    &self,
    model: &str,
    prompt: Prompt,
  ) -> Result<T, OracleError> {
    let content = self.complete(model, prompt).await?;
    serde_json::from_str(strip_markdown_json(&content)).map_err(|e| {
      tracing::warn!(model, error = %e, "oracle reply failed schema check");
      OracleError::Malformed(e.to_string())
    })
  }
}

fn transport_error(e: reqwest::Error) -> OracleError {
  if e.is_timeout() {
    OracleError::Timeout
  } else {
    OracleError::Transport(e.to_string())
  }
}

/// Truncate to at most `max_len` bytes on a char boundary.
fn truncate(s: &str, max_len: usize) -> &str {
  if s.len() <= max_len {
    return s;
  }
  let mut end = max_len;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  &s[..end]
}

// ─── ContentOracle impl ──────────────────────────────────────────────────────

impl ContentOracle for OpenAiOracle {
  async fn generate_material(
    &self,
    request: MaterialRequest,
  ) -> Result<StudyMaterialContent, OracleError> {
    self
      .complete_json(&self.config.model, prompt::study_material(&request))
      .await
  }

  async fn converse(&self, request: ConverseRequest) -> Result<TutorReply, OracleError> {
    self
      .complete_json(&self.config.model, prompt::converse(&request))
      .await
  }

  async fn assess(&self, request: AssessRequest) -> Result<Assessment, OracleError> {
    self
      .complete_json(&self.config.model, prompt::assess(&request))
      .await
  }

  async fn assess_handwriting(
    &self,
    request: HandwritingRequest,
  ) -> Result<Assessment, OracleError> {
    self
      .complete_json(&self.config.vision_model, prompt::assess_handwriting(&request))
      .await
  }
}
