//! Wire types for the chat-completions endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
  pub model:           String,
  pub messages:        Vec<Message>,
  pub temperature:     f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_tokens:      Option<u32>,
  pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseFormat {
  #[serde(rename = "type")]
  pub format_type: &'static str,
}

impl ResponseFormat {
  pub fn json_object() -> Self { Self { format_type: "json_object" } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Role {
  System,
  User,
  Assistant,
}

#[derive(Debug, Serialize)]
pub(crate) struct Message {
  pub role:    Role,
  pub content: Content,
}

impl Message {
  pub fn text(role: Role, text: impl Into<String>) -> Self {
    Self { role, content: Content::Text(text.into()) }
  }
}

/// Plain text, or a list of typed parts for multimodal input.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Content {
  Text(String),
  Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentPart {
  Text { text: String },
  ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageUrl {
  pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
  #[serde(default)]
  pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
  pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
  #[serde(default)]
  pub content: Option<String>,
}
