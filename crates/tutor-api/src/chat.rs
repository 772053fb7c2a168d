//! Handlers for `/chat` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/chat/chat` | One tutoring turn; starts a session when `sessionId` is absent |
//! | `GET`  | `/chat/history?sessionId=` | Every turn of the session, oldest first |

use axum::{
  Json,
  extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tutor_core::{
  TaxonomyLevel,
  conversation::{ConversationTurn, NewTurn, prepare_turn},
  oracle::{ContentOracle, ConverseRequest},
  store::TutorStore,
};
use uuid::Uuid;

use crate::{
  AppState,
  auth::AuthUser,
  error::ApiError,
  validate::{required, required_opt, taxonomy_level},
};

// ─── Turn ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatBody {
  pub message:             String,
  pub subject:             String,
  pub topic:               String,
  pub session_id:          Option<String>,
  pub current_bloom_level: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
  pub message:            String,
  pub bloom_level:        TaxonomyLevel,
  pub suggest_next_level: bool,
  /// The level to move to when the oracle suggests advancing.
  pub next_level:         Option<TaxonomyLevel>,
  pub feedback:           String,
  pub session_id:         String,
}

/// `POST /chat/chat`
///
/// The student's turn is persisted before the oracle is asked, so it is kept
/// even when generation fails.
pub async fn chat<S, O>(
  State(state): State<AppState<S, O>>,
  AuthUser(user): AuthUser,
  Json(body): Json<ChatBody>,
) -> Result<Json<ChatResponse>, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let message = required("message", &body.message)?;
  let subject = required("subject", &body.subject)?;
  let topic   = required("topic", &body.topic)?;
  let current = taxonomy_level("currentBloomLevel", &body.current_bloom_level)?;

  let session_id = match body.session_id.as_deref().map(str::trim) {
    Some(id) if !id.is_empty() => id.to_owned(),
    _ => Uuid::new_v4().to_string(),
  };

  state
    .store
    .append_turn(NewTurn::student(user.user_id, &session_id, message, current))
    .await
    .map_err(ApiError::store)?;

  let context = prepare_turn(state.store.as_ref(), user.user_id, &session_id, current)
    .await
    .map_err(ApiError::store)?;
  let candidate = context.candidate_level;

  let reply = state
    .oracle
    .converse(ConverseRequest {
      grade: user.grade.clone(),
      subject: subject.to_owned(),
      topic: topic.to_owned(),
      context,
    })
    .await?;

  state
    .store
    .append_turn(NewTurn::tutor(
      user.user_id,
      &session_id,
      reply.message.clone(),
      reply.bloom_level,
    ))
    .await
    .map_err(ApiError::store)?;

  tracing::debug!(
    user_id = user.user_id,
    session_id = %session_id,
    level = %reply.bloom_level,
    suggest = reply.suggest_next_level,
    "tutoring turn"
  );

  Ok(Json(ChatResponse {
    next_level: reply.suggest_next_level.then_some(candidate),
    message: reply.message,
    bloom_level: reply.bloom_level,
    suggest_next_level: reply.suggest_next_level,
    feedback: reply.feedback,
    session_id,
  }))
}

// ─── History ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
  pub session_id: Option<String>,
}

/// `GET /chat/history?sessionId=<id>`
pub async fn history<S, O>(
  State(state): State<AppState<S, O>>,
  AuthUser(user): AuthUser,
  Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<ConversationTurn>>, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let session_id = required_opt("sessionId", &params.session_id)?;
  let turns = state
    .store
    .session_turns(user.user_id, session_id.to_owned())
    .await
    .map_err(ApiError::store)?;
  Ok(Json(turns))
}
