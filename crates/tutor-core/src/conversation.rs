//! Tutoring conversations.
//!
//! A session is an open-ended, append-only sequence of turns. Turns are
//! ordered by a per-session sequence number assigned by the store, so the
//! bounded history never depends on wall-clock ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{TaxonomyLevel, store::TutorStore, user::UserId};

/// Number of most recent turns handed to the content oracle.
pub const HISTORY_WINDOW: usize = 10;

/// One persisted message in a session. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
  pub turn_id:    Uuid,
  pub user_id:    UserId,
  pub session_id: String,
  /// 1-based position within the session.
  pub seq:        u64,
  pub message:    String,
  /// `true` for student-authored turns, `false` for tutor replies.
  pub is_user:    bool,
  #[serde(rename = "bloomLevel")]
  pub level:      TaxonomyLevel,
  pub created_at: DateTime<Utc>,
}

/// Input to [`TutorStore::append_turn`]. `seq` and `created_at` are assigned
/// by the store.
#[derive(Debug, Clone)]
pub struct NewTurn {
  pub user_id:    UserId,
  pub session_id: String,
  pub message:    String,
  pub is_user:    bool,
  pub level:      TaxonomyLevel,
}

impl NewTurn {
  pub fn student(
    user_id: UserId,
    session_id: impl Into<String>,
    message: impl Into<String>,
    level: TaxonomyLevel,
  ) -> Self {
    Self {
      user_id,
      session_id: session_id.into(),
      message: message.into(),
      is_user: true,
      level,
    }
  }

  pub fn tutor(
    user_id: UserId,
    session_id: impl Into<String>,
    message: impl Into<String>,
    level: TaxonomyLevel,
  ) -> Self {
    Self { is_user: false, ..Self::student(user_id, session_id, message, level) }
  }
}

/// Everything the oracle sees for one tutoring turn.
#[derive(Debug, Clone)]
pub struct TurnContext {
  /// At most [`HISTORY_WINDOW`] turns, oldest first.
  pub history:         Vec<ConversationTurn>,
  pub current_level:   TaxonomyLevel,
  /// The level the student may be nudged to. Equals `current_level` at the
  /// top of the taxonomy.
  pub candidate_level: TaxonomyLevel,
}

impl TurnContext {
  pub fn new(history: Vec<ConversationTurn>, current_level: TaxonomyLevel) -> Self {
    Self {
      history,
      current_level,
      candidate_level: current_level.next(),
    }
  }
}

/// Load the bounded history for a session and pair it with the current level.
pub async fn prepare_turn<S: TutorStore>(
  store: &S,
  user_id: UserId,
  session_id: &str,
  current_level: TaxonomyLevel,
) -> Result<TurnContext, S::Error> {
  let history = store
    .recent_turns(user_id, session_id.to_owned(), HISTORY_WINDOW)
    .await?;
  Ok(TurnContext::new(history, current_level))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn candidate_is_next_level() {
    let ctx = TurnContext::new(Vec::new(), TaxonomyLevel::Understand);
    assert_eq!(ctx.candidate_level, TaxonomyLevel::Apply);
  }

  #[test]
  fn candidate_clamps_at_create() {
    let ctx = TurnContext::new(Vec::new(), TaxonomyLevel::Create);
    assert_eq!(ctx.candidate_level, TaxonomyLevel::Create);
  }

  #[test]
  fn tutor_turn_is_not_user_authored() {
    let turn = NewTurn::tutor(7, "s-1", "Well done!", TaxonomyLevel::Apply);
    assert!(!turn.is_user);
    assert_eq!(turn.session_id, "s-1");
  }
}
