//! The `TutorStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tutor-store-sqlite`).
//! Higher layers (`tutor-api`, `tutor-server`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  conversation::{ConversationTurn, NewTurn},
  material::{NewStudyMaterial, StudyMaterial},
  progress::{ProgressKey, ProgressRecord, Score, TopicKey},
  user::{NewUser, User, UserCredentials, UserId},
};

/// Abstraction over the progress ledger and its sibling record kinds.
///
/// Every record is owned by a user; deleting the user removes them all.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TutorStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Register a user. Returns `None` if the email is already taken.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: UserId,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Look up a user and their password hash by email.
  fn find_credentials(
    &self,
    email: String,
  ) -> impl Future<Output = Result<Option<UserCredentials>, Self::Error>> + Send + '_;

  /// Delete a user and every record they own. Returns `false` if the user
  /// did not exist.
  fn delete_user(
    &self,
    id: UserId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Ledger ────────────────────────────────────────────────────────────

  /// Fold `score` into the running mean for `key` and return the new record.
  ///
  /// Creates the record with `attempts = 1` on first attempt. Updates to the
  /// same key are applied atomically; no update is ever lost.
  fn record_attempt(
    &self,
    key: ProgressKey,
    score: Score,
  ) -> impl Future<Output = Result<ProgressRecord, Self::Error>> + Send + '_;

  /// All of a user's records, or only one `(subject, topic)` pair's.
  /// Ordered by subject, then topic.
  fn get_progress(
    &self,
    user_id: UserId,
    filter: Option<TopicKey>,
  ) -> impl Future<Output = Result<Vec<ProgressRecord>, Self::Error>> + Send + '_;

  // ── Conversations ─────────────────────────────────────────────────────

  /// Append a turn to its session and return it with `seq` assigned.
  fn append_turn(
    &self,
    input: NewTurn,
  ) -> impl Future<Output = Result<ConversationTurn, Self::Error>> + Send + '_;

  /// The last `limit` turns of a session, oldest first.
  fn recent_turns(
    &self,
    user_id: UserId,
    session_id: String,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<ConversationTurn>, Self::Error>> + Send + '_;

  /// Every turn of a session, oldest first.
  fn session_turns(
    &self,
    user_id: UserId,
    session_id: String,
  ) -> impl Future<Output = Result<Vec<ConversationTurn>, Self::Error>> + Send + '_;

  // ── Study material ────────────────────────────────────────────────────

  /// Append a generated-content row. No deduplication is performed.
  fn record_study_material(
    &self,
    input: NewStudyMaterial,
  ) -> impl Future<Output = Result<StudyMaterial, Self::Error>> + Send + '_;

  /// A user's generated content, newest first.
  fn list_study_materials(
    &self,
    user_id: UserId,
  ) -> impl Future<Output = Result<Vec<StudyMaterial>, Self::Error>> + Send + '_;
}
