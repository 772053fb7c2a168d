//! Users: the owners of every progress, conversation and material record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier.
pub type UserId = i64;

/// A registered student. The password hash never leaves the store except via
/// [`UserCredentials`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub user_id:    UserId,
  pub email:      String,
  pub name:       String,
  /// Syllabus grade key, e.g. `"K"` or `"5"`.
  pub grade:      String,
  pub created_at: DateTime<Utc>,
}

/// Input to [`crate::store::TutorStore::create_user`].
#[derive(Debug, Clone)]
pub struct NewUser {
  pub email:         String,
  pub name:          String,
  pub grade:         String,
  /// PHC string produced by argon2.
  pub password_hash: String,
}

/// A user together with the stored password hash, for verification only.
#[derive(Debug, Clone)]
pub struct UserCredentials {
  pub user:          User,
  pub password_hash: String,
}
