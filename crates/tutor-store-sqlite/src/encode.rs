//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Taxonomy levels are stored
//! by name. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use tutor_core::{
  TaxonomyLevel,
  conversation::ConversationTurn,
  material::StudyMaterial,
  progress::{ProgressKey, ProgressRecord},
  user::{User, UserCredentials},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── TaxonomyLevel ───────────────────────────────────────────────────────────

pub fn encode_level(level: TaxonomyLevel) -> &'static str { level.as_str() }

pub fn decode_level(s: &str) -> Result<TaxonomyLevel> {
  TaxonomyLevel::parse(s).map_err(|_| Error::UnknownLevel(s.to_owned()))
}

// ─── Counters ────────────────────────────────────────────────────────────────

fn decode_count<T: TryFrom<i64>>(n: i64) -> Result<T> {
  T::try_from(n).map_err(|_| Error::NegativeCounter(n))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `users` row.
pub struct RawUser {
  pub user_id:       i64,
  pub email:         String,
  pub password_hash: String,
  pub name:          String,
  pub grade:         String,
  pub created_at:    String,
}

impl RawUser {
  pub const COLUMNS: &'static str =
    "user_id, email, password_hash, name, grade, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_id:       row.get(0)?,
      email:         row.get(1)?,
      password_hash: row.get(2)?,
      name:          row.get(3)?,
      grade:         row.get(4)?,
      created_at:    row.get(5)?,
    })
  }

  pub fn into_credentials(self) -> Result<UserCredentials> {
    Ok(UserCredentials {
      user:          User {
        user_id:    self.user_id,
        email:      self.email,
        name:       self.name,
        grade:      self.grade,
        created_at: decode_dt(&self.created_at)?,
      },
      password_hash: self.password_hash,
    })
  }

  pub fn into_user(self) -> Result<User> { Ok(self.into_credentials()?.user) }
}

/// Raw values read directly from a `progress` row.
pub struct RawProgress {
  pub user_id:      i64,
  pub subject:      String,
  pub topic:        String,
  pub level:        String,
  pub score:        f64,
  pub attempts:     i64,
  pub last_updated: String,
}

impl RawProgress {
  pub const COLUMNS: &'static str =
    "user_id, subject, topic, level, score, attempts, last_updated";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      user_id:      row.get(0)?,
      subject:      row.get(1)?,
      topic:        row.get(2)?,
      level:        row.get(3)?,
      score:        row.get(4)?,
      attempts:     row.get(5)?,
      last_updated: row.get(6)?,
    })
  }

  pub fn into_record(self) -> Result<ProgressRecord> {
    Ok(ProgressRecord {
      key:          ProgressKey {
        user_id: self.user_id,
        subject: self.subject,
        topic:   self.topic,
        level:   decode_level(&self.level)?,
      },
      score:        self.score,
      attempts:     decode_count(self.attempts)?,
      last_updated: decode_dt(&self.last_updated)?,
    })
  }
}

/// Raw values read directly from a `conversation_turns` row.
pub struct RawTurn {
  pub turn_id:    String,
  pub user_id:    i64,
  pub session_id: String,
  pub seq:        i64,
  pub message:    String,
  pub is_user:    bool,
  pub level:      String,
  pub created_at: String,
}

impl RawTurn {
  pub const COLUMNS: &'static str =
    "turn_id, user_id, session_id, seq, message, is_user, level, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      turn_id:    row.get(0)?,
      user_id:    row.get(1)?,
      session_id: row.get(2)?,
      seq:        row.get(3)?,
      message:    row.get(4)?,
      is_user:    row.get(5)?,
      level:      row.get(6)?,
      created_at: row.get(7)?,
    })
  }

  pub fn into_turn(self) -> Result<ConversationTurn> {
    Ok(ConversationTurn {
      turn_id:    decode_uuid(&self.turn_id)?,
      user_id:    self.user_id,
      session_id: self.session_id,
      seq:        decode_count(self.seq)?,
      message:    self.message,
      is_user:    self.is_user,
      level:      decode_level(&self.level)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from a `study_materials` row.
pub struct RawMaterial {
  pub material_id:  String,
  pub user_id:      i64,
  pub subject:      String,
  pub topic:        String,
  pub content_type: String,
  pub content:      String,
  pub created_at:   String,
}

impl RawMaterial {
  pub const COLUMNS: &'static str =
    "material_id, user_id, subject, topic, content_type, content, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      material_id:  row.get(0)?,
      user_id:      row.get(1)?,
      subject:      row.get(2)?,
      topic:        row.get(3)?,
      content_type: row.get(4)?,
      content:      row.get(5)?,
      created_at:   row.get(6)?,
    })
  }

  pub fn into_material(self) -> Result<StudyMaterial> {
    Ok(StudyMaterial {
      material_id:  decode_uuid(&self.material_id)?,
      user_id:      self.user_id,
      subject:      self.subject,
      topic:        self.topic,
      content_type: self.content_type,
      content:      serde_json::from_str(&self.content)?,
      created_at:   decode_dt(&self.created_at)?,
    })
  }
}
