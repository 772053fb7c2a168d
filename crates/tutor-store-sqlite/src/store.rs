//! [`SqliteStore`]: the SQLite implementation of [`TutorStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use tutor_core::{
  conversation::{ConversationTurn, NewTurn},
  material::{NewStudyMaterial, StudyMaterial},
  progress::{ProgressKey, ProgressRecord, Score, TopicKey},
  store::TutorStore,
  user::{NewUser, User, UserCredentials, UserId},
};

use crate::{
  encode::{
    encode_dt, encode_level, encode_uuid, RawMaterial, RawProgress, RawTurn,
    RawUser,
  },
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A tutoring store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn user_by_email(&self, email: String) -> Result<Option<RawUser>> {
    let raw = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {} FROM users WHERE email = ?1", RawUser::COLUMNS),
            rusqlite::params![email],
            RawUser::from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(raw)
  }

  async fn select_turns(
    &self,
    user_id:    UserId,
    session_id: String,
    limit:      Option<usize>,
  ) -> Result<Vec<ConversationTurn>> {
    // SQLite treats a negative LIMIT as "no limit".
    let limit_val = limit.map_or(-1, |l| l as i64);

    let raws: Vec<RawTurn> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {cols} FROM (
             SELECT {cols} FROM conversation_turns
             WHERE user_id = ?1 AND session_id = ?2
             ORDER BY seq DESC
             LIMIT ?3
           )
           ORDER BY seq ASC",
          cols = RawTurn::COLUMNS,
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![user_id, session_id, limit_val],
            RawTurn::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTurn::into_turn).collect()
  }
}

// ─── TutorStore impl ─────────────────────────────────────────────────────────

impl TutorStore for SqliteStore {
  type Error = crate::Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn create_user(&self, input: NewUser) -> Result<Option<User>> {
    let created_at = Utc::now();
    let at_str     = encode_dt(created_at);
    let email      = input.email.clone();

    let user_id: Option<i64> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "INSERT INTO users (email, password_hash, name, grade, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (email) DO NOTHING
             RETURNING user_id",
            rusqlite::params![
              input.email,
              input.password_hash,
              input.name,
              input.grade,
              at_str,
            ],
            |row| row.get(0),
          )
          .optional()?)
      })
      .await?;

    match user_id {
      Some(_) => self
        .user_by_email(email)
        .await?
        .map(RawUser::into_user)
        .transpose(),
      None => Ok(None),
    }
  }

  async fn get_user(&self, id: UserId) -> Result<Option<User>> {
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {} FROM users WHERE user_id = ?1", RawUser::COLUMNS),
            rusqlite::params![id],
            RawUser::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn find_credentials(&self, email: String) -> Result<Option<UserCredentials>> {
    self
      .user_by_email(email)
      .await?
      .map(RawUser::into_credentials)
      .transpose()
  }

  async fn delete_user(&self, id: UserId) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM users WHERE user_id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if deleted > 0 {
      tracing::info!(user_id = id, "deleted user and owned records");
    }
    Ok(deleted > 0)
  }

  // ── Ledger ────────────────────────────────────────────────────────────────

  async fn record_attempt(&self, key: ProgressKey, score: Score) -> Result<ProgressRecord> {
    let at_str    = encode_dt(Utc::now());
    let level_str = encode_level(key.level);
    let ProgressKey { user_id, subject, topic, .. } = key;
    let new_score = score.value();

    // A single statement: insert the first attempt, or fold the new score
    // into the existing mean. SQLite serialises it against other writers.
    let raw: RawProgress = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!(
            "INSERT INTO progress (user_id, subject, topic, level, score, attempts, last_updated)
             VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)
             ON CONFLICT (user_id, subject, topic, level) DO UPDATE SET
               score        = (progress.score * progress.attempts + excluded.score)
                              / (progress.attempts + 1),
               attempts     = progress.attempts + 1,
               last_updated = excluded.last_updated
             RETURNING {}",
            RawProgress::COLUMNS
          ),
          rusqlite::params![user_id, subject, topic, level_str, new_score, at_str],
          RawProgress::from_row,
        )?)
      })
      .await?;

    let record = raw.into_record()?;
    tracing::debug!(
      user_id,
      level = %record.key.level,
      attempts = record.attempts,
      "recorded attempt"
    );
    Ok(record)
  }

  async fn get_progress(
    &self,
    user_id: UserId,
    filter:  Option<TopicKey>,
  ) -> Result<Vec<ProgressRecord>> {
    let raws: Vec<RawProgress> = self
      .conn
      .call(move |conn| {
        let rows = if let Some(TopicKey { subject, topic }) = filter {
          let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM progress
             WHERE user_id = ?1 AND subject = ?2 AND topic = ?3",
            RawProgress::COLUMNS
          ))?;
          stmt
            .query_map(rusqlite::params![user_id, subject, topic], RawProgress::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM progress WHERE user_id = ?1",
            RawProgress::COLUMNS
          ))?;
          stmt
            .query_map(rusqlite::params![user_id], RawProgress::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    let mut records = raws
      .into_iter()
      .map(RawProgress::into_record)
      .collect::<Result<Vec<_>>>()?;

    records.sort_by(|a, b| {
      (&a.key.subject, &a.key.topic, a.key.level)
        .cmp(&(&b.key.subject, &b.key.topic, b.key.level))
    });
    Ok(records)
  }

  // ── Conversations ─────────────────────────────────────────────────────────

  async fn append_turn(&self, input: NewTurn) -> Result<ConversationTurn> {
    let turn_id    = Uuid::new_v4();
    let created_at = Utc::now();

    let id_str     = encode_uuid(turn_id);
    let at_str     = encode_dt(created_at);
    let level_str  = encode_level(input.level);
    let session_id = input.session_id.clone();
    let message    = input.message.clone();
    let user_id    = input.user_id;
    let is_user    = input.is_user;

    let seq: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "INSERT INTO conversation_turns
             (turn_id, user_id, session_id, seq, message, is_user, level, created_at)
           VALUES (
             ?1, ?2, ?3,
             (SELECT COALESCE(MAX(seq), 0) + 1 FROM conversation_turns
               WHERE user_id = ?2 AND session_id = ?3),
             ?4, ?5, ?6, ?7
           )
           RETURNING seq",
          rusqlite::params![id_str, user_id, session_id, message, is_user, level_str, at_str],
          |row| row.get(0),
        )?)
      })
      .await?;

    Ok(ConversationTurn {
      turn_id,
      user_id,
      session_id: input.session_id,
      seq: u64::try_from(seq).map_err(|_| crate::Error::NegativeCounter(seq))?,
      message: input.message,
      is_user,
      level: input.level,
      created_at,
    })
  }

  async fn recent_turns(
    &self,
    user_id:    UserId,
    session_id: String,
    limit:      usize,
  ) -> Result<Vec<ConversationTurn>> {
    self.select_turns(user_id, session_id, Some(limit)).await
  }

  async fn session_turns(
    &self,
    user_id:    UserId,
    session_id: String,
  ) -> Result<Vec<ConversationTurn>> {
    self.select_turns(user_id, session_id, None).await
  }

  // ── Study material ────────────────────────────────────────────────────────

  async fn record_study_material(&self, input: NewStudyMaterial) -> Result<StudyMaterial> {
    let material = StudyMaterial {
      material_id:  Uuid::new_v4(),
      user_id:      input.user_id,
      subject:      input.subject,
      topic:        input.topic,
      content_type: input.content_type,
      content:      input.content,
      created_at:   Utc::now(),
    };

    let id_str       = encode_uuid(material.material_id);
    let user_id      = material.user_id;
    let subject      = material.subject.clone();
    let topic        = material.topic.clone();
    let content_type = material.content_type.clone();
    let content_str  = material.content.to_string();
    let at_str       = encode_dt(material.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO study_materials
             (material_id, user_id, subject, topic, content_type, content, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![id_str, user_id, subject, topic, content_type, content_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(material)
  }

  async fn list_study_materials(&self, user_id: UserId) -> Result<Vec<StudyMaterial>> {
    let raws: Vec<RawMaterial> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM study_materials
           WHERE user_id = ?1
           ORDER BY created_at DESC, rowid DESC",
          RawMaterial::COLUMNS
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![user_id], RawMaterial::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawMaterial::into_material).collect()
  }
}
