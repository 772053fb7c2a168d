//! Progress ledger types.
//!
//! A [`ProgressRecord`] holds the running mean of every attempt score recorded
//! for one `(user, subject, topic, level)` key. Individual attempt scores are
//! not retained; the mean is folded incrementally by the store on each
//! attempt.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, TaxonomyLevel, user::UserId};

// ─── Score ───────────────────────────────────────────────────────────────────

/// An assessment score: a finite number in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
  pub const MAX: f64 = 100.0;

  pub fn new(value: f64) -> Result<Self> {
    if value.is_finite() && (0.0..=Self::MAX).contains(&value) {
      Ok(Self(value))
    } else {
      Err(Error::InvalidScore(value))
    }
  }

  pub fn value(self) -> f64 { self.0 }
}

impl TryFrom<f64> for Score {
  type Error = Error;

  fn try_from(value: f64) -> Result<Self> { Self::new(value) }
}

impl From<Score> for f64 {
  fn from(score: Score) -> Self { score.0 }
}

// ─── Keys ────────────────────────────────────────────────────────────────────

/// A `(subject, topic)` pair, used to filter progress reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicKey {
  pub subject: String,
  pub topic:   String,
}

/// The unique key of a ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressKey {
  pub user_id: UserId,
  pub subject: String,
  pub topic:   String,
  pub level:   TaxonomyLevel,
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A ledger entry as stored. `score` keeps full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
  #[serde(flatten)]
  pub key:          ProgressKey,
  pub score:        f64,
  pub attempts:     u32,
  pub last_updated: DateTime<Utc>,
}

impl ProgressRecord {
  /// The score as shown to students; rounding happens only here.
  pub fn rounded_score(&self) -> i64 { self.score.round() as i64 }
}

// ─── Views ───────────────────────────────────────────────────────────────────

/// Presentation form of one level's entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
  pub score:        i64,
  pub attempts:     u32,
  pub last_updated: DateTime<Utc>,
}

/// All recorded levels for one `(subject, topic)` pair, in taxonomy order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgress {
  pub subject:      String,
  pub topic:        String,
  pub bloom_levels: BTreeMap<TaxonomyLevel, LevelProgress>,
}

/// Group ledger records by `(subject, topic)`.
///
/// Groups appear in the order their first record appears in `records`.
pub fn group_progress(
  records: impl IntoIterator<Item = ProgressRecord>,
) -> Vec<TopicProgress> {
  let mut groups: Vec<TopicProgress> = Vec::new();

  for record in records {
    let entry = LevelProgress {
      score:        record.rounded_score(),
      attempts:     record.attempts,
      last_updated: record.last_updated,
    };
    let ProgressKey { subject, topic, level, .. } = record.key;

    match groups
      .iter_mut()
      .find(|g| g.subject == subject && g.topic == topic)
    {
      Some(group) => {
        group.bloom_levels.insert(level, entry);
      }
      None => groups.push(TopicProgress {
        subject,
        topic,
        bloom_levels: BTreeMap::from([(level, entry)]),
      }),
    }
  }

  groups
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(subject: &str, topic: &str, level: TaxonomyLevel, score: f64) -> ProgressRecord {
    ProgressRecord {
      key:          ProgressKey {
        user_id: 1,
        subject: subject.into(),
        topic:   topic.into(),
        level,
      },
      score,
      attempts:     2,
      last_updated: Utc::now(),
    }
  }

  #[test]
  fn score_bounds() {
    assert!(Score::new(0.0).is_ok());
    assert!(Score::new(100.0).is_ok());
    assert!(matches!(Score::new(100.5), Err(Error::InvalidScore(_))));
    assert!(Score::new(-1.0).is_err());
    assert!(Score::new(f64::NAN).is_err());
    assert!(Score::new(f64::INFINITY).is_err());
  }

  #[test]
  fn score_rejected_on_deserialize() {
    assert!(serde_json::from_str::<Score>("42.5").is_ok());
    assert!(serde_json::from_str::<Score>("101").is_err());
  }

  #[test]
  fn rounding_is_presentation_only() {
    let r = record("Mathematics", "Fractions", TaxonomyLevel::Apply, 66.666_666);
    assert_eq!(r.rounded_score(), 67);
    assert!((r.score - 66.666_666).abs() < f64::EPSILON);
  }

  #[test]
  fn groups_by_subject_and_topic_with_levels_in_order() {
    let groups = group_progress(vec![
      record("Mathematics", "Fractions", TaxonomyLevel::Evaluate, 40.0),
      record("Science", "Magnets", TaxonomyLevel::Remember, 90.0),
      record("Mathematics", "Fractions", TaxonomyLevel::Remember, 70.4),
      record("Mathematics", "Fractions", TaxonomyLevel::Apply, 80.0),
    ]);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].subject, "Mathematics");
    assert_eq!(groups[1].topic, "Magnets");

    let levels: Vec<_> = groups[0].bloom_levels.keys().copied().collect();
    assert_eq!(levels, vec![
      TaxonomyLevel::Remember,
      TaxonomyLevel::Apply,
      TaxonomyLevel::Evaluate,
    ]);
    assert_eq!(groups[0].bloom_levels[&TaxonomyLevel::Remember].score, 70);
  }

  #[test]
  fn view_serializes_levels_as_named_keys() {
    let groups = group_progress(vec![record(
      "Mathematics",
      "Fractions",
      TaxonomyLevel::Apply,
      80.0,
    )]);
    let json = serde_json::to_value(&groups).unwrap();
    assert_eq!(json[0]["bloomLevels"]["Apply"]["score"], 80);
    assert_eq!(json[0]["bloomLevels"]["Apply"]["attempts"], 2);
  }
}
