//! Generated study content and assessments.
//!
//! Oracle payloads are checked as they are deserialised: a response that does
//! not match the expected shape never reaches the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, TaxonomyLevel, progress::Score, user::UserId};

// ─── Study material ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantTerm {
  pub term:       String,
  pub definition: String,
}

/// The study-guide part of generated material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGuide {
  pub introduction:         String,
  #[serde(default)]
  pub key_concepts:         Vec<String>,
  #[serde(default)]
  pub detailed_explanation: String,
  #[serde(default)]
  pub examples:             Vec<String>,
  #[serde(default)]
  pub important_terms:      Vec<ImportantTerm>,
  #[serde(default)]
  pub common_mistakes:      Vec<String>,
  #[serde(default)]
  pub tips_and_tricks:      Vec<String>,
  pub summary:              String,
}

/// A practice question pitched at one taxonomy level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeQuestion {
  pub bloom_level: TaxonomyLevel,
  pub question:    String,
  pub solution:    String,
  #[serde(default)]
  pub hint:        String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStudyMaterial {
  study_guide: StudyGuide,
  questions:   Vec<PracticeQuestion>,
}

/// A study guide plus exactly one question per taxonomy level, in taxonomy
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawStudyMaterial")]
pub struct StudyMaterialContent {
  pub study_guide: StudyGuide,
  pub questions:   Vec<PracticeQuestion>,
}

impl TryFrom<RawStudyMaterial> for StudyMaterialContent {
  type Error = Error;

  fn try_from(raw: RawStudyMaterial) -> Result<Self, Error> {
    let mut questions = raw.questions;
    questions.sort_by_key(|q| q.bloom_level);

    let levels: Vec<TaxonomyLevel> =
      questions.iter().map(|q| q.bloom_level).collect();
    if levels != TaxonomyLevel::ALL {
      return Err(Error::MalformedPayload(format!(
        "expected one question per level, got {levels:?}"
      )));
    }

    if let Some(q) = questions.iter().find(|q| q.question.trim().is_empty()) {
      return Err(Error::MalformedPayload(format!(
        "empty question text at level {}",
        q.bloom_level
      )));
    }

    Ok(Self { study_guide: raw.study_guide, questions })
  }
}

// ─── Tutoring reply ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTutorReply {
  message:            String,
  bloom_level:        TaxonomyLevel,
  #[serde(default)]
  suggest_next_level: bool,
  #[serde(default)]
  feedback:           String,
}

/// The oracle's answer to one tutoring turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTutorReply")]
pub struct TutorReply {
  pub message:            String,
  pub bloom_level:        TaxonomyLevel,
  /// Whether the oracle recommends moving to the next level. Only a
  /// suggestion; the client decides.
  pub suggest_next_level: bool,
  pub feedback:           String,
}

impl TryFrom<RawTutorReply> for TutorReply {
  type Error = Error;

  fn try_from(raw: RawTutorReply) -> Result<Self, Error> {
    if raw.message.trim().is_empty() {
      return Err(Error::MalformedPayload("empty tutor message".into()));
    }
    Ok(Self {
      message:            raw.message,
      bloom_level:        raw.bloom_level,
      suggest_next_level: raw.suggest_next_level,
      feedback:           raw.feedback,
    })
  }
}

// ─── Assessment ──────────────────────────────────────────────────────────────

/// An evaluated answer. `score` is range-checked on receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
  pub score:           Score,
  #[serde(default)]
  pub feedback:        String,
  #[serde(default)]
  pub strengths:       String,
  #[serde(default)]
  pub improvements:    String,
  /// Transcription of a handwritten answer, when one was assessed.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub recognized_text: Option<String>,
}

// ─── Persisted material ──────────────────────────────────────────────────────

/// Content type tag for generated study guides.
pub const STUDY_MATERIAL: &str = "study_material";

/// A generated-content row. Every generation request appends one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterial {
  pub material_id:  Uuid,
  pub user_id:      UserId,
  pub subject:      String,
  pub topic:        String,
  pub content_type: String,
  pub content:      serde_json::Value,
  pub created_at:   DateTime<Utc>,
}

/// Input to [`crate::store::TutorStore::record_study_material`].
#[derive(Debug, Clone)]
pub struct NewStudyMaterial {
  pub user_id:      UserId,
  pub subject:      String,
  pub topic:        String,
  pub content_type: String,
  pub content:      serde_json::Value,
}

impl NewStudyMaterial {
  pub fn study_guide(
    user_id: UserId,
    subject: impl Into<String>,
    topic: impl Into<String>,
    content: &StudyMaterialContent,
  ) -> crate::Result<Self> {
    Ok(Self {
      user_id,
      subject: subject.into(),
      topic: topic.into(),
      content_type: STUDY_MATERIAL.to_owned(),
      content: serde_json::to_value(content)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn questions(levels: &[&str]) -> serde_json::Value {
    levels
      .iter()
      .map(|l| {
        json!({
          "bloomLevel": l,
          "question": format!("{l} question"),
          "solution": "worked solution",
          "hint": "think it through"
        })
      })
      .collect()
  }

  fn material(levels: &[&str]) -> serde_json::Value {
    json!({
      "studyGuide": {
        "introduction": "Fractions describe parts of a whole.",
        "keyConcepts": ["numerator", "denominator"],
        "summary": "A fraction is a ratio."
      },
      "questions": questions(levels)
    })
  }

  const SHUFFLED: [&str; 6] =
    ["Create", "Remember", "Analyze", "Understand", "Evaluate", "Apply"];

  #[test]
  fn material_questions_sorted_into_level_order() {
    let parsed: StudyMaterialContent =
      serde_json::from_value(material(&SHUFFLED)).unwrap();
    let levels: Vec<_> = parsed.questions.iter().map(|q| q.bloom_level).collect();
    assert_eq!(levels, TaxonomyLevel::ALL);
    assert!(parsed.study_guide.examples.is_empty());
  }

  #[test]
  fn material_missing_level_rejected() {
    let result = serde_json::from_value::<StudyMaterialContent>(material(&[
      "Remember", "Understand", "Apply", "Analyze", "Evaluate",
    ]));
    assert!(result.is_err());
  }

  #[test]
  fn material_duplicate_level_rejected() {
    let result = serde_json::from_value::<StudyMaterialContent>(material(&[
      "Remember", "Remember", "Apply", "Analyze", "Evaluate", "Create",
    ]));
    assert!(result.is_err());
  }

  #[test]
  fn material_unknown_level_rejected() {
    let result = serde_json::from_value::<StudyMaterialContent>(material(&[
      "Remember", "Understand", "Apply", "Analyze", "Evaluate", "Synthesize",
    ]));
    assert!(result.is_err());
  }

  #[test]
  fn reply_defaults_optional_fields() {
    let reply: TutorReply = serde_json::from_value(json!({
      "message": "What is 1/2 + 1/4?",
      "bloomLevel": "Apply"
    }))
    .unwrap();
    assert!(!reply.suggest_next_level);
    assert!(reply.feedback.is_empty());
  }

  #[test]
  fn reply_with_empty_message_rejected() {
    let result = serde_json::from_value::<TutorReply>(json!({
      "message": "  ",
      "bloomLevel": "Apply",
      "suggestNextLevel": true
    }));
    assert!(result.is_err());
  }

  #[test]
  fn assessment_out_of_range_score_rejected() {
    let result = serde_json::from_value::<Assessment>(json!({
      "score": 140,
      "feedback": "great"
    }));
    assert!(result.is_err());
  }

  #[test]
  fn assessment_missing_score_rejected() {
    let result =
      serde_json::from_value::<Assessment>(json!({ "feedback": "fine" }));
    assert!(result.is_err());
  }

  #[test]
  fn study_guide_row_is_tagged() {
    let content: StudyMaterialContent =
      serde_json::from_value(material(&SHUFFLED)).unwrap();
    let row = NewStudyMaterial::study_guide(3, "Mathematics", "Fractions", &content)
      .unwrap();
    assert_eq!(row.content_type, STUDY_MATERIAL);
    assert_eq!(row.content["questions"].as_array().unwrap().len(), 6);
  }
}
