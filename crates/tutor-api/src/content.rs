//! Handlers for `/content` endpoints: generated study material, answer
//! assessment and the progress ledger.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/content/study-material?subject=&topic=` | Generates and stores a study guide |
//! | `GET`  | `/content/materials` | Stored study guides, newest first |
//! | `POST` | `/content/submit-answer` | Assess, then fold the score into the ledger |
//! | `POST` | `/content/submit-handwritten-answer` | As above, from an image |
//! | `GET`  | `/content/progress[?subject=&topic=]` | Grouped ledger view |
//!
//! An attempt is recorded only after the oracle returned a valid assessment.
//! Oracle failures leave the ledger untouched.

use axum::{
  Json,
  extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tutor_core::{
  TaxonomyLevel,
  material::{Assessment, NewStudyMaterial, StudyMaterial, StudyMaterialContent},
  oracle::{AssessRequest, ContentOracle, HandwritingRequest, ImageData, MaterialRequest},
  progress::{ProgressKey, ProgressRecord, TopicKey, TopicProgress, group_progress},
  store::TutorStore,
  user::User,
};

use crate::{
  AppState,
  auth::AuthUser,
  error::ApiError,
  validate::{required, required_opt, taxonomy_level},
};

// ─── Study material ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TopicParams {
  pub subject: Option<String>,
  pub topic:   Option<String>,
}

/// `GET /content/study-material?subject=<s>&topic=<t>`
pub async fn study_material<S, O>(
  State(state): State<AppState<S, O>>,
  AuthUser(user): AuthUser,
  Query(params): Query<TopicParams>,
) -> Result<Json<StudyMaterialContent>, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let subject = required_opt("subject", &params.subject)?;
  let topic   = required_opt("topic", &params.topic)?;

  let content = state
    .oracle
    .generate_material(MaterialRequest {
      grade:   user.grade.clone(),
      subject: subject.to_owned(),
      topic:   topic.to_owned(),
    })
    .await?;

  let row = NewStudyMaterial::study_guide(user.user_id, subject, topic, &content)
    .map_err(|e| ApiError::Internal(e.to_string()))?;
  state
    .store
    .record_study_material(row)
    .await
    .map_err(ApiError::store)?;

  Ok(Json(content))
}

/// `GET /content/materials`
pub async fn materials<S, O>(
  State(state): State<AppState<S, O>>,
  AuthUser(user): AuthUser,
) -> Result<Json<Vec<StudyMaterial>>, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let rows = state
    .store
    .list_study_materials(user.user_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(rows))
}

// ─── Assessment ──────────────────────────────────────────────────────────────

/// An assessment together with the ledger entry it updated.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
  #[serde(flatten)]
  pub assessment: Assessment,
  pub progress:   ProgressRecord,
}

async fn record<S: TutorStore>(
  store: &S,
  user: &User,
  subject: &str,
  topic: &str,
  level: TaxonomyLevel,
  assessment: Assessment,
) -> Result<AssessmentResponse, ApiError> {
  let key = ProgressKey {
    user_id: user.user_id,
    subject: subject.to_owned(),
    topic:   topic.to_owned(),
    level,
  };
  let progress = store
    .record_attempt(key, assessment.score)
    .await
    .map_err(ApiError::store)?;
  Ok(AssessmentResponse { assessment, progress })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitAnswerBody {
  pub subject:     String,
  pub topic:       String,
  pub question:    String,
  pub answer:      String,
  pub bloom_level: String,
}

/// `POST /content/submit-answer`
pub async fn submit_answer<S, O>(
  State(state): State<AppState<S, O>>,
  AuthUser(user): AuthUser,
  Json(body): Json<SubmitAnswerBody>,
) -> Result<Json<AssessmentResponse>, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let subject  = required("subject", &body.subject)?;
  let topic    = required("topic", &body.topic)?;
  let question = required("question", &body.question)?;
  let answer   = required("answer", &body.answer)?;
  let level    = taxonomy_level("bloomLevel", &body.bloom_level)?;

  let assessment = state
    .oracle
    .assess(AssessRequest {
      question: question.to_owned(),
      answer:   answer.to_owned(),
      level,
    })
    .await?;

  let response =
    record(state.store.as_ref(), &user, subject, topic, level, assessment).await?;
  Ok(Json(response))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitHandwrittenBody {
  pub subject:      String,
  pub topic:        String,
  pub question:     String,
  /// `data:image/...;base64,...`
  pub image_data:   String,
  pub bloom_level:  String,
  pub typed_answer: Option<String>,
}

/// `POST /content/submit-handwritten-answer`
pub async fn submit_handwritten_answer<S, O>(
  State(state): State<AppState<S, O>>,
  AuthUser(user): AuthUser,
  Json(body): Json<SubmitHandwrittenBody>,
) -> Result<Json<AssessmentResponse>, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let subject  = required("subject", &body.subject)?;
  let topic    = required("topic", &body.topic)?;
  let question = required("question", &body.question)?;
  let image    = ImageData::parse(required("imageData", &body.image_data)?)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
  let level    = taxonomy_level("bloomLevel", &body.bloom_level)?;

  let assessment = state
    .oracle
    .assess_handwriting(HandwritingRequest {
      image,
      question: question.to_owned(),
      level,
      typed_answer: body.typed_answer.clone(),
    })
    .await?;

  let response =
    record(state.store.as_ref(), &user, subject, topic, level, assessment).await?;
  Ok(Json(response))
}

// ─── Progress ────────────────────────────────────────────────────────────────

/// `GET /content/progress[?subject=<s>&topic=<t>]`
///
/// `subject` and `topic` filter together. Unless both are given and
/// non-blank, every record the user owns is returned.
pub async fn progress<S, O>(
  State(state): State<AppState<S, O>>,
  AuthUser(user): AuthUser,
  Query(params): Query<TopicParams>,
) -> Result<Json<Vec<TopicProgress>>, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let non_blank = |v: &Option<String>| {
    v.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
  };
  let filter = match (non_blank(&params.subject), non_blank(&params.topic)) {
    (Some(subject), Some(topic)) => Some(TopicKey { subject, topic }),
    _ => None,
  };

  let records = state
    .store
    .get_progress(user.user_id, filter)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(group_progress(records)))
}
