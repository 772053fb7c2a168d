//! Handlers for the read-only reference data: `/syllabus` and `/taxonomy`.
//!
//! None of these touch the store or require authentication.

use axum::{Json, extract::Path};
use serde::Serialize;
use tutor_core::{
  TaxonomyLevel,
  syllabus::{self, Syllabus},
};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct SubjectsResponse {
  pub grade:    String,
  pub subjects: Vec<&'static str>,
}

/// `GET /syllabus/subjects/{grade}`
pub async fn subjects(Path(grade): Path<String>) -> Result<Json<SubjectsResponse>, ApiError> {
  let subjects = syllabus::subjects_for_grade(&grade)
    .filter(|s| !s.is_empty())
    .ok_or_else(|| ApiError::NotFound(format!("grade {grade:?} not found")))?;
  Ok(Json(SubjectsResponse { grade, subjects }))
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
  pub grade:   String,
  pub subject: String,
  pub topics:  &'static [&'static str],
}

/// `GET /syllabus/topics/{grade}/{subject}`
pub async fn topics(
  Path((grade, subject)): Path<(String, String)>,
) -> Result<Json<TopicsResponse>, ApiError> {
  let topics = syllabus::topics_for(&grade, &subject)
    .filter(|t| !t.is_empty())
    .ok_or_else(|| {
      ApiError::NotFound(format!("no topics for {subject:?} in grade {grade:?}"))
    })?;
  Ok(Json(TopicsResponse { grade, subject, topics }))
}

/// `GET /syllabus/all`: `{ grade: { subject: [topic, ..] } }`.
pub async fn all() -> Json<Syllabus> { Json(syllabus::all()) }

#[derive(Debug, Serialize)]
pub struct LevelEntry {
  pub level:       TaxonomyLevel,
  pub index:       usize,
  pub description: &'static str,
  pub verbs:       &'static [&'static str],
}

/// `GET /taxonomy`: the six levels, lowest first.
pub async fn taxonomy() -> Json<Vec<LevelEntry>> {
  let levels = TaxonomyLevel::ALL
    .into_iter()
    .map(|level| {
      let info = level.describe();
      LevelEntry {
        level,
        index: level.index(),
        description: info.description,
        verbs: info.verbs,
      }
    })
    .collect();
  Json(levels)
}
