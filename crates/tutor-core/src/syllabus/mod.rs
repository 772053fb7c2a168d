//! Read-only syllabus lookup.
//!
//! Unknown grades or subjects yield `None`; they are an empty result, not an
//! error.

mod data;

use serde::{Serialize, Serializer};

use data::SYLLABUS;

#[derive(Debug)]
pub struct SubjectTopics {
  pub subject: &'static str,
  pub topics:  &'static [&'static str],
}

#[derive(Debug)]
pub struct GradeSyllabus {
  pub grade:    &'static str,
  pub subjects: &'static [SubjectTopics],
}

/// The whole syllabus. Serialises as `{ grade: { subject: [topic, ..] } }`
/// with keys in syllabus order.
#[derive(Debug, Clone, Copy)]
pub struct Syllabus(&'static [GradeSyllabus]);

impl Serialize for Syllabus {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(self.0.iter().map(|g| (g.grade, Subjects(g.subjects))))
  }
}

struct Subjects(&'static [SubjectTopics]);

impl Serialize for Subjects {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(self.0.iter().map(|s| (s.subject, s.topics)))
  }
}

pub fn all() -> Syllabus { Syllabus(SYLLABUS) }

pub fn grades() -> impl Iterator<Item = &'static str> {
  SYLLABUS.iter().map(|g| g.grade)
}

fn grade(grade: &str) -> Option<&'static GradeSyllabus> {
  SYLLABUS.iter().find(|g| g.grade == grade)
}

pub fn is_known_grade(name: &str) -> bool { grade(name).is_some() }

/// Subjects taught in `grade`, in syllabus order.
pub fn subjects_for_grade(name: &str) -> Option<Vec<&'static str>> {
  grade(name).map(|g| g.subjects.iter().map(|s| s.subject).collect())
}

/// Topics for a `(grade, subject)` pair, in syllabus order.
pub fn topics_for(grade_name: &str, subject: &str) -> Option<&'static [&'static str]> {
  grade(grade_name)?
    .subjects
    .iter()
    .find(|s| s.subject == subject)
    .map(|s| s.topics)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn grade_five_history() {
    assert_eq!(
      topics_for("5", "History"),
      Some(
        &[
          "Medieval History",
          "Renaissance and Reformation",
          "Map Reading Skills",
        ][..]
      )
    );
  }

  #[test]
  fn unknown_grade_is_none() {
    assert_eq!(topics_for("99", "Mathematics"), None);
    assert_eq!(subjects_for_grade("99"), None);
    assert!(!is_known_grade("99"));
  }

  #[test]
  fn unknown_subject_is_none() {
    assert_eq!(topics_for("K", "History"), None);
  }

  #[test]
  fn kindergarten_subjects_in_order() {
    assert_eq!(
      subjects_for_grade("K").unwrap(),
      vec!["Mathematics", "Science", "English"]
    );
  }

  #[test]
  fn all_serialises_as_nested_map() {
    let value = serde_json::to_value(all()).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 13);
    assert_eq!(value["5"]["History"][0], "Medieval History");
    assert_eq!(value["K"]["Mathematics"][0], "Counting Numbers 1-20");
  }

  #[test]
  fn grades_run_k_through_twelve() {
    let grades: Vec<_> = grades().collect();
    assert_eq!(grades.first(), Some(&"K"));
    assert_eq!(grades.last(), Some(&"12"));
    assert_eq!(grades.len(), 13);
  }
}
