//! Bloom's Taxonomy reference data.
//!
//! Six proficiency levels in a fixed order. The order is load-bearing: it is
//! used to sort progress views and to pick the next level a tutoring
//! conversation may move to.

use std::str::FromStr as _;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// A cognitive-skill stage. Declaration order is the taxonomy order.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumCount,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
pub enum TaxonomyLevel {
  Remember,
  Understand,
  Apply,
  Analyze,
  Evaluate,
  Create,
}

/// Descriptive metadata for a level. Has no behavioural effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
  pub description: &'static str,
  pub verbs:       &'static [&'static str],
}

impl TaxonomyLevel {
  /// Every level, lowest first.
  pub const ALL: [TaxonomyLevel; TaxonomyLevel::COUNT] = [
    Self::Remember,
    Self::Understand,
    Self::Apply,
    Self::Analyze,
    Self::Evaluate,
    Self::Create,
  ];

  /// Zero-based position in the taxonomy order.
  pub fn index(self) -> usize { self as usize }

  /// The level after this one; `Create` maps to itself.
  pub fn next(self) -> Self {
    Self::ALL.get(self.index() + 1).copied().unwrap_or(self)
  }

  pub fn is_terminal(self) -> bool { self.next() == self }

  pub fn as_str(self) -> &'static str { self.into() }

  /// Parse the exact level name (e.g. `"Apply"`).
  pub fn parse(name: &str) -> Result<Self> {
    Self::from_str(name).map_err(|_| Error::UnknownLevel(name.to_owned()))
  }

  pub fn describe(self) -> LevelInfo {
    match self {
      Self::Remember => LevelInfo {
        description: "Recall facts and basic concepts",
        verbs:       &[
          "define", "list", "recall", "identify", "name", "state", "describe",
        ],
      },
      Self::Understand => LevelInfo {
        description: "Explain ideas or concepts",
        verbs:       &[
          "explain", "summarize", "interpret", "classify", "compare",
          "discuss",
        ],
      },
      Self::Apply => LevelInfo {
        description: "Use information in new situations",
        verbs:       &[
          "apply", "demonstrate", "solve", "use", "illustrate", "calculate",
        ],
      },
      Self::Analyze => LevelInfo {
        description: "Draw connections among ideas",
        verbs:       &[
          "analyze", "compare", "contrast", "examine", "distinguish",
          "investigate",
        ],
      },
      Self::Evaluate => LevelInfo {
        description: "Justify a stand or decision",
        verbs:       &[
          "evaluate", "judge", "critique", "assess", "defend", "argue",
        ],
      },
      Self::Create => LevelInfo {
        description: "Produce new or original work",
        verbs:       &[
          "create", "design", "develop", "construct", "plan", "compose",
        ],
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator as _;

  use super::*;

  #[test]
  fn next_level_steps_forward() {
    assert_eq!(TaxonomyLevel::Remember.next(), TaxonomyLevel::Understand);
    assert_eq!(TaxonomyLevel::Evaluate.next(), TaxonomyLevel::Create);
  }

  #[test]
  fn create_is_terminal() {
    assert_eq!(TaxonomyLevel::Create.next(), TaxonomyLevel::Create);
    assert!(TaxonomyLevel::Create.is_terminal());
    assert!(!TaxonomyLevel::Analyze.is_terminal());
  }

  #[test]
  fn index_is_strictly_increasing() {
    let indices: Vec<usize> = TaxonomyLevel::iter().map(|l| l.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    assert!(TaxonomyLevel::iter().eq(TaxonomyLevel::ALL));
  }

  #[test]
  fn parse_exact_names_only() {
    assert_eq!(TaxonomyLevel::parse("Apply").unwrap(), TaxonomyLevel::Apply);
    assert!(matches!(
      TaxonomyLevel::parse("apply"),
      Err(Error::UnknownLevel(ref s)) if s == "apply"
    ));
    assert!(TaxonomyLevel::parse("Synthesize").is_err());
  }

  #[test]
  fn serde_uses_level_names() {
    let json = serde_json::to_string(&TaxonomyLevel::Analyze).unwrap();
    assert_eq!(json, "\"Analyze\"");
    let back: TaxonomyLevel = serde_json::from_str("\"Create\"").unwrap();
    assert_eq!(back, TaxonomyLevel::Create);
  }

  #[test]
  fn every_level_has_verbs() {
    for level in TaxonomyLevel::ALL {
      let info = level.describe();
      assert!(!info.description.is_empty());
      assert!(!info.verbs.is_empty(), "{level} has no verbs");
    }
  }
}
