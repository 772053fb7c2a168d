//! Request field checks shared by the handlers. All of them run before any
//! store or oracle call.

use tutor_core::TaxonomyLevel;

use crate::error::ApiError;

/// A non-blank field, trimmed.
pub(crate) fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ApiError::BadRequest(format!("{field} is required")));
  }
  Ok(trimmed)
}

/// A non-blank optional field.
pub(crate) fn required_opt<'a>(
  field: &str,
  value: &'a Option<String>,
) -> Result<&'a str, ApiError> {
  required(field, value.as_deref().unwrap_or_default())
}

pub(crate) fn taxonomy_level(field: &str, value: &str) -> Result<TaxonomyLevel, ApiError> {
  let name = required(field, value)?;
  TaxonomyLevel::parse(name).map_err(|e| ApiError::BadRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_is_rejected() {
    assert!(matches!(required("topic", "   "), Err(ApiError::BadRequest(_))));
    assert_eq!(required("topic", " Fractions ").unwrap(), "Fractions");
    assert!(required_opt("topic", &None).is_err());
  }

  #[test]
  fn level_names_are_exact() {
    assert_eq!(taxonomy_level("bloomLevel", "Apply").unwrap(), TaxonomyLevel::Apply);
    assert!(taxonomy_level("bloomLevel", "apply").is_err());
    assert!(taxonomy_level("bloomLevel", "Synthesize").is_err());
  }
}
