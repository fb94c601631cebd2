//! Field validation shared by catalog entities.

use curio_core::{DomainError, DomainResult};

/// Maximum length of a category or item name.
pub const MAX_NAME_LEN: usize = 250;

/// Maximum length of an item description.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Validate a required name field: non-blank and within bound.
///
/// Returns the trimmed name.
pub fn require_name(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::validation(format!(
            "{field} exceeds {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional description. Blank input counts as absent.
pub fn optional_description(value: Option<&str>) -> DomainResult<Option<String>> {
    let Some(raw) = value else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::validation(format!(
            "description exceeds {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_name_trims_and_accepts() {
        assert_eq!(require_name("name", "  Books  ").unwrap(), "Books");
    }

    #[test]
    fn require_name_rejects_blank() {
        let err = require_name("category name", "   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn require_name_rejects_oversized() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = require_name("name", &long).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn description_at_bound_is_accepted() {
        let text = "d".repeat(MAX_DESCRIPTION_LEN);
        assert_eq!(optional_description(Some(&text)).unwrap().unwrap(), text);
    }

    #[test]
    fn blank_description_becomes_none() {
        assert_eq!(optional_description(Some("  ")).unwrap(), None);
        assert_eq!(optional_description(None).unwrap(), None);
    }
}
