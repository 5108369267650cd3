//! Input validation for sealdrop operations.
//!
//! Validates secret names against GitHub's naming rules.

use crate::error::ValidationError;

/// Validate a GitHub Actions secret name.
///
/// Secret names must:
/// - Only contain A-Z, a-z, 0-9, and underscore
/// - Not start with a digit
/// - Not start with the reserved `GITHUB_` prefix
/// - Not be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_secret_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid(name, "cannot start with a digit".to_string()));
    }

    if name.to_ascii_uppercase().starts_with("GITHUB_") {
        return Err(invalid(name, "the GITHUB_ prefix is reserved".to_string()));
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid(
                name,
                format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            ));
        }
    }

    Ok(())
}

fn invalid(name: &str, reason: String) -> ValidationError {
    ValidationError::InvalidName {
        name: name.to_string(),
        reason,
    }
}
