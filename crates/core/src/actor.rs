//! Actor field validation.

use crate::error::CoreError;

/// Maximum length of an actor name in characters.
pub const MAX_NAME_LENGTH: usize = 150;

/// Maximum length of the free-form gender field in characters.
pub const MAX_GENDER_LENGTH: usize = 50;

/// Validate an actor name: non-empty and at most [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the gender field length.
pub fn validate_gender(gender: &str) -> Result<(), CoreError> {
    if gender.chars().count() > MAX_GENDER_LENGTH {
        return Err(CoreError::Validation(format!(
            "Gender must be at most {MAX_GENDER_LENGTH} characters"
        )));
    }
    Ok(())
}
