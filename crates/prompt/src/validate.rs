//! Input validators and post-processing helpers.
//!
//! Validators are handed to the backend, which runs them on each submitted
//! line and re-prompts with the error message when they reject.

use promter_core::ValidationError;

/// Require at least one non-whitespace character.
pub fn validate_text(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(())
}

/// Require text unless a non-empty default can stand in for it.
pub fn validate_text_with_default(input: &str, default: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() && default.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(())
}

/// Accept an empty line or anything starting with `http://` or `https://`.
///
/// The scheme is matched ASCII case-insensitively.
pub fn validate_url(input: &str) -> Result<(), ValidationError> {
    if input.is_empty()
        || has_prefix_ignore_case(input, "http://")
        || has_prefix_ignore_case(input, "https://")
    {
        return Ok(());
    }
    Err(ValidationError::InvalidUrl)
}

fn has_prefix_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Substitute `default` when `input` is empty or whitespace-only.
pub fn resolve_default(input: &str, default: &str) -> String {
    if input.trim().is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}
