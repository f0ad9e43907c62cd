//! Validation for board paths.

use thiserror::Error;

use crate::types::Key;

/// Maximum allowed path depth.
const MAX_PATH_LENGTH: usize = 256;

/// Property names that must never appear in a path.
///
/// These are the reserved structural identifiers that enable prototype
/// pollution in the dynamic-object world boardsync documents originate
/// from; a patch produced from untrusted input must not be able to
/// address them.
const FORBIDDEN_SEGMENTS: &[&str] = &["__proto__", "constructor", "prototype"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Path too long")]
    PathTooLong,
    #[error("Forbidden path segment")]
    ForbiddenSegment,
}

/// Returns `true` for a property step carrying a reserved identifier.
///
/// Index steps are never forbidden.
pub fn is_forbidden_segment(key: &Key) -> bool {
    match key {
        Key::Prop(name) => FORBIDDEN_SEGMENTS.contains(&name.as_str()),
        Key::Index(_) => false,
    }
}

/// Validate a path.
///
/// # Errors
///
/// Returns an error if:
/// - The path exceeds the maximum depth (256 steps)
/// - Any property step is a reserved identifier
pub fn validate_path(path: &[Key]) -> Result<(), ValidationError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    if path.iter().any(is_forbidden_segment) {
        return Err(ValidationError::ForbiddenSegment);
    }
    Ok(())
}
