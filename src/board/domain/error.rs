//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A title was empty after trimming.
    #[error("{entity} title must not be empty")]
    EmptyTitle {
        /// Kind of entity whose title was rejected.
        entity: &'static str,
    },
}

/// Trims a title and rejects blank input.
///
/// # Errors
///
/// Returns [`BoardDomainError::EmptyTitle`] when nothing remains after
/// trimming.
pub fn validated_title(
    raw: impl AsRef<str>,
    entity: &'static str,
) -> Result<String, BoardDomainError> {
    let trimmed = raw.as_ref().trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyTitle { entity });
    }
    Ok(trimmed.to_owned())
}
