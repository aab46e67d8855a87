//! Error taxonomy of the link registry.

use thiserror::Error;

/// Errors reported by a [`crate::domain::repositories::LinkRepository`].
///
/// Only [`RepositoryError::UniqueViolation`] is retryable by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("short code already exists: {0}")]
    UniqueViolation(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors returned by [`crate::application::services::LinkService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The caller supplied a bad URL or expiry. Never retried.
    #[error("{0}")]
    InvalidInput(String),

    /// Every attempt collided with an existing short code.
    #[error("failed to allocate a unique short code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    /// A non-collision persistence failure.
    #[error(transparent)]
    Storage(RepositoryError),

    #[error("short link not found: {0}")]
    NotFound(String),

    #[error("short link expired: {0}")]
    Expired(String),
}

impl LinkError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_is_transparent() {
        let err = LinkError::Storage(RepositoryError::Storage("connection reset".into()));
        assert_eq!(err.to_string(), "storage error: connection reset");
    }

    #[test]
    fn test_exhausted_retries_message() {
        let err = LinkError::ExhaustedRetries { attempts: 5 };
        assert!(err.to_string().contains("5 attempts"));
    }
}
