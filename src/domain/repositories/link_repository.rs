//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::RepositoryError;
use async_trait::async_trait;

/// Persistence collaborator of the link registry.
///
/// Implementations must enforce uniqueness of `short_code` inside
/// [`LinkRepository::insert`] as a single atomic operation visible to all
/// concurrent writers. A separate existence check followed by an insert is
/// not acceptable.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link, or rejects it if the short code is taken.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UniqueViolation`] if `new_link.short_code`
    /// already exists. Nothing is written in that case.
    ///
    /// Returns [`RepositoryError::Storage`] on any other failure.
    async fn insert(&self, new_link: NewLink) -> Result<Link, RepositoryError>;

    /// Finds a link by its short code, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend failures.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, RepositoryError>;

    /// Checks if the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
