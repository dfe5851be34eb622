//! Repository trait for url mapping storage.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for url mappings.
///
/// Implementations own the only shared mutable state of the service. All
/// writes go through [`UrlRepository::insert_if_absent`], which is required to
/// be atomic: two concurrent calls for the same URL yield one mapping, and two
/// concurrent calls for different URLs never receive the same `short_id`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - Mutex-guarded map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds the mapping for an exact original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BackendUnavailable`] or [`AppError::Internal`] on storage errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlMapping>, AppError>;

    /// Finds the mapping for a short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BackendUnavailable`] or [`AppError::Internal`] on storage errors.
    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<UrlMapping>, AppError>;

    /// Returns the mapping for `original_url`, creating it with the next
    /// short id when none exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BackendUnavailable`] or [`AppError::Internal`] on storage errors.
    async fn insert_if_absent(&self, original_url: &str) -> Result<UrlMapping, AppError>;

    /// Number of stored mappings.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the backend answers.
    async fn ping(&self) -> Result<(), AppError>;
}
