//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::UrlMapping;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(String),

    #[error("cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Read-through cache for resolved mappings.
///
/// Mappings never change once created, so entries are only ever added and
/// expire by TTL; there is no invalidation.
///
/// Implementations must be fail-open: a broken cache degrades to store
/// lookups, it never fails a request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached mapping for `short_id`, `Ok(None)` on miss.
    async fn get_mapping(&self, short_id: i64) -> CacheResult<Option<UrlMapping>>;

    /// Stores a mapping. `ttl_seconds = None` uses the implementation default.
    async fn set_mapping(&self, mapping: &UrlMapping, ttl_seconds: Option<u64>)
    -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short label for health reports and logs.
    fn backend_name(&self) -> &'static str;
}
