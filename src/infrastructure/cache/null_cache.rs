//! No-op cache implementation.

use super::service::{CacheResult, CacheService};
use crate::domain::entities::UrlMapping;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that stores nothing.
///
/// Used when Redis is not configured, when it is unreachable at startup, and
/// in tests. Every lookup is a miss.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_mapping(&self, _short_id: i64) -> CacheResult<Option<UrlMapping>> {
        Ok(None)
    }

    async fn set_mapping(&self, _mapping: &UrlMapping, _ttl: Option<u64>) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "disabled"
    }
}
