//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::UrlMapping;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

const KEY_PREFIX: &str = "shorturl:";

/// Redis cache for resolved mappings.
///
/// Entries are JSON-encoded [`UrlMapping`]s under `shorturl:<short_id>`.
/// Operations are fail-open: errors are logged and reported as misses.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_mapping`] gets `None`;
    ///   controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("invalid Redis URL: {e}")))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {e}")))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
        })
    }
}

fn build_key(short_id: i64) -> String {
    format!("{KEY_PREFIX}{short_id}")
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_mapping(&self, short_id: i64) -> CacheResult<Option<UrlMapping>> {
        let key = build_key(short_id);
        let mut conn = self.client.clone();

        let raw = match conn.get::<_, Option<String>>(&key).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                return Ok(None);
            }
        };

        let Some(raw) = raw else {
            debug!("Cache MISS: {}", key);
            return Ok(None);
        };

        match serde_json::from_str::<UrlMapping>(&raw) {
            Ok(mapping) => {
                debug!("Cache HIT: {} -> {}", key, mapping.original_url);
                Ok(Some(mapping))
            }
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set_mapping(&self, mapping: &UrlMapping, ttl: Option<u64>) -> CacheResult<()> {
        let key = build_key(mapping.short_id);
        let ttl_seconds = ttl.unwrap_or(self.default_ttl);

        let payload = serde_json::to_string(mapping)
            .map_err(|e| CacheError::Operation(format!("failed to encode mapping: {e}")))?;

        let mut conn = self.client.clone();
        if let Err(e) = conn.set_ex::<_, _, ()>(&key, payload, ttl_seconds).await {
            warn!("Redis SET error for {}: {}", key, e);
            return Ok(());
        }

        debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
