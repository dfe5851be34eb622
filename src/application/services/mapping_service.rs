//! Url mapping creation and resolution service.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::entities::{UrlMapping, ValidUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Service for creating and resolving url mappings.
///
/// Wraps a [`UrlRepository`] with idempotent creation, strict short id
/// parsing, a read-through cache for resolves and a bound on every backend
/// call.
pub struct MappingService {
    repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
    store_timeout: Duration,
}

impl MappingService {
    /// Creates a new mapping service.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        cache: Arc<dyn CacheService>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            store_timeout,
        }
    }

    /// Returns the mapping for `url`, creating one on first submission.
    ///
    /// Re-submitting a URL returns the existing mapping unchanged. Concurrent
    /// first submissions of the same URL are resolved by the repository's
    /// atomic insert, so exactly one mapping is ever stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BackendUnavailable`] if the store fails or times out.
    pub async fn get_or_create(&self, url: &ValidUrl) -> Result<UrlMapping, AppError> {
        if let Some(existing) = self
            .bounded(self.repository.find_by_original_url(url.as_str()))
            .await?
        {
            debug!(short_id = existing.short_id, "Url already shortened");
            return Ok(existing);
        }

        let mapping = self
            .bounded(self.repository.insert_if_absent(url.as_str()))
            .await?;

        info!(short_id = mapping.short_id, "Created short url");

        Ok(mapping)
    }

    /// Resolves a short id exactly as it appeared in the request path.
    ///
    /// `raw` must be a base-10 integer with no surrounding text; anything else,
    /// and ids that were never issued, are not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unparseable or unknown ids and
    /// [`AppError::BackendUnavailable`] if the store fails or times out.
    pub async fn resolve(&self, raw: &str) -> Result<UrlMapping, AppError> {
        let short_id = parse_short_id(raw).ok_or_else(|| AppError::not_found(raw))?;

        match self.cache.get_mapping(short_id).await {
            Ok(Some(mapping)) => return Ok(mapping),
            Ok(None) => {}
            Err(e) => warn!("Cache error, falling back to store: {}", e),
        }

        let mapping = self
            .bounded(self.repository.find_by_short_id(short_id))
            .await?
            .ok_or_else(|| AppError::not_found(raw))?;

        if let Err(e) = self.cache.set_mapping(&mapping, None).await {
            warn!("Failed to cache mapping {}: {}", short_id, e);
        }

        Ok(mapping)
    }

    /// Number of stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.bounded(self.repository.count()).await
    }

    /// Checks that the store answers within the configured timeout.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.bounded(self.repository.ping()).await
    }

    /// Reports cache health and the backend label.
    pub async fn check_cache(&self) -> (bool, &'static str) {
        (self.cache.health_check().await, self.cache.backend_name())
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .map_err(|_| {
                AppError::backend(format!(
                    "store call exceeded {}ms",
                    self.store_timeout.as_millis()
                ))
            })?
    }
}

/// Parses a path segment as a positive short id.
fn parse_short_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::infrastructure::cache::{CacheError, MockCacheService, NullCache};
    use chrono::Utc;

    const TIMEOUT: Duration = Duration::from_millis(200);

    fn mapping(short_id: i64, url: &str) -> UrlMapping {
        UrlMapping::new(short_id, url.to_string(), Utc::now())
    }

    fn service(repo: MockUrlRepository) -> MappingService {
        MappingService::new(Arc::new(repo), Arc::new(NullCache::new()), TIMEOUT)
    }

    #[test]
    fn test_parse_short_id() {
        assert_eq!(parse_short_id("1"), Some(1));
        assert_eq!(parse_short_id("9999"), Some(9999));
        assert_eq!(parse_short_id("0"), None);
        assert_eq!(parse_short_id("-3"), None);
        assert_eq!(parse_short_id("12abc"), None);
        assert_eq!(parse_short_id("abc"), None);
        assert_eq!(parse_short_id(""), None);
        assert_eq!(parse_short_id("99999999999999999999"), None);
    }

    #[tokio::test]
    async fn test_get_or_create_inserts_new_url() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_original_url()
            .withf(|url| url == "http://www.example.com")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert_if_absent()
            .withf(|url| url == "http://www.example.com")
            .times(1)
            .returning(|url| Ok(mapping(1, url)));

        let result = service(repo)
            .get_or_create(&ValidUrl::new("http://www.example.com".to_string()))
            .await
            .unwrap();

        assert_eq!(result.short_id, 1);
        assert_eq!(result.original_url, "http://www.example.com");
    }

    #[tokio::test]
    async fn test_get_or_create_returns_existing_mapping() {
        let mut repo = MockUrlRepository::new();
        let existing = mapping(5, "https://freecodecamp.org");
        repo.expect_find_by_original_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_insert_if_absent().times(0);

        let result = service(repo)
            .get_or_create(&ValidUrl::new("https://freecodecamp.org".to_string()))
            .await
            .unwrap();

        assert_eq!(result.short_id, 5);
    }

    #[tokio::test]
    async fn test_get_or_create_propagates_backend_errors() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_original_url()
            .returning(|_| Err(AppError::backend("connection refused")));
        repo.expect_insert_if_absent().times(0);

        let result = service(repo)
            .get_or_create(&ValidUrl::new("https://example.com".to_string()))
            .await;

        assert!(matches!(result, Err(AppError::BackendUnavailable(_))));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(mapping(1, "http://www.example.com"))));

        let result = service(repo).resolve("1").await.unwrap();

        assert_eq!(result.original_url, "http://www.example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_is_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_id().returning(|_| Ok(None));

        let result = service(repo).resolve("9999").await;

        assert!(matches!(result, Err(AppError::NotFound(code)) if code == "9999"));
    }

    #[tokio::test]
    async fn test_resolve_non_integer_skips_store() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_id().times(0);
        let svc = service(repo);

        for raw in ["abc", "1.5", "0", "-1", "7x"] {
            assert!(matches!(svc.resolve(raw).await, Err(AppError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn test_resolve_cache_hit_skips_store() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_id().times(0);

        let mut cache = MockCacheService::new();
        cache
            .expect_get_mapping()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(Some(mapping(3, "https://cached.example.com"))));
        cache.expect_set_mapping().times(0);

        let svc = MappingService::new(Arc::new(repo), Arc::new(cache), TIMEOUT);
        let result = svc.resolve("3").await.unwrap();

        assert_eq!(result.original_url, "https://cached.example.com");
    }

    #[tokio::test]
    async fn test_resolve_cache_miss_populates_cache() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_id()
            .times(1)
            .returning(|_| Ok(Some(mapping(4, "https://example.org"))));

        let mut cache = MockCacheService::new();
        cache.expect_get_mapping().times(1).returning(|_| Ok(None));
        cache
            .expect_set_mapping()
            .withf(|m, ttl| m.short_id == 4 && ttl.is_none())
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = MappingService::new(Arc::new(repo), Arc::new(cache), TIMEOUT);
        let result = svc.resolve("4").await.unwrap();

        assert_eq!(result.short_id, 4);
    }

    #[tokio::test]
    async fn test_resolve_cache_error_falls_back_to_store() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_id()
            .times(1)
            .returning(|_| Ok(Some(mapping(2, "https://example.net"))));

        let mut cache = MockCacheService::new();
        cache
            .expect_get_mapping()
            .returning(|_| Err(CacheError::Connection("down".to_string())));
        cache
            .expect_set_mapping()
            .returning(|_, _| Err(CacheError::Operation("down".to_string())));

        let svc = MappingService::new(Arc::new(repo), Arc::new(cache), TIMEOUT);
        let result = svc.resolve("2").await.unwrap();

        assert_eq!(result.original_url, "https://example.net");
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        struct SlowRepository;

        #[async_trait::async_trait]
        impl UrlRepository for SlowRepository {
            async fn find_by_original_url(
                &self,
                _original_url: &str,
            ) -> Result<Option<UrlMapping>, AppError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(None)
            }

            async fn find_by_short_id(&self, _id: i64) -> Result<Option<UrlMapping>, AppError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(None)
            }

            async fn insert_if_absent(&self, url: &str) -> Result<UrlMapping, AppError> {
                Ok(mapping(1, url))
            }

            async fn count(&self) -> Result<i64, AppError> {
                Ok(0)
            }

            async fn ping(&self) -> Result<(), AppError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            }
        }

        let svc = MappingService::new(
            Arc::new(SlowRepository),
            Arc::new(NullCache::new()),
            Duration::from_millis(50),
        );

        let created = svc
            .get_or_create(&ValidUrl::new("https://example.com".to_string()))
            .await;
        assert!(matches!(created, Err(AppError::BackendUnavailable(_))));

        assert!(matches!(
            svc.resolve("1").await,
            Err(AppError::BackendUnavailable(_))
        ));
        assert!(svc.check_store().await.is_err());
    }
}
