//! In-memory implementation of the url repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Url repository kept entirely in process memory.
///
/// A single mutex guards the URL index, the mapping list and the counter, so
/// `insert_if_absent` is one critical section and ids are dense: the mapping
/// with `short_id = n` lives at `mappings[n - 1]`.
///
/// Used when no database is configured and in tests. Contents are lost on
/// restart.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    by_url: HashMap<String, i64>,
    mappings: Vec<UrlMapping>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No invariant spans an unwind: each write pushes then indexes.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn get(&self, short_id: i64) -> Option<&UrlMapping> {
        let index = usize::try_from(short_id).ok()?.checked_sub(1)?;
        self.mappings.get(index)
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        let inner = self.lock();
        Ok(inner
            .by_url
            .get(original_url)
            .and_then(|&id| inner.get(id))
            .cloned())
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.lock().get(short_id).cloned())
    }

    async fn insert_if_absent(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        let mut inner = self.lock();

        if let Some(existing) = inner.by_url.get(original_url).and_then(|&id| inner.get(id)) {
            return Ok(existing.clone());
        }

        let short_id = i64::try_from(inner.mappings.len() + 1)
            .map_err(|_| AppError::internal("short id space exhausted"))?;
        let mapping = UrlMapping::new(short_id, original_url.to_string(), Utc::now());

        inner.mappings.push(mapping.clone());
        inner.by_url.insert(original_url.to_string(), short_id);

        Ok(mapping)
    }

    async fn count(&self) -> Result<i64, AppError> {
        i64::try_from(self.lock().mappings.len())
            .map_err(|_| AppError::internal("mapping count overflow"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
