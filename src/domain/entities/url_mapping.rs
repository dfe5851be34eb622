//! Url mapping entity and the validated-URL newtype.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Association between an original URL and its numeric short id.
///
/// Mappings are created once and never mutated, which is what makes it safe
/// to cache them without invalidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    pub short_id: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(short_id: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
        }
    }
}

/// A URL that passed syntax and host resolvability checks.
///
/// Only [`crate::application::services::UrlValidator`] constructs values of
/// this type. The wrapped string is exactly what the client submitted: no
/// normalization is applied, so `http://a.com` and `http://a.com/` are
/// distinct URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidUrl(String);

impl ValidUrl {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ValidUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
