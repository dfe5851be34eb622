//! DTOs for the short url endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlMapping;

/// Form body of `POST /api/shorturl`.
///
/// `url` is optional so a missing field reaches the validator (and fails
/// there) instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct CreateShortUrlRequest {
    pub url: Option<String>,
}

/// Successful response of `POST /api/shorturl`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlMapping> for ShortUrlResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_id,
        }
    }
}
