//! Validation of submitted URLs.

use regex::Regex;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::domain::entities::ValidUrl;
use crate::domain::resolver::HostResolver;
use crate::error::ValidationError;

/// Accepted URL shape: http(s) scheme, optional `www.`, a dotted host with a
/// 1-6 character final label, and an optional path/query/fragment tail.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("URL pattern is a valid regex")
});

/// Checks that a candidate string is a well-formed http/https URL whose host
/// resolves.
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
    dns_timeout: Duration,
}

impl UrlValidator {
    pub fn new(resolver: Arc<dyn HostResolver>, dns_timeout: Duration) -> Self {
        Self {
            resolver,
            dns_timeout,
        }
    }

    /// Validates `candidate` and returns it unchanged on success.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::BadFormat`] if the string does not match the URL
    ///   pattern or has no parseable host
    /// - [`ValidationError::UnresolvableHost`] if the DNS lookup fails, finds
    ///   no address, or exceeds the configured timeout
    pub async fn validate(&self, candidate: &str) -> Result<ValidUrl, ValidationError> {
        let host = extract_host(candidate)?;

        match tokio::time::timeout(self.dns_timeout, self.resolver.lookup(&host)).await {
            Ok(Ok(addrs)) if !addrs.is_empty() => Ok(ValidUrl::new(candidate.to_string())),
            Ok(Ok(_)) => {
                debug!("DNS lookup for {} returned no addresses", host);
                Err(ValidationError::UnresolvableHost(host))
            }
            Ok(Err(e)) => {
                debug!("DNS lookup for {} failed: {}", host, e);
                Err(ValidationError::UnresolvableHost(host))
            }
            Err(_) => {
                debug!("DNS lookup for {} timed out after {:?}", host, self.dns_timeout);
                Err(ValidationError::UnresolvableHost(host))
            }
        }
    }
}

/// Syntax check: matches the URL pattern and yields the hostname to resolve.
fn extract_host(candidate: &str) -> Result<String, ValidationError> {
    if !URL_PATTERN.is_match(candidate) {
        return Err(ValidationError::BadFormat);
    }

    let url = Url::parse(candidate).map_err(|_| ValidationError::BadFormat)?;

    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .ok_or(ValidationError::BadFormat)
}
