//! DNS lookup abstraction used by URL validation.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

/// Resolves hostnames to IP addresses.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - System resolver (`getaddrinfo`)
/// - Test mocks available with `cfg(test)`
///
/// Callers apply their own timeout; implementations may block for as long
/// as the underlying resolver does.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Looks up `host` and returns every address it resolves to.
    ///
    /// # Errors
    ///
    /// Returns the resolver's I/O error (NXDOMAIN, no network, ...).
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
