//! System resolver (`getaddrinfo`) via Tokio.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use tracing::debug;

use crate::domain::resolver::HostResolver;

/// Resolves hostnames with the platform resolver.
///
/// Honors `/etc/hosts` and the system DNS configuration, the same source a
/// browser following the redirect would use. Lookups run on Tokio's blocking
/// pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .map(|addr| addr.ip())
            .collect();

        debug!("DNS {} -> {:?}", host, addrs);

        Ok(addrs)
    }
}
