#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use shorturl::application::services::{MappingService, UrlValidator};
use shorturl::domain::repositories::UrlRepository;
use shorturl::domain::resolver::HostResolver;
use shorturl::infrastructure::cache::NullCache;
use shorturl::infrastructure::persistence::InMemoryUrlRepository;
use shorturl::routes::{StaticAssets, build_router};
use shorturl::state::AppState;
use std::collections::HashSet;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

/// Hosts the fake resolver answers for; everything else is NXDOMAIN.
pub const RESOLVABLE_HOSTS: &[&str] = &[
    "www.example.com",
    "example.com",
    "freecodecamp.org",
    "www.freecodecamp.org",
    "rust-lang.org",
];

/// Deterministic resolver so tests never touch the network.
pub struct FakeResolver {
    hosts: HashSet<String>,
}

impl FakeResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl Default for FakeResolver {
    fn default() -> Self {
        Self::new(RESOLVABLE_HOSTS)
    }
}

#[async_trait]
impl HostResolver for FakeResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if self.hosts.contains(host) {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))])
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "NXDOMAIN"))
        }
    }
}

pub fn create_state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    let validator = Arc::new(UrlValidator::new(
        Arc::new(FakeResolver::default()),
        Duration::from_millis(500),
    ));
    let mapping_service = Arc::new(MappingService::new(
        repository,
        Arc::new(NullCache::new()),
        Duration::from_secs(2),
    ));

    AppState::new(validator, mapping_service)
}

/// State backed by a fresh in-memory store.
pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    (create_state_with(repository.clone()), repository)
}

/// Full application router (static assets, health, API) over `state`.
pub fn create_app(state: AppState) -> Router {
    build_router(state, &StaticAssets::default())
}
