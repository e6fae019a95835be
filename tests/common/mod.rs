#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};

use shorturl::domain::entities::{Counter, NewShortUrl, ShortUrl, parse_short_code};
use shorturl::domain::repositories::{CounterRepository, UrlRepository};
use shorturl::domain::{HostResolver, ResolvedHost};
use shorturl::prelude::{AppError, AppState, ShortUrlService};
use shorturl::routes::app_router;

/// Hosts the test resolver knows about.
pub const KNOWN_HOSTS: &[&str] = &["www.freecodecamp.org", "example.com", "www.rust-lang.org"];

#[derive(Default)]
pub struct InMemoryCounterRepository {
    counters: Mutex<HashMap<String, i64>>,
}

#[async_trait]
impl CounterRepository for InMemoryCounterRepository {
    async fn increment(&self, name: &str) -> Result<i64, AppError> {
        let mut counters = self.counters.lock().unwrap();
        let seq = counters.entry(name.to_string()).or_insert(0);
        *seq += 1;
        Ok(*seq)
    }

    async fn current(&self, name: &str) -> Result<Option<Counter>, AppError> {
        let counters = self.counters.lock().unwrap();
        Ok(counters.get(name).map(|seq| Counter::new(name, *seq)))
    }
}

#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<Vec<ShortUrl>>,
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.short == new_url.short) {
            return Err(AppError::DuplicateKey {
                constraint: Some("short_urls_short_key".to_string()),
            });
        }

        let record = ShortUrl::new(
            records.len() as i64 + 1,
            new_url.original,
            new_url.short,
            Utc::now(),
        );
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Vec<ShortUrl>, AppError> {
        let Some(short) = parse_short_code(short_code) else {
            return Ok(Vec::new());
        };

        let records = self.records.lock().unwrap();
        Ok(records.iter().filter(|r| r.short == short).cloned().collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.lock().unwrap().len() as i64)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

/// Store whose every call fails as if the database were down.
pub struct UnavailableStore;

#[async_trait]
impl CounterRepository for UnavailableStore {
    async fn increment(&self, _name: &str) -> Result<i64, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn current(&self, _name: &str) -> Result<Option<Counter>, AppError> {
        Err(AppError::storage("connection refused"))
    }
}

#[async_trait]
impl UrlRepository for UnavailableStore {
    async fn save(&self, _new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn find_by_short_code(&self, _short_code: &str) -> Result<Vec<ShortUrl>, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::storage("connection refused"))
    }

    async fn list_recent(&self, _limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        Err(AppError::storage("connection refused"))
    }
}

/// Resolves only a fixed set of host names.
pub struct StaticResolver {
    hosts: HashSet<String>,
}

impl StaticResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn lookup(&self, host: &str) -> Result<ResolvedHost, AppError> {
        if self.hosts.contains(host) {
            Ok(ResolvedHost::from(IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))))
        } else {
            Err(AppError::unresolvable_host(host, "NXDOMAIN"))
        }
    }
}

pub fn create_state(
    counters: Arc<dyn CounterRepository>,
    urls: Arc<dyn UrlRepository>,
) -> AppState {
    let resolver = Arc::new(StaticResolver::new(KNOWN_HOSTS));
    AppState::new(Arc::new(ShortUrlService::new(counters, urls, resolver)))
}

/// Router backed by empty in-memory stores.
pub fn create_test_app() -> Router {
    let state = create_state(
        Arc::new(InMemoryCounterRepository::default()),
        Arc::new(InMemoryUrlRepository::default()),
    );
    app_router(state, "public")
}

/// Router whose store is unreachable.
pub fn create_unavailable_app() -> Router {
    let store = Arc::new(UnavailableStore);
    let state = create_state(store.clone(), store);
    app_router(state, "public")
}

/// Router with a working counter and a failing URL store.
pub fn create_failing_save_app() -> Router {
    let state = create_state(
        Arc::new(InMemoryCounterRepository::default()),
        Arc::new(UnavailableStore),
    );
    app_router(state, "public")
}
