//! Dataset caching

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::cache::CacheEntryStatus;
use crate::catalog::App;

/// Default cache TTL: 5 minutes
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Cached dataset with metadata
#[derive(Debug, Clone)]
struct CachedApps {
    /// When the dataset was loaded
    loaded_at: DateTime<Utc>,
    /// The cached apps
    apps: Vec<App>,
}

/// In-memory dataset cache
#[derive(Debug)]
pub struct DatasetCache {
    entry: Option<CachedApps>,
    ttl: Duration,
}

impl DatasetCache {
    /// Create a new cache with the default TTL
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL_SECS)
    }

    /// Create with custom TTL
    pub fn with_ttl(ttl_secs: u64) -> Self {
        Self {
            entry: None,
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether a dataset was loaded less than one TTL before `now`
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|cached| self.is_fresh(cached, now))
    }

    /// The cached apps regardless of age; empty when nothing is cached
    pub fn apps(&self) -> &[App] {
        match &self.entry {
            Some(cached) => &cached.apps,
            None => &[],
        }
    }

    /// Replace the cached dataset
    pub fn set(&mut self, apps: Vec<App>, loaded_at: DateTime<Utc>) -> &[App] {
        let cached = self.entry.insert(CachedApps { loaded_at, apps });
        &cached.apps
    }

    /// Get cache status as of `now`
    pub fn status(&self, now: DateTime<Utc>) -> CacheEntryStatus {
        match &self.entry {
            None => CacheEntryStatus {
                exists: false,
                fresh: false,
                age_secs: None,
                count: None,
            },
            Some(cached) => CacheEntryStatus {
                exists: true,
                fresh: self.is_fresh(cached, now),
                age_secs: Some(age(cached, now).as_secs()),
                count: Some(cached.apps.len()),
            },
        }
    }

    fn is_fresh(&self, cached: &CachedApps, now: DateTime<Utc>) -> bool {
        age(cached, now) < self.ttl
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Age of an entry; a clock that went backwards counts as zero
fn age(cached: &CachedApps, now: DateTime<Utc>) -> Duration {
    (now - cached.loaded_at).to_std().unwrap_or(Duration::ZERO)
}
