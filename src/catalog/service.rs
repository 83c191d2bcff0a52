use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use super::filter;
use super::normalize::normalize;
use super::source::{Clock, DataSource, FileSource, SystemClock};
use super::types::{App, Dataset, SearchFilters, SearchResults};
use crate::cache::{CacheEntryStatus, DatasetCache};
use crate::error::{CatalogError, LoadFailure, Result};

/// Operations offered by an app catalog
pub trait AppService {
    /// Every app in dataset order
    fn get_all_apps(&mut self) -> Result<Vec<App>>;

    /// Apps matching all given filters
    fn search_apps(&mut self, filters: &SearchFilters) -> Result<SearchResults>;

    /// The app with this id, if any
    fn get_app_by_id(&mut self, id: &str) -> Result<Option<App>>;

    /// Apps whose category is exactly `category`
    fn get_apps_by_category(&mut self, category: &str) -> Result<Vec<App>>;
}

/// Catalog backed by a dataset source, with a time-based cache
pub struct CatalogService {
    source: Box<dyn DataSource>,
    clock: Box<dyn Clock>,
    cache: DatasetCache,
}

impl CatalogService {
    /// Catalog over a dataset file with the default cache window
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_parts(FileSource::new(path), SystemClock, DatasetCache::new())
    }

    /// Catalog over a dataset file with a custom cache window
    pub fn with_ttl(path: impl Into<PathBuf>, ttl_secs: u64) -> Self {
        Self::with_parts(
            FileSource::new(path),
            SystemClock,
            DatasetCache::with_ttl(ttl_secs),
        )
    }

    /// Catalog with an explicit source, clock and cache
    pub fn with_parts(
        source: impl DataSource + 'static,
        clock: impl Clock + 'static,
        cache: DatasetCache,
    ) -> Self {
        Self {
            source: Box::new(source),
            clock: Box::new(clock),
            cache,
        }
    }

    /// Load the dataset, serving the cached copy while it is fresh
    pub fn load(&mut self) -> Result<&[App]> {
        let now = self.clock.now();

        if self.cache.is_fresh_at(now) {
            debug!("serving apps from cache");
            return Ok(self.cache.apps());
        }

        let location = self.source.location();
        debug!(path = %location.display(), "cache miss, reading dataset");

        let apps = match self.read_dataset(now) {
            Ok(apps) => apps,
            Err(failure) => {
                error!(path = %location.display(), error = %failure, "failed to load apps");
                return Err(CatalogError::DataLoad(failure));
            }
        };

        info!(path = %location.display(), count = apps.len(), "loaded apps");
        Ok(self.cache.set(apps, now))
    }

    /// Cache status as of now
    pub fn cache_status(&self) -> CacheEntryStatus {
        self.cache.status(self.clock.now())
    }

    /// How long a loaded dataset is served before reading it again
    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Distinct categories with app counts, in dataset order
    pub fn categories(&mut self) -> Result<Vec<(String, usize)>> {
        Ok(filter::categories(self.load()?))
    }

    fn read_dataset(&self, now: DateTime<Utc>) -> std::result::Result<Vec<App>, LoadFailure> {
        let text = self.source.read().map_err(|source| LoadFailure::Read {
            path: self.source.location(),
            source,
        })?;
        let dataset: Dataset = serde_json::from_str(&text)?;
        Ok(normalize(dataset.apps, now))
    }
}

impl AppService for CatalogService {
    fn get_all_apps(&mut self) -> Result<Vec<App>> {
        Ok(self.load()?.to_vec())
    }

    fn search_apps(&mut self, filters: &SearchFilters) -> Result<SearchResults> {
        Ok(filter::search(self.load()?, filters))
    }

    fn get_app_by_id(&mut self, id: &str) -> Result<Option<App>> {
        Ok(filter::by_id(self.load()?, id).cloned())
    }

    fn get_apps_by_category(&mut self, category: &str) -> Result<Vec<App>> {
        Ok(filter::by_category(self.load()?, category))
    }
}
