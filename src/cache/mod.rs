//! Cache module for avoiding repeated dataset reads
//!
//! Holds the last loaded dataset in memory for a fixed window.

mod dataset;

pub use dataset::{DatasetCache, DEFAULT_TTL_SECS};

use serde::Serialize;

/// Status of a single cache entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntryStatus {
    pub exists: bool,
    pub fresh: bool,
    pub age_secs: Option<u64>,
    pub count: Option<usize>,
}
