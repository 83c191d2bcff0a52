//! The catalog data service: load, cache and query apps

pub mod filter;
pub mod normalize;
mod service;
mod source;
mod types;

pub use service::{AppService, CatalogService};
pub use source::{Clock, DataSource, FileSource, SystemClock};
pub use types::{App, AppRecord, Dataset, SearchFilters, SearchResults};

#[cfg(test)]
pub(crate) use service::tests as testing;
