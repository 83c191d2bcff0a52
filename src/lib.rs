//! appcat: load, cache and search a catalog of apps from a JSON dataset

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod output;
