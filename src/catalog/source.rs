//! Where the dataset comes from, and what time it is

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Raw dataset text provider
pub trait DataSource {
    /// Read the whole dataset as text
    fn read(&self) -> std::io::Result<String>;

    /// Location used in logs and error causes
    fn location(&self) -> PathBuf;
}

/// Dataset stored in a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn read(&self) -> std::io::Result<String> {
        std::fs::read_to_string(&self.path)
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Time provider for cache expiry and timestamp defaults
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
