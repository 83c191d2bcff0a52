mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{CacheConfig, Config, DataConfig, OutputConfig, DEFAULT_DATA_PATH};
