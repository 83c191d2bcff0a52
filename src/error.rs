use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur during catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The dataset could not be loaded. The message stays generic; the
    /// cause is available through `source()`.
    #[error("Failed to load app data")]
    DataLoad(#[source] LoadFailure),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The search endpoint answered with a failure status
    #[error("{message}")]
    Endpoint { status: u16, message: String },

    /// App not found
    #[error("App not found: {0}")]
    AppNotFound(String),

    /// JSON serialization error
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

/// Underlying cause of a dataset load failure
#[derive(Error, Debug)]
pub enum LoadFailure {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AppNotFound(_) => 4,
            Self::DataLoad(_) | Self::Endpoint { .. } => 3,
            Self::Config(_) | Self::Toml(_) | Self::TomlSerialize(_) | Self::Env(_) => 2,
            Self::InvalidArgument(_) => 64,
            Self::Json(_) | Self::Io(_) => 1,
        }
    }

    /// Create an endpoint error from status and message
    pub fn endpoint(status: u16, message: impl Into<String>) -> Self {
        Self::Endpoint {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_data_load_message_hides_cause() {
        let err = CatalogError::DataLoad(LoadFailure::Read {
            path: PathBuf::from("/secret/apps.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        });

        assert_eq!(err.to_string(), "Failed to load app data");
        let cause = err.source().unwrap().to_string();
        assert!(cause.contains("/secret/apps.json"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CatalogError::AppNotFound("x".into()).exit_code(), 4);
        assert_eq!(CatalogError::endpoint(500, "boom").exit_code(), 3);
        assert_eq!(CatalogError::Config("bad".into()).exit_code(), 2);
    }
}
