//! Error types for regdesk-core
//!
//! The store itself never fails. Errors only arise at the edges that touch
//! the filesystem: export, the onboarding flag file and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for regdesk operations
pub type Result<T> = std::result::Result<T, RegdeskError>;

/// Main error type for regdesk operations
#[derive(Error, Debug)]
pub enum RegdeskError {
    /// Export-related errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Flag persistence errors
    #[error("Flag store error: {0}")]
    FlagStore(#[from] FlagStoreError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors writing the CSV projection
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reading or writing persisted flags
#[derive(Error, Debug)]
pub enum FlagStoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed flag file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_chains_context() {
        let err: RegdeskError = ConfigError::Invalid {
            field: "search_limit",
            reason: "must be at least 1".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Config error: Invalid value for search_limit: must be at least 1"
        );

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RegdeskError = FlagStoreError::Io {
            path: PathBuf::from("/tmp/flags.json"),
            source: io,
        }
        .into();
        assert!(err.to_string().contains("/tmp/flags.json"));
    }
}
