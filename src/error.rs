//! Error types
//!
//! `FetchError` never escapes the loader: every variant is logged and turned
//! into the resource's empty default. `ConfigError` covers the page registry
//! and location parsing used by the front ends.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while fetching or decoding a single resource
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch {url}: {status}")]
    Status { url: String, status: u16 },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot resolve {path} against page location: {reason}")]
    InvalidLocation { path: String, reason: String },
}

/// Configuration failures (page registry, locations, data source)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read page registry {path}: {source}")]
    RegistryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid page registry {path}: {source}")]
    RegistryFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_url() {
        let err = FetchError::Status {
            url: "data/person.json?v=1".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to fetch data/person.json?v=1: 404");
    }
}
