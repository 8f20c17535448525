//! Resource sources
//!
//! A source turns a resolved site-absolute path (`/data/person.json?v=..`)
//! into parsed JSON. `HttpSource` talks to a running site, `DirSource` reads
//! a site checked out on disk, `MemorySource` serves fixtures.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use crate::error::{ConfigError, FetchError};

/// Anything that can fetch one JSON document by site path
#[async_trait]
pub trait ResourceSource: Send + Sync {
    async fn fetch_json(&self, site_path: &str) -> Result<Value, FetchError>;
}

fn strip_query(site_path: &str) -> &str {
    site_path.split_once('?').map(|(p, _)| p).unwrap_or(site_path)
}

// ============================================================================
// HTTP
// ============================================================================

/// Fetches resources from a site origin over HTTP.
///
/// The origin may carry a path (`https://host/portfolio/`); site paths are
/// resolved under it rather than under the host root.
pub struct HttpSource {
    origin: Url,
    http: Client,
}

impl HttpSource {
    pub fn new(origin: &str) -> Result<Self, ConfigError> {
        let origin = Url::parse(origin).map_err(|_| ConfigError::InvalidUrl(origin.to_string()))?;
        Ok(Self::with_client(origin, Client::new()))
    }

    pub fn with_client(mut origin: Url, http: Client) -> Self {
        if !origin.path().ends_with('/') {
            let path = format!("{}/", origin.path());
            origin.set_path(&path);
        }
        Self { origin, http }
    }

    /// Full URL for a site path; the origin's own path is kept as prefix
    pub fn url_for(&self, site_path: &str) -> Result<Url, FetchError> {
        self.origin
            .join(site_path.trim_start_matches('/'))
            .map_err(|e| FetchError::InvalidLocation {
                path: site_path.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn fetch_json(&self, site_path: &str) -> Result<Value, FetchError> {
        let url = self.url_for(site_path)?;

        debug!(%url, "fetch_json: GET");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Directory
// ============================================================================

/// Reads resources from a site directory; the query string is ignored
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a site path under the root; `.`/`..` segments are dropped
    pub fn file_path(&self, site_path: &str) -> PathBuf {
        let path = strip_query(site_path);
        let decoded = urlencoding::decode(path)
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| path.to_string());

        decoded
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}

#[async_trait]
impl ResourceSource for DirSource {
    async fn fetch_json(&self, site_path: &str) -> Result<Value, FetchError> {
        let path = self.file_path(site_path);
        debug!(path = %path.display(), "fetch_json: read");
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| FetchError::Io { path: path.clone(), source })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// In-memory fixtures
// ============================================================================

/// Fixture source keyed by site path (query ignored); counts every request
#[derive(Default)]
pub struct MemorySource {
    documents: HashMap<String, Value>,
    failing: HashMap<String, u16>,
    requests: AtomicUsize,
    log: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` at `site_path` (e.g. `/data/projects.json`)
    pub fn with_document(mut self, site_path: &str, value: Value) -> Self {
        self.documents.insert(site_path.to_string(), value);
        self
    }

    /// Answer `site_path` with a non-success status
    pub fn with_status(mut self, site_path: &str, status: u16) -> Self {
        self.failing.insert(site_path.to_string(), status);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Every requested site path, query included, in arrival order
    pub fn requested_paths(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ResourceSource for MemorySource {
    async fn fetch_json(&self, site_path: &str) -> Result<Value, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(site_path.to_string());

        // Yield so concurrent callers genuinely overlap
        tokio::task::yield_now().await;

        let key = strip_query(site_path);
        if let Some(status) = self.failing.get(key) {
            return Err(FetchError::Status {
                url: site_path.to_string(),
                status: *status,
            });
        }
        self.documents.get(key).cloned().ok_or_else(|| FetchError::Status {
            url: site_path.to_string(),
            status: 404,
        })
    }
}
