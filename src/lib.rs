//! Portfolio Content Loader
//!
//! Fetches the portfolio's JSON content files, caches them per page session,
//! and renders them into the page's mount points.
//!
//! Structure:
//! - `loader/`: resource fetching, cache-busting, typed records, accessors
//! - `render/`: one module per page section plus text helpers
//! - `document`: the mount-point seam renderers write through
//! - `page`: per-page orchestration (load, render sections, scroll to anchor)
//! - `site`: static rendering of a whole site directory
//! - `config`: environment settings and the page registry
//! - `api_server`: preview server (feature `api`)

pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod page;
pub mod render;
pub mod site;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::{PageRegistry, SiteConfig};
pub use document::{Document, HtmlDocument};
pub use error::{ConfigError, FetchError};
pub use loader::{DataLoader, PageLocation, ResourceSource};
pub use page::{PagePipeline, PageReport};
pub use render::{Section, SectionOutcome};
pub use site::{BuildSummary, SiteRenderer};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
