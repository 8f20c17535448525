//! Configuration
//!
//! `SiteConfig` comes from environment variables with local-development
//! defaults. `PageRegistry` lists which sections apply to which pages; with
//! no registry every page gets every section (each no-ops without a mount).

use glob::Pattern;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::render::Section;

pub const DEFAULT_SETTLE_DELAY_MS: u64 = 300;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Runtime settings shared by the CLI and the preview server
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding the HTML pages (and `data/` unless `data_url` is set)
    pub site_dir: PathBuf,
    /// Fetch resources from this origin instead of the site directory
    pub data_url: Option<String>,
    pub pages_config: Option<PathBuf>,
    pub settle_delay: Duration,
    pub port: u16,
    pub cache_ttl: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from("site"),
            data_url: None,
            pages_config: None,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            port: DEFAULT_PORT,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl SiteConfig {
    /// Read `SITE_DIR`, `DATA_URL`, `PAGES_CONFIG`, `SCROLL_SETTLE_MS`, `PORT`
    /// and `RENDER_CACHE_TTL_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` with an injectable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let parse_u64 = |name: &'static str| -> Result<Option<u64>, ConfigError> {
            match lookup(name) {
                None => Ok(None),
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidEnv { name, value: raw }),
            }
        };

        let port = match parse_u64("PORT")? {
            Some(p) => u16::try_from(p).map_err(|_| ConfigError::InvalidEnv {
                name: "PORT",
                value: p.to_string(),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            site_dir: lookup("SITE_DIR").map(PathBuf::from).unwrap_or(defaults.site_dir),
            data_url: lookup("DATA_URL").filter(|u| !u.is_empty()),
            pages_config: lookup("PAGES_CONFIG").map(PathBuf::from),
            settle_delay: parse_u64("SCROLL_SETTLE_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.settle_delay),
            port,
            cache_ttl: parse_u64("RENDER_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
        })
    }

    /// Load the configured page registry, or the all-sections default
    pub fn page_registry(&self) -> Result<PageRegistry, ConfigError> {
        match &self.pages_config {
            Some(path) => PageRegistry::from_file(path),
            None => Ok(PageRegistry::default()),
        }
    }
}

// ============================================================================
// Page registry
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
struct PageRuleFile {
    pattern: String,
    sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PageRegistryFile {
    #[serde(default)]
    pages: Vec<PageRuleFile>,
    #[serde(default)]
    default: Option<Vec<Section>>,
}

#[derive(Debug, Clone)]
struct PageRule {
    pattern: Pattern,
    sections: Vec<Section>,
}

/// Which sections run on which page
///
/// ```json
/// {
///   "pages": [
///     {"pattern": "/index.html", "sections": ["capabilities", "process", "testimonials"]},
///     {"pattern": "/work/*.html", "sections": ["project-navigation", "case-study"]}
///   ],
///   "default": ["projects"]
/// }
/// ```
///
/// The first matching pattern wins. Directory paths match as `<dir>/index.html`.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    rules: Vec<PageRule>,
    default: Option<Vec<Section>>,
}

impl PageRegistry {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::RegistryIo {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: PageRegistryFile =
            serde_json::from_str(&raw).map_err(|source| ConfigError::RegistryFormat {
                path: path.to_path_buf(),
                source,
            })?;

        let registry = Self::from_parsed(parsed);
        info!(path = %path.display(), rules = registry.rules.len(), "Loaded page registry");
        Ok(registry)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Self::from_parsed)
    }

    fn from_parsed(parsed: PageRegistryFile) -> Self {
        let rules = parsed
            .pages
            .into_iter()
            .filter_map(|rule| match Pattern::new(&rule.pattern) {
                Ok(pattern) => Some(PageRule { pattern, sections: rule.sections }),
                Err(e) => {
                    warn!(pattern = %rule.pattern, "Ignoring invalid page pattern: {}", e);
                    None
                }
            })
            .collect();
        Self { rules, default: parsed.default }
    }

    /// Sections for a page path, in render order
    pub fn sections_for(&self, page_path: &str) -> &[Section] {
        let normalized;
        let path = if page_path.is_empty() || page_path.ends_with('/') {
            let dir = if page_path.is_empty() { "/" } else { page_path };
            normalized = format!("{}index.html", dir);
            normalized.as_str()
        } else {
            page_path
        };

        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.sections.as_slice())
            .or(self.default.as_deref())
            .unwrap_or(&Section::ALL)
    }
}
