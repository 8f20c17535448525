//! Page location and data-directory resolution
//!
//! The data directory is picked once per page from the page path, and every
//! resource path is resolved against the page the same way a browser resolves
//! a relative URL. Both the HTTP and directory sources receive the resolved
//! site-absolute path (`/data/person.json?v=...`).

use reqwest::Url;

use crate::error::{ConfigError, FetchError};

/// Placeholder origin used only for relative-path arithmetic
const RESOLUTION_ORIGIN: &str = "http://site.invalid/";

/// Where resource files live relative to the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasePath {
    /// `data/` - page sits at the site root
    Root,
    /// `../data/` - page is an HTML file inside a named subdirectory
    Parent,
}

impl BasePath {
    /// Pick the data directory for a page path.
    ///
    /// A page counts as nested when some segment names an `.html` file and
    /// some segment before the last one is non-empty. `/work/` (no file) and
    /// `/index.html` both stay at the root.
    pub fn for_page_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').collect();
        let addressed_by_html = segments
            .iter()
            .any(|s| !s.is_empty() && s.contains(".html"));
        let parents = &segments[..segments.len().saturating_sub(1)];
        let nested = parents.iter().any(|s| !s.is_empty());

        if addressed_by_html && nested {
            BasePath::Parent
        } else {
            BasePath::Root
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BasePath::Root => "data/",
            BasePath::Parent => "../data/",
        }
    }

    /// Prefix that leads from the page back to the site root
    pub fn root_prefix(&self) -> &'static str {
        match self {
            BasePath::Root => "",
            BasePath::Parent => "../",
        }
    }
}

/// The current page: its path and optional `#fragment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    path: String,
    fragment: Option<String>,
}

impl PageLocation {
    /// Parse either a full URL (`https://host/work/a.html#top`) or a bare
    /// site path (`/work/a.html#top`).
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        if input.contains("://") {
            let url = Url::parse(input).map_err(|_| ConfigError::InvalidUrl(input.to_string()))?;
            return Ok(Self::new(url.path(), url.fragment()));
        }

        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        };
        let path = rest.split_once('?').map(|(p, _)| p).unwrap_or(rest);
        Ok(Self::new(path, fragment))
    }

    pub fn new(path: &str, fragment: Option<&str>) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Self {
            path,
            fragment: fragment.filter(|f| !f.is_empty()).map(str::to_string),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// File stem of the page (`/work/atlas.html` -> `atlas`), used to pick
    /// the current project and its case study.
    pub fn identifier(&self) -> Option<&str> {
        let last = self.path.rsplit('/').next()?;
        last.strip_suffix(".html").filter(|stem| !stem.is_empty())
    }

    pub fn base_path(&self) -> BasePath {
        BasePath::for_page_path(&self.path)
    }

    /// Resolve a page-relative resource path into a site-absolute path,
    /// keeping any query string.
    pub fn resolve(&self, relative: &str) -> Result<String, FetchError> {
        let invalid = |reason: String| FetchError::InvalidLocation {
            path: relative.to_string(),
            reason,
        };

        let origin = Url::parse(RESOLUTION_ORIGIN).map_err(|e| invalid(e.to_string()))?;
        let page = origin.join(&self.path).map_err(|e| invalid(e.to_string()))?;
        let resolved = page.join(relative).map_err(|e| invalid(e.to_string()))?;

        let mut out = resolved.path().to_string();
        if let Some(query) = resolved.query() {
            out.push('?');
            out.push_str(query);
        }
        Ok(out)
    }
}
