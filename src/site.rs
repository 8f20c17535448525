//! Static site rendering
//!
//! Walks a site directory, runs the page pipeline over every `.html` file
//! with a fresh loader per page, and writes the result (plus every other
//! file, copied verbatim) into an output directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{PageRegistry, SiteConfig, DEFAULT_SETTLE_DELAY_MS};
use crate::document::HtmlDocument;
use crate::error::ConfigError;
use crate::loader::{DataLoader, DirSource, HttpSource, PageLocation, ResourceSource};
use crate::page::{PagePipeline, PageReport};

/// Resource source for a config: remote origin when `data_url` is set,
/// otherwise the site directory itself
pub fn source_for(config: &SiteConfig) -> Result<Arc<dyn ResourceSource>, ConfigError> {
    Ok(match &config.data_url {
        Some(url) => Arc::new(HttpSource::new(url)?),
        None => Arc::new(DirSource::new(&config.site_dir)),
    })
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub report: PageReport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub copied: usize,
    pub sections_rendered: usize,
}

pub struct SiteRenderer {
    source: Arc<dyn ResourceSource>,
    registry: PageRegistry,
    settle_delay: Duration,
}

impl SiteRenderer {
    pub fn new(source: Arc<dyn ResourceSource>, registry: PageRegistry) -> Self {
        Self {
            source,
            registry,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(source_for(config)?, config.page_registry()?)
            .with_settle_delay(config.settle_delay))
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Render one page; `location` is a page path or URL, `#fragment` included
    pub async fn render_page(
        &self,
        location: &str,
        html: &str,
    ) -> Result<RenderedPage, ConfigError> {
        let location = PageLocation::parse(location)?;
        let sections = self.registry.sections_for(location.path());
        let loader = DataLoader::new(self.source.clone(), location);

        let mut document = HtmlDocument::parse(html);
        let report = PagePipeline::new(&loader, sections)
            .with_settle_delay(self.settle_delay)
            .run(&mut document)
            .await;

        Ok(RenderedPage { html: document.into_html(), report })
    }

    /// Render every page under `site_dir` into `out_dir`
    pub async fn build(&self, site_dir: &Path, out_dir: &Path) -> Result<BuildSummary> {
        let mut summary = BuildSummary::default();

        let walker = WalkDir::new(site_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !entry.path().starts_with(out_dir));

        for entry in walker {
            let entry = entry.context("Failed to walk site directory")?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(site_dir)
                .context("Walked outside the site directory")?;
            let target = out_dir.join(relative);
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }

            if !is_html(entry.path()) {
                tokio::fs::copy(entry.path(), &target)
                    .await
                    .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
                summary.copied += 1;
                continue;
            }

            let html = tokio::fs::read_to_string(entry.path())
                .await
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            let page_path = page_path(relative);
            let rendered = self.render_page(&page_path, &html).await?;

            debug!(page = %page_path, rendered = ?rendered.report.rendered, "Writing page");
            tokio::fs::write(&target, rendered.html)
                .await
                .with_context(|| format!("Failed to write {}", target.display()))?;

            summary.pages += 1;
            summary.sections_rendered += rendered.report.rendered.len();
        }

        if summary.pages == 0 {
            warn!(site_dir = %site_dir.display(), "No HTML pages found");
        }
        info!(
            pages = summary.pages,
            copied = summary.copied,
            sections = summary.sections_rendered,
            "Site build complete"
        );
        Ok(summary)
    }
}

fn is_html(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

/// Site-relative file path as a URL path (`work/a.html` -> `/work/a.html`)
fn page_path(relative: &Path) -> String {
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", segments.join("/"))
}

/// Output path for a rendered site
pub fn default_out_dir(site_dir: &Path) -> PathBuf {
    let name = site_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "site".to_string());
    site_dir.with_file_name(format!("{}-rendered", name))
}
