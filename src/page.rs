//! Page Orchestration
//!
//! Fixed order per page:
//! 1. load all content (failures already defaulted per resource)
//! 2. load the page's case study when the plan includes that section
//! 3. run every planned section in plan order
//! 4. last, scroll to the `#fragment` target after a settle delay

use std::time::Duration;
use tracing::{debug, info};

use crate::config::DEFAULT_SETTLE_DELAY_MS;
use crate::document::Document;
use crate::loader::DataLoader;
use crate::render::{render_section, RenderContext, Section, SectionOutcome};

/// What happened on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageReport {
    pub rendered: Vec<Section>,
    pub skipped: Vec<(Section, SectionOutcome)>,
    pub scrolled_to: Option<String>,
}

pub struct PagePipeline<'a> {
    loader: &'a DataLoader,
    sections: &'a [Section],
    settle_delay: Duration,
}

impl<'a> PagePipeline<'a> {
    pub fn new(loader: &'a DataLoader, sections: &'a [Section]) -> Self {
        Self {
            loader,
            sections,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub async fn run<D: Document + ?Sized>(&self, document: &mut D) -> PageReport {
        let location = self.loader.location();
        let content = self.loader.load_all().await;
        debug!(
            page = %location.path(),
            person = content.person.is_some(),
            "Content ready"
        );

        let page_id = location.identifier();
        if self.sections.contains(&Section::CaseStudy)
            && document.has_mount(Section::CaseStudy.mount())
        {
            if let Some(id) = page_id {
                self.loader.load_case_study(id).await;
            }
        }

        let ctx = RenderContext { loader: self.loader, page_id };
        let mut report = PageReport::default();
        for &section in self.sections {
            match render_section(document, section, &ctx) {
                SectionOutcome::Rendered => report.rendered.push(section),
                outcome => report.skipped.push((section, outcome)),
            }
        }

        if let Some(fragment) = location.fragment() {
            // Let layout settle before jumping to the anchor
            tokio::time::sleep(self.settle_delay).await;
            let target = format!("#{}", fragment);
            if document.scroll_into_view(&target) {
                report.scrolled_to = Some(target);
            }
        }

        info!(
            page = %location.path(),
            rendered = report.rendered.len(),
            skipped = report.skipped.len(),
            "Page rendered"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;
    use crate::loader::{MemorySource, PageLocation};
    use serde_json::json;
    use std::sync::Arc;

    const WORK_PAGE: &str = r#"<html><body>
        <nav class="project-nav"><a href="/">Back</a></nav>
        <div class="case-study-content"></div>
        <h2 id="outcomes">Outcomes</h2>
    </body></html>"#;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_document(
                "/data/projects.json",
                json!({"projects": [
                    {"id": "atlas", "url": "work/atlas.html", "title": "Atlas"},
                    {"id": "nova", "url": "work/nova.html", "title": "Nova"}
                ]}),
            )
            .with_document(
                "/data/case-studies/atlas.json",
                json!({"id": "atlas", "title": "Atlas", "summary": "A mapping tool"}),
            )
    }

    #[tokio::test]
    async fn test_project_page_pipeline() {
        let loader = DataLoader::new(
            Arc::new(source()),
            PageLocation::parse("/work/atlas.html#outcomes").unwrap(),
        );
        let sections = [Section::ProjectNavigation, Section::CaseStudy, Section::Testimonials];
        let mut doc = HtmlDocument::parse(WORK_PAGE);

        let report = PagePipeline::new(&loader, &sections)
            .with_settle_delay(Duration::ZERO)
            .run(&mut doc)
            .await;

        assert_eq!(report.rendered, vec![Section::ProjectNavigation, Section::CaseStudy]);
        assert_eq!(report.skipped, vec![(Section::Testimonials, SectionOutcome::NoMount)]);
        assert_eq!(report.scrolled_to.as_deref(), Some("#outcomes"));
        assert_eq!(doc.scroll_target(), Some("#outcomes"));

        // Two projects: prev and next both wrap to nova
        assert_eq!(doc.count(".project-nav [data-project=\"nova\"]"), 2);
        assert_eq!(doc.count("[data-case-study=\"atlas\"]"), 1);
    }

    #[tokio::test]
    async fn test_missing_fragment_target_is_not_scrolled() {
        let loader = DataLoader::new(
            Arc::new(MemorySource::new()),
            PageLocation::parse("/index.html#nowhere").unwrap(),
        );
        let mut doc = HtmlDocument::parse("<html><body></body></html>");

        let report = PagePipeline::new(&loader, &Section::ALL)
            .with_settle_delay(Duration::ZERO)
            .run(&mut doc)
            .await;

        assert!(report.rendered.is_empty());
        assert_eq!(report.skipped.len(), Section::ALL.len());
        assert_eq!(report.scrolled_to, None);
        assert_eq!(doc.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_case_study_skipped_when_not_planned() {
        let source = Arc::new(source());
        let loader =
            DataLoader::new(source.clone(), PageLocation::parse("/work/atlas.html").unwrap());
        let mut doc = HtmlDocument::parse(WORK_PAGE);

        PagePipeline::new(&loader, &[Section::ProjectNavigation])
            .run(&mut doc)
            .await;

        assert!(loader.case_study().is_none());
        assert_eq!(source.request_count(), 10);
    }
}
