//! Section Renderers
//!
//! Each section module exposes its mount selector and a pure `render`
//! function from records to a markup fragment (`None` when there is nothing
//! to show). `render_section` applies the common contract:
//! 1. mount absent -> no-op
//! 2. data empty -> no-op, leaving any fallback markup in place
//! 3. otherwise replace the mount's contents wholesale
//!
//! Record text is interpolated as-is (content files may carry inline markup);
//! attribute values are escaped.

pub mod about_carousel;
pub mod accolades;
pub mod brands;
pub mod capabilities;
pub mod case_study;
pub mod experience_highlights;
pub mod experience_timeline;
pub mod process;
pub mod project_navigation;
pub mod projects;
pub mod skills_grid;
pub mod skills_preview;
pub mod testimonials;
pub mod text;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::Document;
use crate::loader::DataLoader;

pub use text::{escape_attr, slugify, truncate_text, DEFAULT_TRUNCATE_LIMIT};

/// Every renderable section of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Projects,
    ProjectNavigation,
    Brands,
    AboutCarousel,
    Capabilities,
    Process,
    ExperienceHighlights,
    SkillsPreview,
    Testimonials,
    ExperienceTimeline,
    SkillsGrid,
    Accolades,
    CaseStudy,
}

impl Section {
    /// Page order used when no registry narrows it down
    pub const ALL: [Section; 13] = [
        Section::Projects,
        Section::ProjectNavigation,
        Section::Brands,
        Section::AboutCarousel,
        Section::Capabilities,
        Section::Process,
        Section::ExperienceHighlights,
        Section::SkillsPreview,
        Section::Testimonials,
        Section::ExperienceTimeline,
        Section::SkillsGrid,
        Section::Accolades,
        Section::CaseStudy,
    ];

    pub fn mount(&self) -> &'static str {
        match self {
            Section::Projects => projects::MOUNT,
            Section::ProjectNavigation => project_navigation::MOUNT,
            Section::Brands => brands::MOUNT,
            Section::AboutCarousel => about_carousel::MOUNT,
            Section::Capabilities => capabilities::MOUNT,
            Section::Process => process::MOUNT,
            Section::ExperienceHighlights => experience_highlights::MOUNT,
            Section::SkillsPreview => skills_preview::MOUNT,
            Section::Testimonials => testimonials::MOUNT,
            Section::ExperienceTimeline => experience_timeline::MOUNT,
            Section::SkillsGrid => skills_grid::MOUNT,
            Section::Accolades => accolades::MOUNT,
            Section::CaseStudy => case_study::MOUNT,
        }
    }

    /// Build this section's fragment from loaded data
    pub fn render(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let loader = ctx.loader;
        match self {
            Section::Projects => projects::render(loader.projects()),
            Section::ProjectNavigation => {
                let page_id = ctx.page_id?;
                let prefix = loader.base_path().root_prefix();
                project_navigation::render(loader.adjacent_projects(page_id), prefix)
            }
            Section::Brands => brands::render(loader.brands()),
            Section::AboutCarousel => about_carousel::render(loader.about_carousel()),
            Section::Capabilities => capabilities::render(loader.capabilities()),
            Section::Process => process::render(loader.process()),
            Section::ExperienceHighlights => experience_highlights::render(loader.experience()),
            Section::SkillsPreview => skills_preview::render(loader.skills()),
            Section::Testimonials => testimonials::render(loader.testimonials()),
            Section::ExperienceTimeline => experience_timeline::render(loader.experience()),
            Section::SkillsGrid => skills_grid::render(loader.skills()),
            Section::Accolades => accolades::render(loader.accolades()),
            Section::CaseStudy => case_study::render(loader.case_study().as_deref()),
        }
    }
}

/// What a renderer reads from
pub struct RenderContext<'a> {
    pub loader: &'a DataLoader,
    /// Current page identifier (project id / case-study id)
    pub page_id: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOutcome {
    Rendered,
    NoMount,
    NoData,
}

/// Run one section against a document
pub fn render_section<D: Document + ?Sized>(
    document: &mut D,
    section: Section,
    ctx: &RenderContext<'_>,
) -> SectionOutcome {
    let mount = section.mount();
    if !document.has_mount(mount) {
        debug!(?section, mount, "No mount point; skipping");
        return SectionOutcome::NoMount;
    }

    let Some(html) = section.render(ctx) else {
        debug!(?section, "No data; leaving mount untouched");
        return SectionOutcome::NoData;
    };

    if document.set_inner_html(mount, &html) {
        SectionOutcome::Rendered
    } else {
        SectionOutcome::NoMount
    }
}
