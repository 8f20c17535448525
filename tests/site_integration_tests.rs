//! Site Integration Tests
//!
//! Builds a small portfolio site in a temp directory and renders it end to
//! end: directory source, page registry, HTML splicing, static build.

use portfolio_content::config::PageRegistry;
use portfolio_content::loader::DirSource;
use portfolio_content::{HtmlDocument, Section, SectionOutcome, SiteRenderer};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const INDEX: &str = r#"<!DOCTYPE html>
<html><head><title>Home</title></head><body>
<section id="work"><div class="projects-grid"><p>Loading projects…</p></div></section>
<section id="services"><div class="capabilities-grid"></div></section>
<section id="skills"><div class="skills-pill-group"></div></section>
<section id="voices"><div class="testimonials-grid"><p>Fallback quote</p></div></section>
</body></html>"#;

const WORK_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Atlas</title></head><body>
<nav class="project-nav"></nav>
<div class="case-study-content"><p>Loading…</p></div>
<h2 id="outcomes">Outcomes</h2>
</body></html>"#;

fn write_json(root: &Path, relative: &str, value: serde_json::Value) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
}

fn create_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::write(root.join("index.html"), INDEX).unwrap();
    fs::create_dir_all(root.join("work")).unwrap();
    fs::write(root.join("work/atlas.html"), WORK_PAGE).unwrap();
    fs::create_dir_all(root.join("css")).unwrap();
    fs::write(root.join("css/site.css"), "body { margin: 0; }").unwrap();

    write_json(
        root,
        "data/projects.json",
        json!({"projects": [
            {"id": "atlas", "url": "work/atlas.html", "title": "Atlas", "category": "Product"},
            {"id": "nova", "url": "work/nova.html", "title": "Nova", "category": "Brand"},
            {"id": "orbit", "url": "work/orbit.html", "title": "Orbit", "category": "Web"}
        ]}),
    );
    write_json(
        root,
        "data/capabilities.json",
        json!({"capabilities": [
            {"id": "ux", "title": "UX Design", "points": ["Research", "Flows"]}
        ]}),
    );
    write_json(
        root,
        "data/skills.json",
        json!({"skillCategories": [
            {"title": "Design", "skills": ["Figma", "Sketch"]},
            {"title": "Tools", "skills": ["Figma", "Notion"]}
        ]}),
    );
    // testimonials.json intentionally absent
    write_json(
        root,
        "data/case-studies/atlas.json",
        json!({"id": "atlas", "title": "Atlas", "summary": "Faster maps",
               "sections": [{"heading": "Outcomes", "body": "Load time halved"}]}),
    );

    dir
}

fn renderer(site: &TempDir) -> SiteRenderer {
    SiteRenderer::new(Arc::new(DirSource::new(site.path())), PageRegistry::default())
        .with_settle_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_home_page_renders_available_sections() {
    let site = create_site();
    let rendered = renderer(&site).render_page("/index.html", INDEX).await.unwrap();

    assert_eq!(
        rendered.report.rendered,
        vec![Section::Projects, Section::Capabilities, Section::SkillsPreview]
    );
    assert!(rendered
        .report
        .skipped
        .contains(&(Section::Testimonials, SectionOutcome::NoData)));
    assert!(rendered
        .report
        .skipped
        .contains(&(Section::CaseStudy, SectionOutcome::NoMount)));

    let doc = HtmlDocument::parse(&rendered.html);
    assert_eq!(doc.count(".projects-grid [data-project]"), 3);
    assert!(!rendered.html.contains("Loading projects"));
    assert_eq!(doc.count(".capabilities-grid [data-capability=\"ux\"]"), 1);
    // Figma appears in both categories but renders once
    assert_eq!(rendered.html.matches(">Figma<").count(), 1);
    // No testimonials data: fallback markup stays
    assert!(rendered.html.contains("Fallback quote"));
}

#[tokio::test]
async fn test_project_page_with_anchor() {
    let site = create_site();
    let rendered = renderer(&site)
        .render_page("/work/atlas.html#outcomes", WORK_PAGE)
        .await
        .unwrap();

    assert_eq!(
        rendered.report.rendered,
        vec![Section::ProjectNavigation, Section::CaseStudy]
    );
    assert_eq!(rendered.report.scrolled_to.as_deref(), Some("#outcomes"));

    let doc = HtmlDocument::parse(&rendered.html);
    assert_eq!(doc.count(".project-nav [data-project=\"orbit\"]"), 1);
    assert_eq!(doc.count(".project-nav [data-project=\"nova\"]"), 1);
    // Relative to work/atlas.html, so a site under /portfolio/ still links correctly
    assert_eq!(doc.count(".project-nav a[href=\"../work/orbit.html\"]"), 1);
    assert_eq!(doc.count(".case-study-content [data-case-study=\"atlas\"]"), 1);
    assert!(rendered.html.contains("Load time halved"));
}

#[tokio::test]
async fn test_registry_limits_sections() {
    let site = create_site();
    let registry = PageRegistry::from_json(
        r#"{"pages": [{"pattern": "/index.html", "sections": ["capabilities"]}]}"#,
    )
    .unwrap();
    let renderer = SiteRenderer::new(Arc::new(DirSource::new(site.path())), registry);

    let rendered = renderer.render_page("/", INDEX).await.unwrap();

    assert_eq!(rendered.report.rendered, vec![Section::Capabilities]);
    assert!(rendered.html.contains("Loading projects"));
}

#[tokio::test]
async fn test_build_mirrors_site_tree() {
    let site = create_site();
    let out = TempDir::new().unwrap();

    let summary = renderer(&site).build(site.path(), out.path()).await.unwrap();

    assert_eq!(summary.pages, 2);
    // css + 4 data files
    assert_eq!(summary.copied, 5);
    assert_eq!(summary.sections_rendered, 5);

    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(index.contains("data-capability=\"ux\""));
    let work = fs::read_to_string(out.path().join("work/atlas.html")).unwrap();
    assert!(work.contains("data-case-study=\"atlas\""));
    assert!(out.path().join("css/site.css").exists());
    assert!(out.path().join("data/case-studies/atlas.json").exists());

    // Source pages untouched
    assert_eq!(fs::read_to_string(site.path().join("index.html")).unwrap(), INDEX);
}
