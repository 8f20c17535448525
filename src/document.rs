//! Document seam
//!
//! The only DOM surface renderers touch: check for a mount point, replace its
//! contents wholesale, and scroll to an anchor. `HtmlDocument` implements it
//! over a parsed page; tests use their own recording implementations.

use scraper::{Html, Selector};
use tracing::{debug, warn};

pub trait Document {
    /// True when at least one element matches `selector`
    fn has_mount(&self, selector: &str) -> bool;

    /// Replace the children of the first element matching `selector`.
    /// Returns false (and changes nothing) when there is no such element.
    fn set_inner_html(&mut self, selector: &str, html: &str) -> bool;

    /// Bring the first element matching `selector` into view
    fn scroll_into_view(&mut self, selector: &str) -> bool {
        self.has_mount(selector)
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!(selector, "Unparseable selector: {:?}", e);
            None
        }
    }
}

/// A full HTML page held as its serialized form
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: String,
    scroll_target: Option<String>,
    mutations: usize,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source).html(),
            scroll_target: None,
            mutations: 0,
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Selector last scrolled to, if the target existed
    pub fn scroll_target(&self) -> Option<&str> {
        self.scroll_target.as_deref()
    }

    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    /// Inner HTML of the first match, as currently serialized
    pub fn inner_html(&self, selector: &str) -> Option<String> {
        let selector = parse_selector(selector)?;
        let parsed = Html::parse_document(&self.html);
        let inner = parsed.select(&selector).next().map(|el| el.inner_html());
        inner
    }

    /// Count of elements matching `selector`
    pub fn count(&self, selector: &str) -> usize {
        let Some(selector) = parse_selector(selector) else {
            return 0;
        };
        let parsed = Html::parse_document(&self.html);
        let count = parsed.select(&selector).count();
        count
    }
}

impl Document for HtmlDocument {
    fn has_mount(&self, selector: &str) -> bool {
        self.count(selector) > 0
    }

    fn set_inner_html(&mut self, selector: &str, html: &str) -> bool {
        let Some(parsed_selector) = parse_selector(selector) else {
            return false;
        };
        let mut parsed = Html::parse_document(&self.html);
        let Some(mount_id) = parsed.select(&parsed_selector).next().map(|el| el.id()) else {
            return false;
        };

        {
            let Some(mut mount) = parsed.tree.get_mut(mount_id) else {
                warn!(selector, "Mount vanished from the parsed page; leaving it untouched");
                return false;
            };
            while let Some(mut child) = mount.first_child() {
                child.detach();
            }
        }

        // Copy the fragment's nodes under the mount, parents before children
        let fragment = Html::parse_fragment(html);
        let mut pending = vec![(mount_id, fragment.root_element().id())];
        while let Some((target, source)) = pending.pop() {
            let Some(source) = fragment.tree.get(source) else {
                continue;
            };
            for child in source.children() {
                if let Some(mut parent) = parsed.tree.get_mut(target) {
                    let copied = parent.append(child.value().clone()).id();
                    pending.push((copied, child.id()));
                }
            }
        }

        self.html = parsed.html();
        self.mutations += 1;
        true
    }

    fn scroll_into_view(&mut self, selector: &str) -> bool {
        if self.has_mount(selector) {
            self.scroll_target = Some(selector.to_string());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Home</title></head>
<body>
  <section id="work"><div class="projects-grid"><p class="fallback">Loading</p></div></section>
  <div class="skills-pill-group"></div>
</body></html>"#;

    #[test]
    fn test_has_mount() {
        let doc = HtmlDocument::parse(PAGE);
        assert!(doc.has_mount(".projects-grid"));
        assert!(doc.has_mount("#work"));
        assert!(!doc.has_mount(".testimonials-grid"));
        assert!(!doc.has_mount("[[nonsense"));
    }

    #[test]
    fn test_set_inner_html_replaces_children() {
        let mut doc = HtmlDocument::parse(PAGE);
        assert!(doc.set_inner_html(".projects-grid", "<article data-project=\"a\">A</article>"));

        assert_eq!(doc.count(".fallback"), 0);
        assert_eq!(doc.count("[data-project=\"a\"]"), 1);
        assert_eq!(
            doc.inner_html(".projects-grid").as_deref(),
            Some("<article data-project=\"a\">A</article>")
        );
        assert!(doc.html().contains("<title>Home</title>"));
        assert_eq!(doc.mutation_count(), 1);
    }

    #[test]
    fn test_set_inner_html_on_empty_mount() {
        let mut doc = HtmlDocument::parse(PAGE);
        assert!(doc.set_inner_html(
            ".skills-pill-group",
            "<span class=\"skill-pill\">Figma</span>"
        ));
        assert_eq!(doc.count(".skill-pill"), 1);
    }

    #[test]
    fn test_set_inner_html_skips_commented_copy_of_mount() {
        let mut doc = HtmlDocument::parse(
            "<body><!-- <div class=\"skills-pill-group\"></div> -->\
             <div class=\"skills-pill-group\"></div></body>",
        );
        let pill = "<span class=\"skill-pill\">Figma</span>";
        assert!(doc.set_inner_html(".skills-pill-group", pill));

        assert_eq!(doc.count(".skills-pill-group .skill-pill"), 1);
        assert!(doc.html().contains("<!-- <div class=\"skills-pill-group\"></div> -->"));
    }

    #[test]
    fn test_set_inner_html_keeps_nested_fragment_structure() {
        let mut doc = HtmlDocument::parse(PAGE);
        let fragment = "<article data-project=\"a\"><h3>A</h3><ul><li>x</li><li>y</li></ul>\
                        </article><article data-project=\"b\"></article>";
        assert!(doc.set_inner_html(".projects-grid", fragment));

        assert_eq!(doc.count(".projects-grid > article"), 2);
        assert_eq!(doc.count("[data-project=\"a\"] ul > li"), 2);
        assert_eq!(doc.inner_html(".projects-grid").as_deref(), Some(fragment));
    }

    #[test]
    fn test_missing_mount_is_untouched() {
        let mut doc = HtmlDocument::parse(PAGE);
        let before = doc.html().to_string();
        assert!(!doc.set_inner_html(".capabilities-grid", "<p>x</p>"));
        assert_eq!(doc.html(), before);
        assert_eq!(doc.mutation_count(), 0);
    }

    #[test]
    fn test_scroll_into_view_records_target() {
        let mut doc = HtmlDocument::parse(PAGE);
        assert!(!doc.scroll_into_view("#missing"));
        assert_eq!(doc.scroll_target(), None);
        assert!(doc.scroll_into_view("#work"));
        assert_eq!(doc.scroll_target(), Some("#work"));
    }
}
