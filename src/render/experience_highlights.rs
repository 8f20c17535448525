//! Experience highlights (landing page)
//!
//! Featured entries only, first three in source order, descriptions cut to
//! 240 chars at a word boundary.

use crate::loader::ExperienceEntry;
use crate::render::{escape_attr, slugify, truncate_text};

pub const MOUNT: &str = ".experience-grid";

pub const MAX_HIGHLIGHTS: usize = 3;
pub const DESCRIPTION_LIMIT: usize = 240;

pub fn render(experience: &[ExperienceEntry]) -> Option<String> {
    let featured: Vec<&ExperienceEntry> = experience
        .iter()
        .filter(|entry| entry.featured)
        .take(MAX_HIGHLIGHTS)
        .collect();
    if featured.is_empty() {
        return None;
    }

    Some(featured.into_iter().map(card).collect())
}

fn card(entry: &ExperienceEntry) -> String {
    let dates = optional(&entry.dates, |d| {
        format!("<span class=\"experience-dates\">{}</span>", d)
    });
    let role = optional(&entry.title, |t| format!("<span class=\"experience-role\">{}</span>", t));
    let description = optional(&entry.description, |d| {
        format!("<p>{}</p>", truncate_text(d, DESCRIPTION_LIMIT))
    });

    format!(
        r#"
    <article class="card experience-card hover-lift" data-experience="{}">
        {}
        <h3>{}</h3>
        {}
        {}
    </article>
"#,
        escape_attr(&slugify(&entry.company)),
        dates,
        entry.company,
        role,
        description
    )
}

fn optional(value: &str, wrap: impl Fn(&str) -> String) -> String {
    if value.is_empty() {
        String::new()
    } else {
        wrap(value)
    }
}
