//! Full experience timeline (resume page)

use crate::loader::ExperienceEntry;
use crate::render::{escape_attr, slugify};

pub const MOUNT: &str = ".experience-timeline";

pub fn render(experience: &[ExperienceEntry]) -> Option<String> {
    if experience.is_empty() {
        return None;
    }

    let html = experience
        .iter()
        .map(|entry| {
            let highlights: String = entry
                .highlights
                .iter()
                .map(|h| format!("<li>{}</li>", h))
                .collect();
            let highlights = if highlights.is_empty() {
                String::new()
            } else {
                format!("<ul class=\"timeline-highlights\">{}</ul>", highlights)
            };

            format!(
                r#"
    <div class="timeline-item{}" data-experience="{}">
        <span class="timeline-dates">{}</span>
        <div class="timeline-content">
            <h3>{}</h3>
            <span class="timeline-role">{}</span>
            <p>{}</p>
            {}
        </div>
    </div>
"#,
                if entry.featured { " featured" } else { "" },
                escape_attr(&slugify(&entry.company)),
                entry.dates,
                entry.company,
                entry.title,
                entry.description,
                highlights
            )
        })
        .collect();
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_with_full_description() {
        let long = "detail ".repeat(60);
        let experience = vec![
            ExperienceEntry {
                company: "Acme".into(),
                description: long.clone(),
                highlights: vec!["Led redesign".into()],
                featured: true,
                ..Default::default()
            },
            ExperienceEntry { company: "Beta Labs".into(), ..Default::default() },
        ];

        let html = render(&experience).unwrap();
        assert_eq!(html.matches("class=\"timeline-item").count(), 2);
        assert!(html.contains("timeline-item featured\" data-experience=\"acme\""));
        assert!(html.contains("data-experience=\"beta-labs\""));
        assert!(html.contains(&long));
        assert_eq!(html.matches("timeline-highlights").count(), 1);
    }
}
