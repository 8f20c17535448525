//! Capabilities grid (landing page)

use crate::loader::Capability;
use crate::render::escape_attr;

pub const MOUNT: &str = ".capabilities-grid";

pub fn render(capabilities: &[Capability]) -> Option<String> {
    if capabilities.is_empty() {
        return None;
    }
    Some(capabilities.iter().map(card).collect())
}

fn card(capability: &Capability) -> String {
    let label = capability
        .label
        .as_ref()
        .map(|label| format!("<span class=\"capability-pill\">{}</span>", label))
        .unwrap_or_default();

    let points: String = capability
        .points
        .iter()
        .map(|point| format!("<li>{}</li>", point))
        .collect();
    let points = if points.is_empty() {
        String::new()
    } else {
        format!("<ul class=\"capability-points\">{}</ul>", points)
    };

    format!(
        r#"
    <article class="card capability-card hover-lift" data-capability="{}">
        {}
        <h3>{}</h3>
        <p>{}</p>
        {}
    </article>
"#,
        escape_attr(&capability.id),
        label,
        capability.title,
        capability.description,
        points
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capability(id: &str, label: Option<&str>, points: &[&str]) -> Capability {
        Capability {
            id: id.to_string(),
            label: label.map(str::to_string),
            title: format!("{} title", id),
            description: "Description".to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render(&[]), None);
    }

    #[test]
    fn test_card_with_label_and_points() {
        let research = capability("research", Some("01"), &["Interviews", "Synthesis"]);
        let html = render(&[research]).unwrap();
        assert!(html.contains("data-capability=\"research\""));
        assert!(html.contains("<span class=\"capability-pill\">01</span>"));
        assert!(html.contains("<h3>research title</h3>"));
        assert!(html.contains(
            "<ul class=\"capability-points\"><li>Interviews</li><li>Synthesis</li></ul>"
        ));
    }

    #[test]
    fn test_optional_parts_omitted() {
        let html = render(&[capability("systems", None, &[])]).unwrap();
        assert!(!html.contains("capability-pill"));
        assert!(!html.contains("capability-points"));
    }

    #[test]
    fn test_one_card_per_record_in_order() {
        let html = render(&[capability("a", None, &[]), capability("b", None, &[])]).unwrap();
        assert_eq!(html.matches("<article").count(), 2);
        assert!(html.find("data-capability=\"a\"") < html.find("data-capability=\"b\""));
    }
}
