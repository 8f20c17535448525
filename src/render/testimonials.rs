//! Testimonials grid (landing page)

use crate::loader::Testimonial;
use crate::render::escape_attr;

pub const MOUNT: &str = ".testimonials-grid";

pub fn render(testimonials: &[Testimonial]) -> Option<String> {
    if testimonials.is_empty() {
        return None;
    }

    let html = testimonials
        .iter()
        .map(|t| {
            let company = t
                .company
                .as_ref()
                .map(|c| format!(" — {}", c))
                .unwrap_or_default();
            format!(
                r#"
    <article class="card testimonial-card hover-lift" data-testimonial="{}">
        <p class="testimonial-quote">“{}”</p>
        <div class="testimonial-footer">
            <span class="testimonial-name">{}</span>
            <span class="testimonial-role">{}{}</span>
        </div>
    </article>
"#,
                escape_attr(&t.id),
                t.quote,
                t.name,
                t.role,
                company
            )
        })
        .collect();
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_with_and_without_company() {
        let testimonials = vec![
            Testimonial {
                id: "t1".to_string(),
                quote: "Sharp and kind.".to_string(),
                name: "Sam".to_string(),
                role: "PM".to_string(),
                company: Some("Acme".to_string()),
            },
            Testimonial {
                id: "t2".to_string(),
                quote: "Great".to_string(),
                name: "Lee".to_string(),
                role: "Engineer".to_string(),
                company: None,
            },
        ];

        let html = render(&testimonials).unwrap();
        assert!(html.contains("data-testimonial=\"t1\""));
        assert!(html.contains("<p class=\"testimonial-quote\">“Sharp and kind.”</p>"));
        assert!(html.contains("<span class=\"testimonial-role\">PM — Acme</span>"));
        assert!(html.contains("<span class=\"testimonial-role\">Engineer</span>"));
    }

    #[test]
    fn test_no_testimonials() {
        assert!(render(&[]).is_none());
    }
}
