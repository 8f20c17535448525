//! Case study body (project pages)

use crate::loader::CaseStudy;
use crate::render::escape_attr;

pub const MOUNT: &str = ".case-study-content";

pub fn render(study: Option<&CaseStudy>) -> Option<String> {
    let study = study?;

    let sections: String = study
        .sections
        .iter()
        .map(|section| {
            let images: String = section
                .images
                .iter()
                .map(|src| {
                    format!(
                        "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                        escape_attr(src),
                        escape_attr(&section.heading)
                    )
                })
                .collect();
            let images = if images.is_empty() {
                images
            } else {
                format!("<div class=\"case-study-images\">{}</div>", images)
            };
            format!(
                r#"
        <section class="case-study-section">
            <h2>{}</h2>
            <p>{}</p>
            {}
        </section>"#,
                section.heading, section.body, images
            )
        })
        .collect();

    Some(format!(
        r#"
    <article class="case-study" data-case-study="{}">
        <header class="case-study-header">
            <h1>{}</h1>
            <p class="case-study-subtitle">{}</p>
        </header>
        <p class="case-study-summary">{}</p>{}
    </article>
"#,
        escape_attr(&study.id),
        study.title,
        study.subtitle,
        study.summary,
        sections
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CaseStudySection;

    #[test]
    fn test_empty_slot() {
        assert!(render(None).is_none());
    }

    #[test]
    fn test_sections_rendered_in_order() {
        let study = CaseStudy {
            id: "atlas".into(),
            title: "Atlas".into(),
            sections: vec![
                CaseStudySection {
                    heading: "Problem".into(),
                    body: "Too slow".into(),
                    images: vec![],
                },
                CaseStudySection {
                    heading: "Outcome".into(),
                    body: "Faster".into(),
                    images: vec!["img/after.png".into()],
                },
            ],
            ..Default::default()
        };

        let html = render(Some(&study)).unwrap();
        assert!(html.contains("data-case-study=\"atlas\""));
        assert!(html.find("<h2>Problem</h2>") < html.find("<h2>Outcome</h2>"));
        assert_eq!(html.matches("case-study-images").count(), 1);
    }
}
