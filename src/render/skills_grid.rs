//! Skills grid (resume page): one block per category, level groups included

use crate::loader::SkillCategory;
use crate::render::{escape_attr, slugify};

pub const MOUNT: &str = ".skills-grid";

pub fn render(categories: &[SkillCategory]) -> Option<String> {
    if categories.is_empty() {
        return None;
    }

    let html = categories
        .iter()
        .map(|category| {
            let skills = pill_list(&category.skills);
            let levels: String = category
                .levels()
                .into_iter()
                .map(|(level, names)| {
                    format!(
                        "<div class=\"skill-level\" data-level=\"{}\"><h4>{}</h4>{}</div>",
                        escape_attr(&level.to_lowercase()),
                        level,
                        pill_list(&names)
                    )
                })
                .collect();

            format!(
                r#"
    <div class="skill-category" data-category="{}">
        <h3>{}</h3>
        {}
        {}
    </div>
"#,
                escape_attr(&slugify(&category.title)),
                category.title,
                skills,
                levels
            )
        })
        .collect();
    Some(html)
}

fn pill_list(skills: &[String]) -> String {
    if skills.is_empty() {
        return String::new();
    }
    let items: String = skills
        .iter()
        .map(|s| format!("<li class=\"skill-pill\">{}</li>", s))
        .collect();
    format!("<ul class=\"skill-list\">{}</ul>", items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_with_levels() {
        let categories: Vec<SkillCategory> = serde_json::from_value(json!([
            {"title": "Design", "skills": ["Figma"]},
            {"title": "Code", "skillLevels": {"Advanced": ["HTML", "CSS"], "Learning": ["Rust"]}}
        ]))
        .unwrap();

        let html = render(&categories).unwrap();
        assert!(html.contains("data-category=\"design\""));
        assert!(html.contains("<li class=\"skill-pill\">Figma</li>"));
        assert!(html.contains("data-level=\"advanced\"><h4>Advanced</h4>"));
        assert_eq!(html.matches("skill-level\"").count(), 2);
        // Unlike the preview, the grid does not deduplicate or cap
        assert_eq!(html.matches("<li").count(), 4);
    }
}
