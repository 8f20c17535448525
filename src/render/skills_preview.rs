//! Skills preview pills (landing page)
//!
//! Categories contribute their flat skill list first, then their level map
//! (label gets ` · <level>`). Labels are deduplicated keeping the first
//! occurrence, and only the first 18 survive.

use rustc_hash::FxHashSet;

use crate::loader::SkillCategory;
use crate::render::{escape_attr, slugify};

pub const MOUNT: &str = ".skills-pill-group";

pub const MAX_PILLS: usize = 18;

/// One candidate pill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillPill {
    pub id: String,
    pub label: String,
}

/// Flatten, dedupe by label and cap
pub fn collect_pills(categories: &[SkillCategory]) -> Vec<SkillPill> {
    let mut candidates = Vec::new();

    for category in categories {
        let title_slug = slugify(&category.title);
        for skill in &category.skills {
            candidates.push(SkillPill {
                id: format!("{}-{}", title_slug, slugify(skill)),
                label: skill.clone(),
            });
        }

        for (level, skills) in category.levels() {
            for skill in skills {
                candidates.push(SkillPill {
                    id: format!("{}-{}", level.to_lowercase(), slugify(&skill)),
                    label: format!("{} · {}", skill, level),
                });
            }
        }
    }

    let mut seen = FxHashSet::default();
    candidates
        .into_iter()
        .filter(|pill| seen.insert(pill.label.clone()))
        .take(MAX_PILLS)
        .collect()
}

pub fn render(categories: &[SkillCategory]) -> Option<String> {
    if categories.is_empty() {
        return None;
    }

    let html = collect_pills(categories)
        .iter()
        .map(|pill| {
            format!(
                "\n    <span class=\"skill-pill\" data-skill-id=\"{}\">{}</span>\n",
                escape_attr(&pill.id),
                pill.label
            )
        })
        .collect();
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category(value: serde_json::Value) -> SkillCategory {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_duplicate_label_kept_once_in_first_position() {
        let categories = vec![
            category(json!({"title": "Design Tools", "skills": ["Figma", "Sketch"]})),
            category(json!({"title": "Prototyping", "skills": ["Framer", "Figma"]})),
        ];

        let pills = collect_pills(&categories);
        let labels: Vec<&str> = pills.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Figma", "Sketch", "Framer"]);
        assert_eq!(pills[0].id, "design-tools-figma");

        let html = render(&categories).unwrap();
        assert_eq!(html.matches(">Figma<").count(), 1);
    }

    #[test]
    fn test_level_labels_and_ids() {
        let categories = vec![category(json!({
            "title": "Research",
            "skills": ["Interviews"],
            "skillLevels": {"Expert": ["Usability Testing"], "Proficient": ["Surveys"]}
        }))];

        let pills = collect_pills(&categories);
        assert_eq!(
            pills,
            vec![
                SkillPill { id: "research-interviews".into(), label: "Interviews".into() },
                SkillPill {
                    id: "expert-usability-testing".into(),
                    label: "Usability Testing · Expert".into(),
                },
                SkillPill {
                    id: "proficient-surveys".into(),
                    label: "Surveys · Proficient".into(),
                },
            ]
        );
    }

    #[test]
    fn test_capped_at_eighteen() {
        let skills: Vec<String> = (0..30).map(|i| format!("Skill {}", i)).collect();
        let categories = vec![category(json!({"title": "Many", "skills": skills}))];

        let pills = collect_pills(&categories);
        assert_eq!(pills.len(), MAX_PILLS);
        assert_eq!(pills[17].label, "Skill 17");
        assert_eq!(render(&categories).unwrap().matches("skill-pill").count(), MAX_PILLS);
    }

    #[test]
    fn test_no_categories() {
        assert!(render(&[]).is_none());
    }
}
