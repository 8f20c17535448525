//! Project cards (work index)

use crate::loader::Project;
use crate::render::escape_attr;

pub const MOUNT: &str = ".projects-grid";

pub fn render(projects: &[Project]) -> Option<String> {
    if projects.is_empty() {
        return None;
    }

    let html = projects
        .iter()
        .map(|project| {
            let thumbnail = project
                .thumbnail
                .as_ref()
                .map(|src| {
                    format!(
                        "<img class=\"project-thumbnail\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                        escape_attr(src),
                        escape_attr(&project.title)
                    )
                })
                .unwrap_or_default();
            let meta = match &project.year {
                Some(year) => format!("{} · {}", project.category, year),
                None => project.category.clone(),
            };

            format!(
                r#"
    <a class="project-card hover-lift" href="{}" data-project="{}">
        {}
        <div class="project-card-body">
            <span class="project-meta">{}</span>
            <h3>{}</h3>
            <p>{}</p>
        </div>
    </a>
"#,
                escape_attr(&project.url),
                escape_attr(&project.id),
                thumbnail,
                meta,
                project.title,
                project.subtitle
            )
        })
        .collect();
    Some(html)
}
