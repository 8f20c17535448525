//! Previous / next links on a project page
//!
//! Built from circular adjacency, so the first project links back to the
//! last and vice versa. Project urls are site-relative, so each link is
//! prefixed with the way back to the site root (`../` from `work/`). This
//! keeps links working when the site is hosted below a path prefix.

use crate::loader::{AdjacentProjects, Project};
use crate::render::escape_attr;

pub const MOUNT: &str = ".project-nav";

pub fn render(adjacent: AdjacentProjects<'_>, root_prefix: &str) -> Option<String> {
    let (prev, next) = (adjacent.prev?, adjacent.next?);
    Some(format!(
        r#"
    {}
    {}
"#,
        link("prev", "Previous", prev, root_prefix),
        link("next", "Next", next, root_prefix)
    ))
}

fn link(direction: &str, caption: &str, project: &Project, root_prefix: &str) -> String {
    format!(
        r#"<a class="project-nav-link project-nav-{}" href="{}{}" data-project="{}">
        <span class="project-nav-label">{}</span>
        <span class="project-nav-title">{}</span>
    </a>"#,
        direction,
        root_prefix,
        escape_attr(project.url.trim_start_matches('/')),
        escape_attr(&project.id),
        caption,
        project.title
    )
}
