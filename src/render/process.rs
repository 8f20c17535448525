//! Process steps (landing page)

use crate::loader::ProcessStep;
use crate::render::escape_attr;

pub const MOUNT: &str = ".process-steps";

pub fn render(steps: &[ProcessStep]) -> Option<String> {
    if steps.is_empty() {
        return None;
    }

    let html = steps
        .iter()
        .map(|step| {
            let number = step
                .step
                .as_ref()
                .map(|n| format!("<span class=\"process-step-number\">{}</span>", n))
                .unwrap_or_default();
            let meta = step
                .meta
                .as_ref()
                .map(|m| format!("<span class=\"process-meta\">{}</span>", m))
                .unwrap_or_default();

            format!(
                r#"
    <article class="card process-step" data-process-step="{}">
        {}
        <h3>{}</h3>
        <p>{}</p>
        {}
    </article>
"#,
                escape_attr(&step.id),
                number,
                step.title,
                step.description,
                meta
            )
        })
        .collect();
    Some(html)
}
