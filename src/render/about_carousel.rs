//! About-page carousel cards

use crate::loader::AboutCard;
use crate::render::escape_attr;

pub const MOUNT: &str = ".about-carousel-track";

pub fn render(cards: &[AboutCard]) -> Option<String> {
    if cards.is_empty() {
        return None;
    }

    let html = cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let image = card
                .image
                .as_ref()
                .map(|src| {
                    format!(
                        "<img class=\"about-card-image\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                        escape_attr(src),
                        escape_attr(&card.title)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"
    <article class="about-card" data-card="{}" data-index="{}">
        {}
        <h3>{}</h3>
        <p>{}</p>
    </article>
"#,
                escape_attr(&card.id),
                index,
                image,
                card.title,
                card.description
            )
        })
        .collect();
    Some(html)
}
