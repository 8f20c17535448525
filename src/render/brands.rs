//! Brand logo strip

use crate::loader::Brand;
use crate::render::{escape_attr, slugify};

pub const MOUNT: &str = ".brands-track";

pub fn render(brands: &[Brand]) -> Option<String> {
    if brands.is_empty() {
        return None;
    }

    let html = brands
        .iter()
        .map(|brand| {
            let logo = format!(
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                escape_attr(&brand.logo),
                escape_attr(&brand.name)
            );
            let inner = match &brand.url {
                Some(url) => format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                    escape_attr(url),
                    logo
                ),
                None => logo,
            };
            format!(
                "\n    <div class=\"brand-logo\" data-brand=\"{}\">{}</div>\n",
                escape_attr(&slugify(&brand.name)),
                inner
            )
        })
        .collect();
    Some(html)
}
