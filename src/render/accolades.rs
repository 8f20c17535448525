//! Awards and press features (resume page)

use crate::loader::{Accolades, Award, Feature};
use crate::render::{escape_attr, slugify};

pub const MOUNT: &str = ".accolades-list";

pub fn render(accolades: &Accolades) -> Option<String> {
    if accolades.is_empty() {
        return None;
    }

    let mut html = String::new();
    if !accolades.awards.is_empty() {
        html.push_str("\n    <div class=\"accolades-group\"><h3>Awards</h3><ul>");
        html.extend(accolades.awards.iter().map(award));
        html.push_str("</ul></div>\n");
    }
    if !accolades.features.is_empty() {
        html.push_str("\n    <div class=\"accolades-group\"><h3>Features</h3><ul>");
        html.extend(accolades.features.iter().map(feature));
        html.push_str("</ul></div>\n");
    }
    Some(html)
}

fn titled(title: &str, url: Option<&String>) -> String {
    match url {
        Some(url) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape_attr(url),
            title
        ),
        None => title.to_string(),
    }
}

fn year_suffix(year: Option<&String>) -> String {
    year.map(|y| format!(" <span class=\"accolade-year\">{}</span>", y))
        .unwrap_or_default()
}

fn award(award: &Award) -> String {
    format!(
        "<li class=\"accolade award\" data-award=\"{}\">\
         <strong>{}</strong> <span class=\"accolade-source\">{}</span>{}</li>",
        escape_attr(&slugify(&award.title)),
        titled(&award.title, award.url.as_ref()),
        award.issuer,
        year_suffix(award.year.as_ref())
    )
}

fn feature(feature: &Feature) -> String {
    format!(
        "<li class=\"accolade feature\" data-feature=\"{}\">\
         <strong>{}</strong> <span class=\"accolade-source\">{}</span>{}</li>",
        escape_attr(&slugify(&feature.title)),
        titled(&feature.title, feature.url.as_ref()),
        feature.publication,
        year_suffix(feature.year.as_ref())
    )
}
