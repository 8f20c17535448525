//! Text helpers shared by the section renderers

/// Default cut-off for `truncate_text` callers without their own limit
pub const DEFAULT_TRUNCATE_LIMIT: usize = 180;

pub const ELLIPSIS: char = '…';

/// Shorten `text` to at most `limit` chars plus an ellipsis.
///
/// Text at or under the limit comes back unchanged. Otherwise the first
/// `limit` chars are kept, trimmed back to the last space among them (a hard
/// cut when there is none), and `…` is appended.
pub fn truncate_text(text: &str, limit: usize) -> String {
    let Some((cut_end, _)) = text.char_indices().nth(limit) else {
        return text.to_string();
    };

    let cut = &text[..cut_end];
    let kept = match cut.rfind(' ') {
        Some(space) => &cut[..space],
        None => cut,
    };
    format!("{}{}", kept, ELLIPSIS)
}

/// Lowercase, with every whitespace run collapsed into a single `-`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
