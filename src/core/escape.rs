//! HTML and URL-fragment escaping
//!
//! Shared by inline highlighting, anchor rendering, and link resolution.

/// Escape `&`, `<`, `>` for HTML text content.
///
/// This is the only place escaping happens; downstream substitutions
/// insert markup into already-escaped text and must not be escaped again.
pub fn esc_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an anchor name for use as a URL fragment.
///
/// `=` maps to `%20`, not its own percent-form; links generated for years
/// carry that mapping, so changing it would orphan them.
pub fn esc_url(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '"' => out.push_str("%22"),
            '~' => out.push_str("%7E"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '=' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '/' => out.push_str("%2F"),
            _ => out.push(c),
        }
    }
    out
}
