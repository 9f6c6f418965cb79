//! Inline highlighting
//!
//! Fixed substitution cascade applied to plain-text runs. Baseline HTML
//! escaping runs first; every later rule operates on the already-escaped
//! text and inserts markup that must not be escaped again.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::escape::esc_text;

/// `CTRL-X` style key combinations.
static KEYSTROKE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CTRL-(\w+)").expect("Invalid KEYSTROKE_RE regex"));

/// Angle-bracket placeholders, matched after escaping: `&lt;...&gt;`.
static ANGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&lt;(.*?)&gt;").expect("Invalid ANGLE_RE regex"));

/// Brace placeholders: `{motion}`, `{}` included.
static BRACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]*)\}").expect("Invalid BRACE_RE regex"));

/// The fixed set of bracketed keyword placeholders; no other bracketed
/// content matches.
static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(range|line|count|offset|cmd|[-+]?num)\]").expect("Invalid KEYWORD_RE regex")
});

/// "Note" / "Note:" markers, any case, anywhere in the text.
static NOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(Note:?)").expect("Invalid NOTE_RE regex"));

/// Render one plain-text run to HTML.
///
/// `section_tail` marks the final plain run of a line whose source text
/// ends with `~`: the trailing `~` is dropped and the remainder becomes a
/// section heading. An empty heading is left untouched.
pub fn highlight(text: &str, section_tail: bool) -> String {
    let mut out = esc_text(text);
    out = KEYSTROKE_RE
        .replace_all(&out, r#"<code class="keystroke">CTRL-$1</code>"#)
        .into_owned();
    out = ANGLE_RE
        .replace_all(&out, r#"<code class="special">&lt;$1&gt;</code>"#)
        .into_owned();
    out = BRACE_RE
        .replace_all(&out, r#"<code class="special">{$1}</code>"#)
        .into_owned();
    out = KEYWORD_RE
        .replace_all(&out, r#"<code class="special">[$1]</code>"#)
        .into_owned();
    out = NOTE_RE
        .replace_all(&out, r#"<code class="note">$1</code>"#)
        .into_owned();
    if section_tail {
        out = apply_section(out);
    }
    out
}

fn apply_section(rendered: String) -> String {
    let trimmed = rendered.trim_end();
    let Some(body) = trimmed.strip_suffix('~') else {
        return rendered;
    };
    let body = body.trim_end();
    if body.trim_start().is_empty() {
        return rendered;
    }
    format!(r#"<code class="section">{}</code>"#, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(highlight("nothing special", false), "nothing special");
    }

    #[test]
    fn test_escaping_happens_once() {
        assert_eq!(highlight("a & b", false), "a &amp; b");
        // already-clean text is untouched
        assert_eq!(highlight("clean", false), "clean");
    }

    #[test]
    fn test_keystroke() {
        assert_eq!(
            highlight("press CTRL-W to switch", false),
            r#"press <code class="keystroke">CTRL-W</code> to switch"#
        );
    }

    #[test]
    fn test_angle_placeholder_after_escaping() {
        assert_eq!(
            highlight("type <Esc> to leave", false),
            r#"type <code class="special">&lt;Esc&gt;</code> to leave"#
        );
    }

    #[test]
    fn test_brace_placeholder() {
        assert_eq!(
            highlight("d{motion}", false),
            r#"d<code class="special">{motion}</code>"#
        );
    }

    #[test]
    fn test_bracket_keywords() {
        for kw in ["range", "line", "count", "offset", "cmd", "num", "+num", "-num"] {
            let rendered = highlight(&format!("[{}]", kw), false);
            assert_eq!(
                rendered,
                format!(r#"<code class="special">[{}]</code>"#, kw)
            );
        }
    }

    #[test]
    fn test_other_brackets_do_not_match() {
        assert_eq!(highlight("[foo]", false), "[foo]");
        assert_eq!(highlight("[ranges]", false), "[ranges]");
    }

    #[test]
    fn test_note_marker_case_insensitive() {
        assert_eq!(
            highlight("NOTE: be careful", false),
            r#"<code class="note">NOTE:</code> be careful"#
        );
        assert_eq!(
            highlight("a note here", false),
            r#"a <code class="note">note</code> here"#
        );
    }

    #[test]
    fn test_section_tail() {
        assert_eq!(
            highlight("Options summary~", true),
            r#"<code class="section">Options summary</code>"#
        );
    }

    #[test]
    fn test_section_tail_strips_one_tilde_only() {
        assert_eq!(
            highlight("heading~~", true),
            r#"<code class="section">heading~</code>"#
        );
    }

    #[test]
    fn test_section_tail_empty_heading_untouched() {
        assert_eq!(highlight("~", true), "~");
        assert_eq!(highlight("   ~", true), "   ~");
    }

    #[test]
    fn test_section_only_on_tail_token() {
        // without the flag a trailing tilde is literal text
        assert_eq!(highlight("not a heading~", false), "not a heading~");
    }

    #[test]
    fn test_combined_rules() {
        let rendered = highlight("Note: CTRL-D scrolls [count] lines", false);
        assert!(rendered.contains(r#"<code class="note">Note:</code>"#));
        assert!(rendered.contains(r#"<code class="keystroke">CTRL-D</code>"#));
        assert!(rendered.contains(r#"<code class="special">[count]</code>"#));
    }
}
