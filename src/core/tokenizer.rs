//! Line tokenizer
//!
//! Splits one line of help text into an ordered token sequence covering
//! the whole line: plain runs, `*tag*` anchor definitions, and `|name|`
//! cross-reference tokens. Concatenating the tokens' source text in order
//! reconstructs the line exactly.

use crate::core::scanner::{AnchorScanner, AnchorSpan};

/// One token of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of ordinary text, including any leading indentation.
    Plain(&'a str),
    /// An anchor definition; the name, without delimiters.
    AnchorDef(&'a str),
    /// A cross-reference; the name, without delimiters.
    Reference(&'a str),
}

/// Tokenize one line.
///
/// A reference token wins at its starting offset. Anchor definitions use
/// the scanner's boundary validation; reference names deliberately skip
/// it, and may even contain spaces (existing documents rely on the loose
/// match, and an unknown name just renders as a bad link).
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let anchors: Vec<AnchorSpan> = AnchorScanner::new(line).collect();
    let bytes = line.as_bytes();

    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    let mut next_anchor = 0;

    while pos < bytes.len() {
        // anchors overtaken by a consumed reference are dropped
        while next_anchor < anchors.len() && anchors[next_anchor].start < pos {
            next_anchor += 1;
        }

        if bytes[pos] == b'|' {
            if let Some(close) = find_byte(bytes, b'|', pos + 1) {
                if close > pos + 1 {
                    push_plain(&mut tokens, line, plain_start, pos);
                    tokens.push(Token::Reference(&line[pos + 1..close]));
                    pos = close + 1;
                    plain_start = pos;
                    continue;
                }
            }
        }

        if next_anchor < anchors.len() && anchors[next_anchor].start == pos {
            let span = anchors[next_anchor];
            push_plain(&mut tokens, line, plain_start, pos);
            tokens.push(Token::AnchorDef(span.name));
            pos = span.end;
            plain_start = pos;
            next_anchor += 1;
            continue;
        }

        pos += 1;
    }

    push_plain(&mut tokens, line, plain_start, bytes.len());
    tokens
}

fn push_plain<'a>(tokens: &mut Vec<Token<'a>>, line: &'a str, start: usize, end: usize) {
    if end > start {
        tokens.push(Token::Plain(&line[start..end]));
    }
}

fn find_byte(bytes: &[u8], target: u8, from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == target)
        .map(|i| i + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_text(token: &Token) -> String {
        match token {
            Token::Plain(t) => (*t).to_string(),
            Token::AnchorDef(n) => format!("*{}*", n),
            Token::Reference(n) => format!("|{}|", n),
        }
    }

    fn assert_covers(line: &str) {
        let rebuilt: String = tokenize(line).iter().map(source_text).collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_plain_only() {
        assert_eq!(tokenize("just text"), vec![Token::Plain("just text")]);
    }

    #[test]
    fn test_anchor_and_reference() {
        let tokens = tokenize("*def* see |ref|");
        assert_eq!(
            tokens,
            vec![
                Token::AnchorDef("def"),
                Token::Plain(" see "),
                Token::Reference("ref"),
            ]
        );
    }

    #[test]
    fn test_tokens_cover_line_without_gaps() {
        for line in [
            "  indented *a* then |b| end",
            "|x||y|",
            "*a*",
            "no markup at all",
            "bad *a b* candidates ** here",
            "说明 *intro* 结束 |链接|",
        ] {
            assert_covers(line);
        }
    }

    #[test]
    fn test_reference_wins_at_same_offset() {
        // the '|' opens a reference that swallows the would-be anchor
        let tokens = tokenize("| *a* |");
        assert_eq!(tokens, vec![Token::Reference(" *a* ")]);
    }

    #[test]
    fn test_reference_allows_spaces() {
        let tokens = tokenize("see |two words|");
        assert_eq!(
            tokens,
            vec![Token::Plain("see "), Token::Reference("two words")]
        );
    }

    #[test]
    fn test_empty_reference_is_plain() {
        assert_eq!(tokenize("||"), vec![Token::Plain("||")]);
    }

    #[test]
    fn test_adjacent_bars_then_real_reference() {
        let tokens = tokenize("||x|");
        assert_eq!(tokens, vec![Token::Plain("|"), Token::Reference("x")]);
    }

    #[test]
    fn test_unterminated_bar_is_plain() {
        assert_eq!(tokenize("a | b"), vec![Token::Plain("a | b")]);
    }

    #[test]
    fn test_invalid_anchor_stays_plain() {
        assert_eq!(tokenize("x*tag* rest"), vec![Token::Plain("x*tag* rest")]);
    }

    #[test]
    fn test_anchor_after_reference_boundary() {
        // '|' before the '*' breaks the anchor's whitespace boundary
        let tokens = tokenize("|r|*tag*");
        assert_eq!(tokens, vec![Token::Reference("r"), Token::Plain("*tag*")]);
    }

    #[test]
    fn test_indentation_preserved_in_first_plain() {
        let tokens = tokenize("    *tag*");
        assert_eq!(tokens, vec![Token::Plain("    "), Token::AnchorDef("tag")]);
    }
}
