//! Example-block state machine
//!
//! Literal example blocks hold preformatted text (shell transcripts,
//! code). A block is opened by a line that is exactly `>` or ends with
//! ` >`, and closed by the next flush-left line. The marker line and the
//! terminator line are ordinary content; only the lines strictly between
//! them are block body.

/// Tracker state. `Armed` covers the marker line itself: the block body
/// starts on the following line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExampleState {
    #[default]
    Normal,
    Armed,
    Active,
}

/// What the tracker decided for one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDisposition<'a> {
    /// Line content with the block-open marker or leading `<` escape
    /// stripped.
    pub content: &'a str,

    /// The line is example body: escaped and highlighted as plain text,
    /// never tokenized, and excluded from the index.
    pub literal: bool,
}

/// Per-document state machine; a fresh tracker is created for every
/// document and never shared.
#[derive(Debug, Default)]
pub struct ExampleTracker {
    state: ExampleState,
}

impl ExampleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn state(&self) -> ExampleState {
        self.state
    }

    /// Advance over one line (without its trailing newline) and return its
    /// disposition. The marker check runs on the pre-trim line; a line
    /// ending with the marker always re-arms, even inside an open block.
    pub fn advance<'a>(&mut self, line: &'a str) -> LineDisposition<'a> {
        let mut content = line;

        if line == ">" {
            content = "";
            self.state = ExampleState::Armed;
        } else if line.ends_with(" >") {
            content = &line[..line.len() - 2];
            self.state = ExampleState::Armed;
        } else if self.state != ExampleState::Normal && starts_flush(line) {
            self.state = ExampleState::Normal;
            if let Some(rest) = line.strip_prefix('<') {
                content = rest;
            }
        }

        // The body decision reads the state before Armed promotes: the
        // marker line itself is ordinary content.
        let literal = self.state == ExampleState::Active;
        if self.state == ExampleState::Armed {
            self.state = ExampleState::Active;
        }

        LineDisposition { content, literal }
    }
}

/// Non-empty with a non-whitespace first character.
fn starts_flush(line: &str) -> bool {
    line.chars().next().is_some_and(|c| !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispositions<'a>(lines: &[&'a str]) -> Vec<LineDisposition<'a>> {
        let mut tracker = ExampleTracker::new();
        lines.iter().map(|l| tracker.advance(l)).collect()
    }

    #[test]
    fn test_basic_block_toggling() {
        let d = dispositions(&[
            "Example: >",
            "  inside one",
            "  inside two",
            "After the block",
        ]);
        assert_eq!(d[0].content, "Example:");
        assert!(!d[0].literal);
        assert!(d[1].literal);
        assert!(d[2].literal);
        assert!(!d[3].literal);
        assert_eq!(d[3].content, "After the block");
    }

    #[test]
    fn test_bare_marker_line() {
        let d = dispositions(&[">", "  body"]);
        assert_eq!(d[0].content, "");
        assert!(!d[0].literal);
        assert!(d[1].literal);
    }

    #[test]
    fn test_blank_lines_stay_inside_block() {
        let d = dispositions(&["x >", "  a", "", "  b", "end"]);
        assert!(d[1].literal);
        assert!(d[2].literal);
        assert!(d[3].literal);
        assert!(!d[4].literal);
    }

    #[test]
    fn test_leading_angle_escape_stripped() {
        let d = dispositions(&["x >", "  a", "<not a marker"]);
        assert!(!d[2].literal);
        assert_eq!(d[2].content, "not a marker");
    }

    #[test]
    fn test_angle_escape_only_applies_when_closing_a_block() {
        let d = dispositions(&["<plain line"]);
        assert_eq!(d[0].content, "<plain line");
        assert!(!d[0].literal);
    }

    #[test]
    fn test_marker_immediately_followed_by_flush_line() {
        // a flush-left line right after the marker closes the block
        // before any body existed
        let d = dispositions(&["x >", "flush", "  indented"]);
        assert!(!d[1].literal);
        assert!(!d[2].literal);
    }

    #[test]
    fn test_marker_inside_active_block_rearms() {
        // the marker-bearing line is ordinary content and the block
        // continues on the following line
        let d = dispositions(&["x >", "  a", "  more >", "  b", "end"]);
        assert!(d[1].literal);
        assert!(!d[2].literal);
        assert_eq!(d[2].content, "  more");
        assert!(d[3].literal);
        assert!(!d[4].literal);
    }

    #[test]
    fn test_marker_check_is_pre_trim() {
        // trailing whitespace after '>' defeats the marker
        let d = dispositions(&["x > ", "  a"]);
        assert!(!d[0].literal);
        assert_eq!(d[0].content, "x > ");
        assert!(!d[1].literal);
    }

    #[test]
    fn test_state_resets_per_tracker() {
        let mut tracker = ExampleTracker::new();
        tracker.advance("x >");
        assert_eq!(tracker.state(), ExampleState::Active);
        let fresh = ExampleTracker::new();
        assert_eq!(fresh.state(), ExampleState::Normal);
    }
}
