//! Tags-file format
//!
//! One entry per line, tab-separated: `<anchor>\t<file>\t<locator>`.
//! The locator is an ex-style search pattern that re-locates the
//! definition: `/*` + the anchor with `\` doubled and `/` escaped + `*`.
//! Readers skip blank lines and `!` comment lines, and accept any
//! whitespace between fields.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// First line of every tags file, naming the index itself.
pub const TAGS_HEADER: &str = "help-tags\ttags\t1";

/// Output format for the tags command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagsFormat {
    /// Tab-separated text, the persisted format
    #[default]
    Text,
    /// One JSON object per entry
    Jsonl,
}

impl FromStr for TagsFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tags" | "text" => Ok(TagsFormat::Text),
            "jsonl" => Ok(TagsFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// One index entry, immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    /// Anchor name as written between the delimiters
    pub anchor: String,

    /// Defining file, as given on the command line
    pub file: String,

    /// Search pattern locating the definition in `file`
    pub locator: String,
}

impl TagEntry {
    pub fn new(anchor: impl Into<String>, file: impl Into<String>) -> Self {
        let anchor = anchor.into();
        let locator = locator_for(&anchor);
        Self {
            anchor,
            file: file.into(),
            locator,
        }
    }
}

impl fmt::Display for TagEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.anchor, self.file, self.locator)
    }
}

/// Search-pattern locator for an anchor: backslashes doubled, forward
/// slashes escaped, the whole wrapped in `/*...*`.
pub fn locator_for(anchor: &str) -> String {
    let mut escaped = String::with_capacity(anchor.len());
    for c in anchor.chars() {
        match c {
            '\\' => escaped.push_str(r"\\"),
            '/' => escaped.push_str(r"\/"),
            _ => escaped.push(c),
        }
    }
    format!("/*{}*", escaped)
}

/// Write entries as tab-separated text, header first.
pub fn write_text<W: Write>(mut w: W, entries: &[TagEntry]) -> Result<()> {
    writeln!(w, "{}", TAGS_HEADER)?;
    for entry in entries {
        writeln!(w, "{}", entry)?;
    }
    Ok(())
}

/// Write entries as JSON Lines (one object per line, no header).
pub fn write_jsonl<W: Write>(mut w: W, entries: &[TagEntry]) -> Result<()> {
    for entry in entries {
        let json = serde_json::to_string(entry)?;
        writeln!(w, "{}", json)?;
    }
    Ok(())
}

/// A record loaded back from a tags file; the locator column is not
/// needed for link resolution and is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub anchor: String,
    pub file: String,
}

/// Reading the tags file failed; fatal on the rendering path.
#[derive(Debug, Error)]
#[error("unable to read tags file {path}")]
pub struct TagFileError {
    pub path: String,
    #[source]
    pub source: std::io::Error,
}

/// Load the records of a tags file in order, skipping blank lines and
/// lines beginning with `!`.
pub fn read_tag_records(path: &Path) -> Result<Vec<TagRecord>, TagFileError> {
    let content = fs::read(path).map_err(|source| TagFileError {
        path: path.display().to_string(),
        source,
    })?;
    let content = String::from_utf8_lossy(&content);
    Ok(parse_tag_records(&content))
}

/// Parse tags-file text into records. Tolerant by design: malformed
/// lines (fewer than two fields) are skipped, not errors.
pub fn parse_tag_records(content: &str) -> Vec<TagRecord> {
    let mut records = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() || line.starts_with('!') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(anchor), Some(file)) = (fields.next(), fields.next()) else {
            continue;
        };
        records.push(TagRecord {
            anchor: anchor.to_string(),
            file: file.to_string(),
        });
    }
    records
}
