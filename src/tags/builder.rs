//! Index building
//!
//! Scans documents line by line, excluding example-block bodies, and
//! emits tag entries in left-to-right, top-to-bottom order. Duplicate
//! anchors are recorded as-is; the index does not enforce uniqueness.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

use crate::core::example::ExampleTracker;
use crate::core::file_reader::{expand_inputs, read_document};
use crate::core::scanner::AnchorScanner;
use crate::tags::format::{self, TagEntry, TagsFormat};

/// Scan one document's content. `file` is the label recorded in each
/// entry, normally the path as given on the command line.
pub fn scan_content(content: &str, file: &str) -> Vec<TagEntry> {
    let mut tracker = ExampleTracker::new();
    let mut entries = Vec::new();

    for line in content.lines() {
        let disp = tracker.advance(line);
        if disp.literal {
            continue;
        }
        for span in AnchorScanner::new(disp.content) {
            entries.push(TagEntry::new(span.name, file));
        }
    }

    entries
}

/// Handler for the `tags` command: index every document and write the
/// result to stdout. Unreadable documents are reported to stderr and
/// skipped; the partial index is still emitted.
pub fn run_tags(files: &[PathBuf], format: TagsFormat, verbose: bool) -> Result<()> {
    let mut entries = Vec::new();

    for path in expand_inputs(files) {
        if verbose {
            eprintln!("indexing {}", path.display());
        }
        match read_document(&path) {
            Ok(content) => {
                entries.extend(scan_content(&content, &path.display().to_string()));
            }
            Err(_) => {
                eprintln!("Unable to open {} for reading", path.display());
            }
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        TagsFormat::Text => format::write_text(&mut out, &entries)?,
        TagsFormat::Jsonl => format::write_jsonl(&mut out, &entries)?,
    }
    out.flush()?;

    Ok(())
}
