//! Document rendering
//!
//! Drives the example tracker, tokenizer, highlighter, and link index
//! over one document, line by line, producing the `<pre>` body of its
//! HTML page. Documents are independent: the only shared input is the
//! read-only link index.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::escape::{esc_text, esc_url};
use crate::core::example::ExampleTracker;
use crate::core::file_reader::{expand_inputs, read_document};
use crate::core::highlight::highlight;
use crate::core::tokenizer::{tokenize, Token};
use crate::html::link::LinkIndex;
use crate::html::page;

/// Lines of repeated `-` or `=`, optionally surrounded by whitespace,
/// render as a horizontal separator in any state.
static RULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-=]+\s*$").expect("Invalid RULE_RE regex"));

/// Render one document's body.
pub fn render_body(content: &str, links: &LinkIndex) -> String {
    let mut out = String::new();
    let mut tracker = ExampleTracker::new();
    let mut prev_blank = false;

    for line in content.lines() {
        if RULE_RE.is_match(line) {
            out.push_str("</pre><hr><pre>\n");
            prev_blank = false;
            continue;
        }

        let disp = tracker.advance(line);
        let text = disp.content.trim_end();

        if text.is_empty() {
            if !prev_blank {
                out.push('\n');
                prev_blank = true;
            }
            continue;
        }
        prev_blank = false;

        let section_tail = text.ends_with('~');

        if disp.literal {
            out.push_str(&format!(
                "<code class=\"example\">{}</code>\n",
                highlight(text, section_tail)
            ));
            continue;
        }

        let tokens = tokenize(text);
        let last = tokens.len() - 1;
        for (i, token) in tokens.iter().enumerate() {
            match token {
                Token::Plain(run) => {
                    out.push_str(&highlight(run, section_tail && i == last));
                }
                Token::AnchorDef(name) => {
                    out.push_str(&format!(
                        "<b class=\"tag\">*<a name=\"{}\">{}</a>*</b>",
                        esc_url(name),
                        esc_text(name)
                    ));
                }
                Token::Reference(name) => {
                    out.push('|');
                    out.push_str(&links.resolve(name));
                    out.push('|');
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Convert one document to an HTML file in `out_dir`.
pub fn convert_document(path: &Path, links: &LinkIndex, out_dir: &Path) -> Result<()> {
    let content = read_document(path)?;
    let body = render_body(&content, links);
    let html = page::render_page(&page::base_name(path), &body);

    let out_path = out_dir.join(page::output_name(path));
    fs::write(&out_path, html)
        .with_context(|| format!("couldn't write to {}", out_path.display()))
}

/// Handler for the `html` command. An unreadable tags index is fatal;
/// a document that cannot be read or written is reported and skipped.
pub fn run_html(index: &Path, files: &[PathBuf], out_dir: &Path, quiet: bool) -> Result<()> {
    if !quiet {
        eprintln!("Processing tags...");
    }
    let links = LinkIndex::load(index)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("couldn't create output directory {}", out_dir.display()))?;

    let docs = expand_inputs(files);

    let convert = |doc: &PathBuf| {
        if !quiet {
            eprintln!("Processing {}...", doc.display());
        }
        if let Err(err) = convert_document(doc, &links, out_dir) {
            eprintln!("{:#}", err);
        }
    };

    #[cfg(feature = "parallel")]
    docs.par_iter().for_each(convert);
    #[cfg(not(feature = "parallel"))]
    docs.iter().for_each(convert);

    if !quiet {
        eprintln!("Writing stylesheet...");
    }
    page::write_stylesheet(out_dir)?;

    if !quiet {
        eprintln!("done.");
    }
    Ok(())
}
