//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::tags::format::TagsFormat;

/// helpdoc - converts plain-text help documents into a tags index and
/// cross-linked HTML pages.
#[derive(Parser, Debug)]
#[command(name = "helpdoc")]
#[command(
    author,
    version,
    about,
    long_about = r#"helpdoc recognizes a fixed set of help-text conventions:

- *tag*        an anchor definition other documents can link to
- |tag|        a cross-reference, rendered as a link (or a marked bad link)
- trailing >   opens a literal example block, closed by the next
               flush-left line
- heading~     a section heading

The `tags` command writes the anchor index to stdout; the `html` command
loads such an index and renders each document to <base>.html plus a fixed
stylesheet.

Examples:
    helpdoc tags doc/*.txt > tags
    helpdoc html tags doc/*.txt --out-dir site
"#
)]
pub struct Cli {
    /// Quiet mode (suppress progress messages).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress progress messages on stderr. Error reports are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Print per-file diagnostics on stderr while indexing."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tags index from help documents and write it to stdout.
    #[command(
        long_about = "Scan each document for anchor definitions and write one index entry\n\
per anchor to stdout, in input order. Anchors inside example blocks are\n\
not indexed. Unreadable documents are reported to stderr and skipped;\n\
the partial index is still emitted.\n\n\
Examples:\n\
  helpdoc tags usr_01.txt usr_02.txt > tags\n\
  helpdoc tags doc/ --format jsonl\n"
    )]
    Tags {
        /// Help documents (or directories of .txt files) to index.
        #[arg(value_name = "FILE", num_args = 1.., required = true)]
        files: Vec<PathBuf>,

        /// Output format (tags/jsonl).
        #[arg(
            long,
            default_value = "tags",
            value_name = "FORMAT",
            long_help = "Select the output format.\n\n\
Supported values:\n\
- tags (default): tab-separated text, the persisted index format\n\
- jsonl: one JSON object per entry"
        )]
        format: String,
    },

    /// Render help documents to cross-linked HTML using a tags index.
    #[command(
        long_about = "Load a tags index, then render each document to <base>.html in the\n\
output directory, plus the fixed stylesheet asset. An unreadable index\n\
is fatal; a document that cannot be read or written is reported and\n\
skipped while the rest still render.\n\n\
Examples:\n\
  helpdoc html tags usr_01.txt\n\
  helpdoc html tags doc/ --out-dir site\n"
    )]
    Html {
        /// Tags index produced by `helpdoc tags`.
        #[arg(value_name = "INDEX")]
        index: PathBuf,

        /// Help documents (or directories of .txt files) to render.
        #[arg(value_name = "FILE", num_args = 1.., required = true)]
        files: Vec<PathBuf>,

        /// Directory for the generated pages and stylesheet.
        #[arg(long, default_value = ".", value_name = "DIR")]
        out_dir: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Tags { files, format } => {
            let format: TagsFormat = format.parse().unwrap_or_default();
            crate::tags::builder::run_tags(&files, format, cli.verbose)
        }

        Commands::Html {
            index,
            files,
            out_dir,
        } => crate::html::render::run_html(&index, &files, &out_dir, cli.quiet),
    }
}
