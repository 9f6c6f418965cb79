//! helpdoc - converts plain-text help documents into a tags index and
//! cross-linked HTML pages
//!
//! helpdoc provides:
//! - Anchor indexing (`*tag*` definitions to a tags file)
//! - HTML rendering with cross-reference resolution
//! - Example-block and inline-highlight handling shared by both paths

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod html;
mod tags;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
