//! Document discovery and reading
//!
//! Help sources are read with lossy UTF-8 conversion: stray bytes in
//! decades-old documents degrade to replacement characters instead of
//! failing the whole file. Directory arguments expand to the `.txt`
//! files directly inside them, sorted by file name.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of help sources.
pub const HELP_EXT: &str = "txt";

/// Read one document as text, replacing invalid UTF-8 sequences.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("unable to open {} for reading", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Expand input arguments: files pass through as given, directories
/// expand to the `.txt` files directly inside them.
pub fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut expanded = Vec::new();
    for input in inputs {
        if input.is_dir() {
            expanded.extend(help_files_in(input));
        } else {
            expanded.push(input.clone());
        }
    }
    expanded
}

fn help_files_in(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(HELP_EXT))
        .collect()
}
