//! Link index and reference resolution
//!
//! A read-only mapping from anchor name to a pre-rendered `<a>` element,
//! loaded once per run from a tags file and shared by every document.
//! Resolution never fails: unknown names render as a visibly marked
//! bad link.

use std::collections::HashMap;
use std::path::Path;

use crate::core::escape::{esc_text, esc_url};
use crate::tags::format::{read_tag_records, TagFileError, TagRecord};

/// Extension of help sources, rewritten in link targets and labels.
pub const SOURCE_EXT: &str = ".txt";

/// Extension of rendered pages.
pub const TARGET_EXT: &str = ".html";

/// Immutable anchor-to-link mapping. Built once per run, never mutated
/// by the renderer.
#[derive(Debug, Default)]
pub struct LinkIndex {
    links: HashMap<String, String>,
}

impl LinkIndex {
    /// Build from tag records; later records overwrite earlier ones for
    /// the same anchor.
    pub fn build(records: &[TagRecord]) -> Self {
        let mut links = HashMap::new();
        for record in records {
            links.insert(record.anchor.clone(), render_link(&record.anchor, &record.file));
        }
        Self { links }
    }

    /// Load a tags file and build the index from its records.
    pub fn load(path: &Path) -> Result<Self, TagFileError> {
        Ok(Self::build(&read_tag_records(path)?))
    }

    /// Resolve a reference name: the indexed link, or a badlink marker.
    pub fn resolve(&self, name: &str) -> String {
        match self.links.get(name) {
            Some(link) => link.clone(),
            None => format!(r#"<code class="badlink">{}</code>"#, badlink_label(name)),
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

fn render_link(anchor: &str, file: &str) -> String {
    let target = match file.strip_suffix(SOURCE_EXT) {
        Some(stem) => format!("{}{}", stem, TARGET_EXT),
        None => file.to_string(),
    };
    let label = strip_ext(anchor);
    format!(
        r#"<a href="{}#{}">{}</a>"#,
        target,
        esc_url(anchor),
        esc_text(label)
    )
}

fn strip_ext(name: &str) -> &str {
    name.strip_suffix(SOURCE_EXT).unwrap_or(name)
}

/// Bad links show the name with its extension stripped and the angle
/// brackets escaped; `&` passes through, as it always has.
fn badlink_label(name: &str) -> String {
    strip_ext(name).replace('<', "&lt;").replace('>', "&gt;")
}
