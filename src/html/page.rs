//! HTML page assembly
//!
//! Fixed boilerplate around a rendered document body, output-file
//! naming, and the static stylesheet asset.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

/// File name of the stylesheet asset written next to the pages.
pub const STYLESHEET_NAME: &str = "help-stylesheet.css";

/// The stylesheet content; fixed and unparameterized.
const STYLESHEET: &str = "\
body { background-color: white; color: black; }
:link { color: rgb(0,137,139); }
:visited { color: rgb(0,100,100);
           background-color: white; }
:active { color: rgb(0,200,200);
          background-color: white; }

B.tag { color: rgb(250,0,250); }

h1, h2 { color: rgb(82,80,82); text-align: center; }
h3, h4, h5, h6 { color: rgb(82,80,82); }
.section { color: rgb(164, 32, 246); }
.keystroke { color: rgb(106, 89, 205); }
.example { color: rgb(0, 0, 255); }
.special { color: rgb(106, 89, 205); }
.note { color: blue; background-color: yellow; }
.badlink { color: rgb(0,37,39); }
";

/// Base name of a document: file name with the `.txt` extension
/// stripped.
pub fn base_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(".txt").unwrap_or(&name).to_string()
}

/// Output file name for a document: base name plus `.html`.
pub fn output_name(input: &Path) -> String {
    format!("{}.html", base_name(input))
}

/// Wrap a rendered body in the fixed page shell.
pub fn render_page(base: &str, body: &str) -> String {
    let date = Local::now().format("%d.%m.%Y");
    format!(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\">\n\
         <html>\n\
         <head>\n\
         <title>Help: {base}</title>\n\
         <link rel=\"stylesheet\" href=\"{STYLESHEET_NAME}\" type=\"text/css\">\n\
         </head>\n\
         <body>\n\
         <h2>{head}</h2>\n\
         <pre>\n\
         {body}</pre>\n\
         <p><i>Generated by helpdoc on {date}</i></p>\n\
         </body>\n\
         </html>\n",
        head = base.to_uppercase(),
    )
}

/// Write the stylesheet asset into the output directory.
pub fn write_stylesheet(out_dir: &Path) -> Result<()> {
    let path = out_dir.join(STYLESHEET_NAME);
    fs::write(&path, STYLESHEET)
        .with_context(|| format!("couldn't write stylesheet to {}", path.display()))
}
