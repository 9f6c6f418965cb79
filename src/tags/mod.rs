//! Tags module - build and serialize the anchor index
//!
//! A tag maps an anchor name to its defining file and an ex-style search
//! locator. Format, one entry per line: `<anchor>\t<file>\t<locator>`.

pub mod builder;
pub mod format;
