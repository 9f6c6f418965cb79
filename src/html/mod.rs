//! HTML module - render help documents to cross-linked pages
//!
//! Provides:
//! - link: read-only anchor index and reference resolution
//! - render: per-line document rendering and the html command handler
//! - page: fixed page shell, output naming, stylesheet asset

pub mod link;
pub mod page;
pub mod render;
