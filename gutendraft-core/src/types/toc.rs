//! Table of contents types

use serde::{Deserialize, Serialize};

/// A single entry in the table of contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TocEntry {
    /// Display title
    pub title: String,

    /// Href relative to the epub source root, e.g. "text/chapter-1.xhtml"
    pub href: String,
}

impl TocEntry {
    /// Create a new TOC entry
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}
