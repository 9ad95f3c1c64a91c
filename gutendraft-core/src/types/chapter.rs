//! Chapter type produced by the normalizer

use serde::{Deserialize, Serialize};

/// A single chapter of the normalized document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    /// 1-based position in document order, sequential with no gaps
    pub ordinal: usize,

    /// Chapter title, when one could be extracted from the source
    pub title: Option<String>,

    /// Normalized XHTML fragment (may be empty)
    pub body: String,
}

impl Chapter {
    /// Create an untitled, empty chapter at the given ordinal
    pub fn new(ordinal: usize) -> Self {
        Self {
            ordinal,
            title: None,
            body: String::new(),
        }
    }

    /// Set the chapter title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body fragment
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Title to display, falling back to "Chapter N" for untitled chapters
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Chapter {}", self.ordinal))
    }
}
