//! Source document loaded from disk

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Input format of a source document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SourceFormat {
    /// Project Gutenberg HTML release
    Html,
    /// Custom Markdown manuscript
    Markdown,
}

/// A raw source document plus its format tag. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceDocument {
    /// Raw file contents
    pub text: String,

    /// Format tag used to pick the normalization path
    pub format: SourceFormat,
}

impl SourceDocument {
    /// Create a document from in-memory text
    pub fn new(text: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    /// Load a document from a file on disk
    pub fn load(path: &Path, format: SourceFormat) -> std::io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self { text, format })
    }
}
