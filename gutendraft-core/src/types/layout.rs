//! Project layout created by the scaffolder

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The set of paths the scaffolder creates before any content is written.
///
/// Invariant: every path the metadata injector or chapter emitter writes to
/// already exists, created by the scaffolder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectLayout {
    /// Project root directory
    pub root: PathBuf,

    /// `src/epub` directory
    pub epub_dir: PathBuf,

    /// `src/epub/text` directory holding chapter files
    pub text_dir: PathBuf,

    /// `src/epub/css` directory
    pub css_dir: PathBuf,

    /// `src/epub/images` directory
    pub images_dir: PathBuf,

    /// Metadata file (`content.opf`)
    pub content_opf: PathBuf,

    /// Table of contents file (`toc.xhtml`)
    pub toc_xhtml: PathBuf,
}

impl ProjectLayout {
    /// Lay out the conventional paths under a project root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let epub_dir = root.join("src").join("epub");
        Self {
            text_dir: epub_dir.join("text"),
            css_dir: epub_dir.join("css"),
            images_dir: epub_dir.join("images"),
            content_opf: epub_dir.join("content.opf"),
            toc_xhtml: epub_dir.join("toc.xhtml"),
            epub_dir,
            root,
        }
    }

    /// Path of the chapter file for a given 1-based ordinal
    pub fn chapter_path(&self, ordinal: usize) -> PathBuf {
        self.text_dir.join(format!("chapter-{}.xhtml", ordinal))
    }

    /// All directories the scaffolder must create, parents first
    pub fn directories(&self) -> [&Path; 5] {
        [
            &self.root,
            &self.epub_dir,
            &self.text_dir,
            &self.css_dir,
            &self.images_dir,
        ]
    }
}
