//! Gutendraft Core Library
//!
//! Turns a Project Gutenberg HTML release (or a Markdown manuscript) plus
//! book metadata into a Standard-Ebooks-style project directory, then hands
//! the result to the external `se` toolchain for prepare-release, build, and
//! lint.

pub mod config;
pub mod emit;
pub mod error;
pub mod inject;
pub mod normalize;
pub mod pipeline;
pub mod scaffold;
pub mod toolchain;
pub mod types;
pub mod xml;

pub use config::Config;
pub use error::{
    GutendraftError, InjectError, NormalizeError, Result, ScaffoldError, ToolchainError,
};
pub use normalize::{BoilerplateRules, Normalizer};
pub use pipeline::Pipeline;
pub use types::{
    BookMetadata, Chapter, ProjectLayout, SourceDocument, SourceFormat, TocEntry, WorkType,
};
