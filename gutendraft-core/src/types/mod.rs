//! Core types for the Gutendraft pipeline

mod chapter;
mod layout;
mod metadata;
mod source;
mod toc;

pub use chapter::Chapter;
pub use layout::ProjectLayout;
pub use metadata::{BookMetadata, WorkType, WorkTypeParseError};
pub use source::{SourceDocument, SourceFormat};
pub use toc::TocEntry;
