//! Book metadata supplied by the caller

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default locale used when the caller does not specify one
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Metadata for the book being drafted. Constructed once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookMetadata {
    /// Author name, e.g. "Jane Doe"
    pub author: String,

    /// Book title
    pub title: String,

    /// Language code (BCP 47)
    pub language: String,

    /// Original publication year, omitted from output when absent
    pub year: Option<i32>,

    /// Kind of work
    pub work_type: WorkType,

    /// Subject/genre tags, in order
    pub subjects: Vec<String>,
}

impl BookMetadata {
    /// Create metadata with required fields and defaults for the rest
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            year: None,
            work_type: WorkType::Novel,
            subjects: Vec::new(),
        }
    }

    /// Set the language code
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the work type
    pub fn with_work_type(mut self, work_type: WorkType) -> Self {
        self.work_type = work_type;
        self
    }

    /// Replace the subject tags
    pub fn with_subjects(mut self, subjects: Vec<String>) -> Self {
        self.subjects = subjects;
        self
    }
}

/// Fixed enumeration of supported work types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WorkType {
    #[default]
    Novel,
    ShortStory,
    Novella,
    Anthology,
    NonFiction,
}

impl WorkType {
    /// Kebab-case name as used on the CLI and in the metadata file
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Novel => "novel",
            WorkType::ShortStory => "short-story",
            WorkType::Novella => "novella",
            WorkType::Anthology => "anthology",
            WorkType::NonFiction => "non-fiction",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown work type name
#[derive(Debug, Clone, Error)]
#[error("unknown work type '{0}' (expected one of: novel, short-story, novella, anthology, non-fiction)")]
pub struct WorkTypeParseError(pub String);

impl FromStr for WorkType {
    type Err = WorkTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "novel" => Ok(WorkType::Novel),
            "short-story" => Ok(WorkType::ShortStory),
            "novella" => Ok(WorkType::Novella),
            "anthology" => Ok(WorkType::Anthology),
            "non-fiction" => Ok(WorkType::NonFiction),
            other => Err(WorkTypeParseError(other.to_string())),
        }
    }
}
