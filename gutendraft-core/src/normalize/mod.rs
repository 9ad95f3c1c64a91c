//! Content normalization: boilerplate stripping and chapter splitting
//!
//! Pure transformation from a [`SourceDocument`] to an ordered sequence of
//! [`Chapter`] values. No filesystem access happens here, so the pipeline
//! can fail on bad input before any directory is created.

mod boilerplate;
mod html;
mod markdown;
mod typography;

pub use boilerplate::BoilerplateRules;

use crate::error::NormalizeError;
use crate::types::{Chapter, SourceDocument, SourceFormat};
use regex::Regex;

/// Splits source documents into chapters
#[derive(Debug, Default)]
pub struct Normalizer {
    rules: BoilerplateRules,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom boilerplate pattern table
    pub fn with_rules(mut self, rules: BoilerplateRules) -> Self {
        self.rules = rules;
        self
    }

    /// Normalize a document into chapters with ordinals 1..N in document
    /// order.
    pub fn normalize(&self, doc: &SourceDocument) -> Result<Vec<Chapter>, NormalizeError> {
        let stripped = self.rules.strip(&doc.text);
        if stripped.trim().is_empty() {
            return Err(NormalizeError::EmptyDocument);
        }

        let chunks = match doc.format {
            SourceFormat::Html => html::split_chapters(&stripped),
            SourceFormat::Markdown => markdown::split_chapters(&stripped),
        };

        if chunks.is_empty() {
            return Err(NormalizeError::EmptyDocument);
        }

        let chapters = chunks
            .into_iter()
            .enumerate()
            .map(|(i, (title, body))| {
                let chapter = Chapter::new(i + 1).with_body(body);
                match title {
                    Some(t) => chapter.with_title(normalize_title(&t)),
                    None => chapter,
                }
            })
            .collect();

        Ok(chapters)
    }
}

/// Recapitalize roman-numeral chapter headings ("chapter iv" -> "Chapter IV")
fn normalize_title(title: &str) -> String {
    let roman = Regex::new(r"(?i)^chapter\s+([ivxlcdm]+)$").unwrap();
    match roman.captures(title) {
        Some(caps) => format!("Chapter {}", caps[1].to_uppercase()),
        None => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_sequential_from_one() {
        let doc = SourceDocument::new(
            "# A\n\none\n\n# B\n\ntwo\n\n# C\n\nthree\n",
            SourceFormat::Markdown,
        );
        let chapters = Normalizer::new().normalize(&doc).unwrap();
        let ordinals: Vec<usize> = chapters.iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_document_rejected() {
        let doc = SourceDocument::new("", SourceFormat::Markdown);
        assert!(matches!(
            Normalizer::new().normalize(&doc),
            Err(NormalizeError::EmptyDocument)
        ));
    }

    #[test]
    fn test_boilerplate_only_document_rejected() {
        let doc = SourceDocument::new(
            "End of the Project Gutenberg EBook of Nothing\n",
            SourceFormat::Markdown,
        );
        assert!(matches!(
            Normalizer::new().normalize(&doc),
            Err(NormalizeError::EmptyDocument)
        ));
    }

    #[test]
    fn test_roman_numeral_titles_recapitalized() {
        assert_eq!(normalize_title("chapter iv"), "Chapter IV");
        assert_eq!(normalize_title("Chapter XII"), "Chapter XII");
        assert_eq!(normalize_title("The Ivy Wall"), "The Ivy Wall");
    }

    #[test]
    fn test_html_boilerplate_stripped_before_split() {
        let html = "<html><body>\
            <p>The Project Gutenberg eBook of Example, produced by volunteers</p>\
            <h1>Chapter I</h1><p>Story text.</p>\
            <p>End of the Project Gutenberg EBook of Example</p>\
            </body></html>";
        let doc = SourceDocument::new(html, SourceFormat::Html);
        let chapters = Normalizer::new().normalize(&doc).unwrap();
        assert_eq!(chapters.len(), 1);
        assert!(chapters[0].body.contains("Story text."));
        assert!(!chapters[0].body.contains("Gutenberg"));
    }
}
