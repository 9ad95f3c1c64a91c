//! Gutenberg boilerplate detection and removal
//!
//! The exact header/footer wording varies across Gutenberg releases, so the
//! patterns live in a lookup table the caller can replace rather than being
//! hard-coded into the stripping logic.

use regex::Regex;

/// Pattern table for license header/footer removal
#[derive(Debug, Clone)]
pub struct BoilerplateRules {
    /// Patterns whose match (and everything they span) is removed from the
    /// head of the document
    header: Vec<Regex>,

    /// Patterns whose match is removed from the tail of the document
    footer: Vec<Regex>,
}

impl BoilerplateRules {
    /// Build a rule table from raw regex sources
    pub fn new(header: &[&str], footer: &[&str]) -> Result<Self, regex::Error> {
        Ok(Self {
            header: header.iter().map(|p| Regex::new(p)).collect::<Result<_, _>>()?,
            footer: footer.iter().map(|p| Regex::new(p)).collect::<Result<_, _>>()?,
        })
    }

    /// Remove all header/footer matches from `text`.
    ///
    /// Stripping is idempotent: each pattern is anchored to Gutenberg marker
    /// phrases that the removal itself deletes, so a second pass finds
    /// nothing to match.
    pub fn strip(&self, text: &str) -> String {
        let mut out = text.to_string();
        for pattern in self.header.iter().chain(self.footer.iter()) {
            // A marker can appear more than once (e.g. a license block
            // repeated in front and back matter); remove every occurrence.
            while let Some(m) = pattern.find(&out) {
                let range = m.range();
                out.replace_range(range, "");
            }
        }
        out
    }
}

impl Default for BoilerplateRules {
    /// The standard Project Gutenberg header/footer markers
    fn default() -> Self {
        Self::new(
            &[
                r"(?is)The Project Gutenberg eBook.*?produced by[^\n<]*",
                r"(?is)Project Gutenberg.*?\*+\s*START OF (?:THIS|THE) PROJECT GUTENBERG EBOOK[^\n<]*",
            ],
            &[
                r"(?is)\*+\s*END OF (?:THIS|THE) PROJECT GUTENBERG EBOOK.*",
                r"(?is)End of (?:the )?Project Gutenberg.*",
                r"(?is)This file should be named.*?gutenberg\.org[^\n<]*",
            ],
        )
        .expect("default boilerplate patterns are valid")
    }
}
