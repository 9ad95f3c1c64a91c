//! Metadata injection into the scaffolded `content.opf`

use crate::error::InjectError;
use crate::scaffold::slugify;
use crate::types::{BookMetadata, ProjectLayout};
use crate::xml;
use std::fs;

/// Fill the metadata tokens in the scaffolded `content.opf`.
///
/// Values are XML-escaped before substitution. The year line is removed
/// entirely when no year was given, and likewise the subjects line when there
/// are no subjects. A token missing from the template means the scaffold and
/// the injector disagree about the template shape, which is reported as
/// [`InjectError::TemplateMismatch`] rather than silently ignored.
pub fn inject_metadata(layout: &ProjectLayout, meta: &BookMetadata) -> Result<(), InjectError> {
    let template = fs::read_to_string(&layout.content_opf)?;

    let mut content = template;
    content = substitute(layout, content, "{{AUTHOR}}", &xml::escape(&meta.author))?;
    content = substitute(layout, content, "{{TITLE}}", &xml::escape(&meta.title))?;
    content = substitute(layout, content, "{{AUTHOR_SLUG}}", &slugify(&meta.author))?;
    content = substitute(layout, content, "{{TITLE_SLUG}}", &slugify(&meta.title))?;
    content = substitute(layout, content, "{{LANGUAGE}}", &xml::escape(&meta.language))?;
    content = substitute(layout, content, "{{WORK_TYPE}}", meta.work_type.as_str())?;

    content = match meta.year {
        Some(year) => substitute(layout, content, "{{YEAR}}", &year.to_string())?,
        None => drop_token_line(layout, content, "{{YEAR}}")?,
    };

    if meta.subjects.is_empty() {
        content = drop_token_line(layout, content, "{{SUBJECTS}}")?;
    } else {
        let subjects = meta
            .subjects
            .iter()
            .map(|s| format!("<dc:subject>{}</dc:subject>", xml::escape(s)))
            .collect::<Vec<_>>()
            .join("\n\t\t");
        content = substitute(layout, content, "{{SUBJECTS}}", &subjects)?;
    }

    fs::write(&layout.content_opf, content)?;
    tracing::info!("Injected metadata for '{}' by {}", meta.title, meta.author);
    Ok(())
}

/// Replace every occurrence of `token`, failing if it is absent
fn substitute(
    layout: &ProjectLayout,
    content: String,
    token: &str,
    value: &str,
) -> Result<String, InjectError> {
    if !content.contains(token) {
        return Err(InjectError::TemplateMismatch {
            token: token.to_string(),
            path: layout.content_opf.clone(),
        });
    }
    Ok(content.replace(token, value))
}

/// Remove every line containing `token`, failing if it is absent
fn drop_token_line(
    layout: &ProjectLayout,
    content: String,
    token: &str,
) -> Result<String, InjectError> {
    if !content.contains(token) {
        return Err(InjectError::TemplateMismatch {
            token: token.to_string(),
            path: layout.content_opf.clone(),
        });
    }
    let kept: Vec<&str> = content.lines().filter(|line| !line.contains(token)).collect();
    Ok(kept.join("\n") + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::scaffold;
    use tempfile::TempDir;

    fn scaffolded(meta: &BookMetadata) -> (TempDir, ProjectLayout) {
        let tmp = TempDir::new().unwrap();
        let layout = scaffold(tmp.path(), meta).unwrap();
        (tmp, layout)
    }

    #[test]
    fn test_fields_substituted_and_escaped() {
        let meta = BookMetadata::new("Jane & Co.", "Test <Book>")
            .with_year(1851)
            .with_subjects(vec!["Fiction".into(), "Sea stories".into()]);
        let (_tmp, layout) = scaffolded(&meta);

        inject_metadata(&layout, &meta).unwrap();
        let opf = fs::read_to_string(&layout.content_opf).unwrap();

        assert!(opf.contains("Jane &amp; Co."));
        assert!(opf.contains("Test &lt;Book&gt;"));
        assert!(opf.contains("<dc:date>1851-01-01T00:00:00Z</dc:date>"));
        assert!(opf.contains("<dc:subject>Fiction</dc:subject>"));
        assert!(opf.contains("<dc:subject>Sea stories</dc:subject>"));
        assert!(opf.contains("jane-co_test-book") || opf.contains("jane-co/test-book"));
        assert!(!opf.contains("{{AUTHOR}}"));
    }

    #[test]
    fn test_absent_year_omits_date_line() {
        let meta = BookMetadata::new("Jane Doe", "Test Book");
        let (_tmp, layout) = scaffolded(&meta);

        inject_metadata(&layout, &meta).unwrap();
        let opf = fs::read_to_string(&layout.content_opf).unwrap();

        assert!(!opf.contains("dc:date"));
        assert!(!opf.contains("{{YEAR}}"));
    }

    #[test]
    fn test_missing_token_is_template_mismatch() {
        let meta = BookMetadata::new("Jane Doe", "Test Book");
        let (_tmp, layout) = scaffolded(&meta);

        // Simulate a toolchain template from a different version.
        fs::write(&layout.content_opf, "<package></package>").unwrap();

        let err = inject_metadata(&layout, &meta).unwrap_err();
        assert!(matches!(err, InjectError::TemplateMismatch { .. }));
    }
}
