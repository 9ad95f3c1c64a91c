//! Project scaffolding: the directory/file skeleton the publishing
//! toolchain expects
//!
//! The skeleton is written first, in full, before any content is injected;
//! the injector and emitter only ever touch paths created here.

use crate::error::ScaffoldError;
use crate::types::{BookMetadata, ProjectLayout};
use std::fs;
use std::path::Path;

/// Metadata file template. `{{...}}` tokens are filled by the metadata
/// injector, except the manifest/spine tokens which the chapter emitter
/// fills once the chapter count is known.
pub(crate) const CONTENT_OPF_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://www.idpf.org/2007/opf" dir="ltr" prefix="se: https://standardebooks.org/vocab/1.0" unique-identifier="uid" version="3.0" xml:lang="{{LANGUAGE}}">
	<metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
		<dc:identifier id="uid">url:https://standardebooks.org/ebooks/{{AUTHOR_SLUG}}/{{TITLE_SLUG}}</dc:identifier>
		<dc:title id="title">{{TITLE}}</dc:title>
		<dc:language>{{LANGUAGE}}</dc:language>
		<dc:date>{{YEAR}}-01-01T00:00:00Z</dc:date>
		<dc:creator id="author">{{AUTHOR}}</dc:creator>
		<meta property="se:work-type">{{WORK_TYPE}}</meta>
		{{SUBJECTS}}
	</metadata>
	<manifest>
		<item href="css/core.css" id="core.css" media-type="text/css"/>
		<item href="css/local.css" id="local.css" media-type="text/css"/>
		<item href="toc.xhtml" id="toc.xhtml" media-type="application/xhtml+xml" properties="nav"/>
		{{MANIFEST_ITEMS}}
	</manifest>
	<spine>
		{{SPINE_ITEMS}}
	</spine>
</package>
"#;

/// Table of contents template; `{{TOC_ENTRIES}}` is rewritten by the
/// chapter emitter.
pub(crate) const TOC_XHTML_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops">
<head>
	<title>Table of Contents</title>
</head>
<body epub:type="frontmatter">
	<nav epub:type="toc">
		<h2 epub:type="title">Table of Contents</h2>
		<ol>
{{TOC_ENTRIES}}
		</ol>
	</nav>
</body>
</html>
"#;

const CSS_PLACEHOLDER: &str = "/* Styles are supplied by the publishing toolchain. */\n";

/// Create the full project skeleton under `output_root`.
///
/// The project directory is named `<author-slug>_<title-slug>`. Fails with
/// [`ScaffoldError::DirectoryExists`] before touching the filesystem if that
/// directory is already present.
pub fn scaffold(output_root: &Path, meta: &BookMetadata) -> Result<ProjectLayout, ScaffoldError> {
    let root = output_root.join(project_dir_name(meta));
    if root.exists() {
        return Err(ScaffoldError::DirectoryExists(root));
    }

    let layout = ProjectLayout::new(root);
    for dir in layout.directories() {
        fs::create_dir_all(dir).map_err(|source| ScaffoldError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    write_file(&layout.content_opf, CONTENT_OPF_TEMPLATE)?;
    write_file(&layout.toc_xhtml, TOC_XHTML_TEMPLATE)?;
    write_file(&layout.css_dir.join("core.css"), CSS_PLACEHOLDER)?;
    write_file(&layout.css_dir.join("local.css"), CSS_PLACEHOLDER)?;

    tracing::info!("Scaffolded project skeleton at {}", layout.root.display());
    Ok(layout)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    fs::write(path, contents).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Directory name for a project: `<author-slug>_<title-slug>`
pub fn project_dir_name(meta: &BookMetadata) -> String {
    format!("{}_{}", slugify(&meta.author), slugify(&meta.title))
}

/// Lowercase, spaces to dashes, strip everything outside `[a-z0-9-]`,
/// collapse dash runs.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut prev_dash = false;
    for ch in name.to_lowercase().chars() {
        let mapped = match ch {
            ' ' | '-' => Some('-'),
            c if c.is_ascii_alphanumeric() => Some(c),
            _ => None,
        };
        if let Some(c) = mapped {
            if c == '-' {
                if !prev_dash && !slug.is_empty() {
                    slug.push('-');
                }
                prev_dash = true;
            } else {
                slug.push(c);
                prev_dash = false;
            }
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Jane Doe"), "jane-doe");
        assert_eq!(slugify("The  Mill -- on the Floss!"), "the-mill-on-the-floss");
        assert_eq!(slugify("Émile Zola"), "mile-zola");
    }

    #[test]
    fn test_scaffold_creates_full_skeleton() {
        let tmp = TempDir::new().unwrap();
        let meta = BookMetadata::new("Jane Doe", "Test Book");
        let layout = scaffold(tmp.path(), &meta).unwrap();

        assert!(layout.root.ends_with("jane-doe_test-book"));
        assert!(layout.text_dir.is_dir());
        assert!(layout.css_dir.join("core.css").is_file());
        assert!(layout.content_opf.is_file());
        assert!(layout.toc_xhtml.is_file());

        let opf = std::fs::read_to_string(&layout.content_opf).unwrap();
        assert!(opf.contains("{{TITLE}}"));
        assert!(opf.contains("{{MANIFEST_ITEMS}}"));
    }

    #[test]
    fn test_existing_directory_rejected_untouched() {
        let tmp = TempDir::new().unwrap();
        let meta = BookMetadata::new("Jane Doe", "Test Book");
        let existing = tmp.path().join("jane-doe_test-book");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("keep.txt"), "do not clobber").unwrap();

        let err = scaffold(tmp.path(), &meta).unwrap_err();
        assert!(matches!(err, ScaffoldError::DirectoryExists(_)));

        // Nothing inside the pre-existing directory was touched.
        let entries: Vec<_> = std::fs::read_dir(&existing)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("keep.txt")]);
    }
}
