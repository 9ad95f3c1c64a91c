//! Chapter emission: one XHTML file per chapter, plus the table of contents
//! and the manifest/spine entries that reference them

use crate::error::{InjectError, Result};
use crate::types::{Chapter, ProjectLayout, TocEntry};
use crate::xml;
use std::fs;
use std::path::Path;

const CHAPTER_XHTML_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<html xmlns="http://www.w3.org/1999/xhtml" xmlns:epub="http://www.idpf.org/2007/ops" epub:prefix="z3998: http://www.daisy.org/z3998/2012/vocab/structure/, se: https://standardebooks.org/vocab/1.0">
<head>
	<title>{{TITLE}}</title>
	<link href="../css/core.css" rel="stylesheet" type="text/css"/>
	<link href="../css/local.css" rel="stylesheet" type="text/css"/>
</head>
<body epub:type="bodymatter z3998:fiction">
	<section id="{{ID}}" epub:type="chapter">
		<h2 epub:type="title">{{TITLE}}</h2>
{{CONTENT}}
	</section>
</body>
</html>
"#;

/// Write every chapter to `text/chapter-<ordinal>.xhtml` and rewrite the
/// table of contents to reference them in order.
///
/// Invariant on return: chapter file count == TOC entry count. Chapters with
/// empty bodies are still written so the numbering the toolchain sees matches
/// the source document.
pub fn emit_chapters(layout: &ProjectLayout, chapters: &[Chapter]) -> Result<Vec<TocEntry>> {
    let mut entries = Vec::with_capacity(chapters.len());

    for chapter in chapters {
        let id = format!("chapter-{}", chapter.ordinal);
        let title = chapter.display_title();
        let xhtml = CHAPTER_XHTML_TEMPLATE
            .replace("{{TITLE}}", &xml::escape(&title))
            .replace("{{ID}}", &id)
            .replace("{{CONTENT}}", &chapter.body);
        fs::write(layout.chapter_path(chapter.ordinal), xhtml)?;
        entries.push(TocEntry::new(title, format!("text/{}.xhtml", id)));
    }

    rewrite_toc(layout, &entries)?;
    register_in_manifest(layout, chapters)?;

    tracing::info!(
        "Emitted {} chapter files, {} TOC entries",
        chapters.len(),
        entries.len()
    );
    Ok(entries)
}

/// Replace the scaffolded TOC placeholder with one entry per chapter
fn rewrite_toc(layout: &ProjectLayout, entries: &[TocEntry]) -> Result<()> {
    let toc = fs::read_to_string(&layout.toc_xhtml)?;
    let items = entries
        .iter()
        .map(|entry| {
            format!(
                "\t\t\t<li>\n\t\t\t\t<a href=\"{}\">{}</a>\n\t\t\t</li>",
                entry.href,
                xml::escape(&entry.title)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let toc = substitute(&layout.toc_xhtml, toc, "{{TOC_ENTRIES}}", &items)?;
    fs::write(&layout.toc_xhtml, toc)?;
    Ok(())
}

/// Fill the manifest/spine tokens in `content.opf` with one item and one
/// itemref per chapter, in reading order
fn register_in_manifest(layout: &ProjectLayout, chapters: &[Chapter]) -> Result<()> {
    let opf = fs::read_to_string(&layout.content_opf)?;

    let items = chapters
        .iter()
        .map(|c| {
            format!(
                "<item href=\"text/chapter-{n}.xhtml\" id=\"chapter-{n}.xhtml\" media-type=\"application/xhtml+xml\"/>",
                n = c.ordinal
            )
        })
        .collect::<Vec<_>>()
        .join("\n\t\t");
    let itemrefs = chapters
        .iter()
        .map(|c| format!("<itemref idref=\"chapter-{}.xhtml\"/>", c.ordinal))
        .collect::<Vec<_>>()
        .join("\n\t\t");

    let opf = substitute(&layout.content_opf, opf, "{{MANIFEST_ITEMS}}", &items)?;
    let opf = substitute(&layout.content_opf, opf, "{{SPINE_ITEMS}}", &itemrefs)?;
    fs::write(&layout.content_opf, opf)?;
    Ok(())
}

fn substitute(path: &Path, content: String, token: &str, value: &str) -> Result<String> {
    if !content.contains(token) {
        return Err(InjectError::TemplateMismatch {
            token: token.to_string(),
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(content.replace(token, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::scaffold;
    use crate::types::BookMetadata;
    use tempfile::TempDir;

    fn chapter(ordinal: usize, title: Option<&str>, body: &str) -> Chapter {
        let c = Chapter::new(ordinal).with_body(body);
        match title {
            Some(t) => c.with_title(t),
            None => c,
        }
    }

    fn scaffolded() -> (TempDir, ProjectLayout) {
        let tmp = TempDir::new().unwrap();
        let meta = BookMetadata::new("Jane Doe", "Test Book");
        let layout = scaffold(tmp.path(), &meta).unwrap();
        (tmp, layout)
    }

    #[test]
    fn test_file_count_matches_toc_entry_count() {
        let (_tmp, layout) = scaffolded();
        let chapters = vec![
            chapter(1, Some("One"), "<p>a</p>"),
            chapter(2, None, "<p>b</p>"),
            chapter(3, Some("Three"), "<p>c</p>"),
        ];

        let entries = emit_chapters(&layout, &chapters).unwrap();

        let files = fs::read_dir(&layout.text_dir).unwrap().count();
        assert_eq!(files, entries.len());

        let toc = fs::read_to_string(&layout.toc_xhtml).unwrap();
        assert_eq!(toc.matches("<li>").count(), entries.len());
    }

    #[test]
    fn test_empty_body_still_emitted() {
        let (_tmp, layout) = scaffolded();
        let chapters = vec![chapter(1, Some("One"), "<p>a</p>"), chapter(2, Some("Blank"), "")];

        emit_chapters(&layout, &chapters).unwrap();

        assert!(layout.chapter_path(2).is_file());
        let toc = fs::read_to_string(&layout.toc_xhtml).unwrap();
        assert!(toc.contains("Blank"));
    }

    #[test]
    fn test_untitled_chapter_falls_back_to_ordinal() {
        let (_tmp, layout) = scaffolded();
        emit_chapters(&layout, &[chapter(1, None, "<p>x</p>")]).unwrap();

        let xhtml = fs::read_to_string(layout.chapter_path(1)).unwrap();
        assert!(xhtml.contains("<title>Chapter 1</title>"));
        assert!(xhtml.contains("<h2 epub:type=\"title\">Chapter 1</h2>"));
    }

    #[test]
    fn test_manifest_and_spine_registered_in_order() {
        let (_tmp, layout) = scaffolded();
        let chapters = vec![chapter(1, Some("One"), ""), chapter(2, Some("Two"), "")];

        emit_chapters(&layout, &chapters).unwrap();

        let opf = fs::read_to_string(&layout.content_opf).unwrap();
        assert!(opf.contains("href=\"text/chapter-1.xhtml\""));
        assert!(opf.contains("<itemref idref=\"chapter-2.xhtml\"/>"));
        let first = opf.find("idref=\"chapter-1.xhtml\"").unwrap();
        let second = opf.find("idref=\"chapter-2.xhtml\"").unwrap();
        assert!(first < second);
    }
}
