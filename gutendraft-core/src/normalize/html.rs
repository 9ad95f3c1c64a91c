//! Gutenberg HTML chapter splitting
//!
//! Walks the document body in order, opening a new chapter at each heading
//! element and collecting the content between headings as the chapter body.

use crate::normalize::typography;
use crate::xml;
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

/// (title, xhtml body) pairs in document order; ordinals are assigned by the
/// caller
pub(super) fn split_chapters(html_text: &str) -> Vec<(Option<String>, String)> {
    let document = Html::parse_document(html_text);
    let body_selector = Selector::parse("body").unwrap();

    let mut splitter = Splitter::default();
    match document.select(&body_selector).next() {
        Some(body) => splitter.walk(*body),
        None => splitter.walk(*document.root_element()),
    }
    splitter.finish()
}

#[derive(Default)]
struct Splitter {
    chunks: Vec<(Option<String>, String)>,
    current_title: Option<String>,
    current_body: String,
}

impl Splitter {
    fn walk(&mut self, node: NodeRef<'_, Node>) {
        for child in node.children() {
            match child.value() {
                Node::Element(el) => {
                    if skip_element(el) {
                        continue;
                    }
                    match el.name() {
                        "h1" | "h2" | "h3" => self.open_chapter(text_content(child)),
                        // Containers are flattened so headings buried in
                        // wrapper divs still act as boundaries.
                        "html" | "body" | "div" | "section" | "article" => self.walk(child),
                        _ => {
                            // Boilerplate stripping can hollow out elements;
                            // empty shells would otherwise surface as phantom
                            // front-matter chapters.
                            if is_empty_shell(child) {
                                continue;
                            }
                            if let Some(element) = ElementRef::wrap(child) {
                                self.current_body.push_str(&element.html());
                                self.current_body.push('\n');
                            }
                        }
                    }
                }
                Node::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        self.current_body.push_str("<p>");
                        self.current_body.push_str(&xml::escape(trimmed));
                        self.current_body.push_str("</p>\n");
                    }
                }
                _ => {}
            }
        }
    }

    fn open_chapter(&mut self, title: String) {
        self.flush();
        let title = title.trim().to_string();
        self.current_title = (!title.is_empty()).then_some(title);
    }

    fn flush(&mut self) {
        if self.current_title.is_some() || !self.current_body.trim().is_empty() {
            let body = typography::smarten_fragment(self.current_body.trim());
            self.chunks.push((self.current_title.take(), body));
        }
        self.current_body.clear();
        self.current_title = None;
    }

    fn finish(mut self) -> Vec<(Option<String>, String)> {
        self.flush();
        self.chunks
    }
}

/// Elements dropped entirely: scripts, styles, and the Gutenberg
/// header/footer containers
fn skip_element(el: &scraper::node::Element) -> bool {
    if matches!(el.name(), "script" | "style" | "head") {
        return true;
    }
    let marked = |attr: Option<&str>| {
        attr.map(|v| {
            v.split_whitespace()
                .any(|c| matches!(c, "pgheader" | "pgfooter" | "pg-header" | "pg-footer"))
        })
        .unwrap_or(false)
    };
    marked(el.attr("class")) || marked(el.attr("id"))
}

/// True when a subtree carries no text and no void content worth keeping
fn is_empty_shell(node: NodeRef<'_, Node>) -> bool {
    for descendant in node.descendants() {
        match descendant.value() {
            Node::Text(t) if !t.trim().is_empty() => return false,
            Node::Element(el) if matches!(el.name(), "img" | "hr" | "br") => return false,
            _ => {}
        }
    }
    true
}

/// Concatenated descendant text with whitespace collapsed
fn text_content(node: NodeRef<'_, Node>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        if let Node::Text(t) = descendant.value() {
            text.push_str(t);
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
