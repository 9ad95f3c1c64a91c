//! Markdown chapter splitting and XHTML rendering

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// (title, xhtml body) pairs in document order; ordinals are assigned by the
/// caller
pub(super) fn split_chapters(text: &str) -> Vec<(Option<String>, String)> {
    let boundaries = boundary_offsets(text);

    if boundaries.is_empty() {
        // No heading anywhere: the whole document is a single chapter.
        return vec![render_chunk(text)];
    }

    let mut chunks = Vec::new();

    // Anything before the first heading is front matter, kept as an
    // untitled chapter rather than dropped.
    let front = &text[..boundaries[0]];
    if !front.trim().is_empty() {
        chunks.push(render_chunk(front));
    }

    for (i, &start) in boundaries.iter().enumerate() {
        let end = boundaries.get(i + 1).copied().unwrap_or(text.len());
        chunks.push(render_chunk(&text[start..end]));
    }

    chunks
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options
}

/// Heading levels that open a new chapter
fn is_boundary_level(level: HeadingLevel) -> bool {
    matches!(level, HeadingLevel::H1 | HeadingLevel::H2 | HeadingLevel::H3)
}

/// Byte offsets where chapter-boundary headings start
fn boundary_offsets(text: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    for (event, range) in Parser::new_ext(text, parser_options()).into_offset_iter() {
        if let Event::Start(Tag::Heading { level, .. }) = event {
            if is_boundary_level(level) {
                offsets.push(range.start);
            }
        }
    }
    offsets
}

/// Raw HTML in the source is demoted to text so literal angle brackets are
/// always escaped in the output.
fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(s) | Event::InlineHtml(s) => Event::Text(s),
        other => other,
    }
}

/// Render a single chunk (optionally starting with its heading) to XHTML
fn render_chunk(chunk: &str) -> (Option<String>, String) {
    let events: Vec<Event> = Parser::new_ext(chunk, parser_options())
        .map(escape_raw_html)
        .collect();

    let mut title = None;
    let mut body_start = 0;

    if let Some(Event::Start(Tag::Heading { level, .. })) = events.first() {
        if is_boundary_level(*level) {
            if let Some(end) = events
                .iter()
                .position(|e| matches!(e, Event::End(TagEnd::Heading(_))))
            {
                let text: String = events[1..end]
                    .iter()
                    .filter_map(|e| match e {
                        Event::Text(t) | Event::Code(t) => Some(t.as_ref()),
                        _ => None,
                    })
                    .collect();
                let text = text.trim().to_string();
                if !text.is_empty() {
                    title = Some(text);
                }
                body_start = end + 1;
            }
        }
    }

    let mut body = String::new();
    html::push_html(&mut body, events.into_iter().skip(body_start));
    (title, body.trim().to_string())
}
