//! Typographic cleanup of XHTML fragments
//!
//! Gutenberg transcriptions use typewriter conventions (straight quotes,
//! `--` for dashes). These are replaced in text nodes only; anything inside
//! a tag is left alone so attribute quoting survives.

/// Apply smart punctuation to the text portions of an XHTML fragment
pub fn smarten_fragment(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    let mut text = String::new();

    for ch in fragment.chars() {
        match ch {
            '<' if !in_tag => {
                out.push_str(&smarten_text(&text));
                text.clear();
                in_tag = true;
                out.push(ch);
            }
            '>' if in_tag => {
                in_tag = false;
                out.push(ch);
            }
            _ if in_tag => out.push(ch),
            _ => text.push(ch),
        }
    }
    out.push_str(&smarten_text(&text));
    out
}

/// Smart punctuation for a run of plain text
fn smarten_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '-' if chars.peek() == Some(&'-') => {
                chars.next();
                out.push('\u{2014}');
                prev = Some('\u{2014}');
                continue;
            }
            '"' => {
                let c = if opens_quote(prev) { '\u{201C}' } else { '\u{201D}' };
                out.push(c);
                prev = Some(c);
                continue;
            }
            '\'' => {
                let c = if opens_quote(prev) { '\u{2018}' } else { '\u{2019}' };
                out.push(c);
                prev = Some(c);
                continue;
            }
            _ => {}
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

/// A quote opens after whitespace, an opening bracket, or at the start of a
/// text run; anywhere else it closes (or is an apostrophe).
fn opens_quote(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '(' | '[' | '\u{201C}' | '\u{2018}' | '\u{2014}'),
    }
}
