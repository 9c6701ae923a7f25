//! Annotation tokens already present in text
//!
//!     Every stage emits tokens of the form `@Name[...]`, optionally followed by a `{label}`.
//!     Brackets nest (`@Damage[2d6[fire]]`), so the token end is found by bracket balance.
//!     Stages only rewrite the text between tokens, which keeps a second pass over their own
//!     output a no-op.
//!
//!     Rendered html is protected the same way: tags are copied through, and so is the whole
//!     content of links and code, so urls and link text never pick up tokens.

use std::ops::Range;

/// Elements whose content is copied through as is.
const OPAQUE_ELEMENTS: &[&str] = &["a", "code", "pre"];

/// Byte ranges of all well-formed annotation tokens, in order.
pub fn annotation_spans(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'@' {
            if let Some(end) = annotation_end(bytes, i) {
                spans.push(i..end);
                i = end;
                continue;
            }
        }
        i += 1;
    }
    spans
}

/// End offset (exclusive) of the token starting at `start`, if one starts there.
fn annotation_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
    }
    if i == start + 1 || bytes.get(i) != Some(&b'[') {
        return None;
    }

    let mut depth = 0usize;
    let mut end = None;
    for (offset, byte) in bytes[i..].iter().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    end = Some(i + offset + 1);
                    break;
                }
            }
            _ => {}
        }
    }
    let end = end?;

    if bytes.get(end) == Some(&b'{') {
        if let Some(close) = bytes[end..].iter().position(|b| *b == b'}') {
            return Some(end + close + 1);
        }
    }
    Some(end)
}

/// Apply `rewrite` to every stretch of text outside annotation tokens. Tokens are copied
/// through untouched.
pub fn replace_outside_annotations<F>(text: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in annotation_spans(text) {
        out.push_str(&rewrite(&text[cursor..span.start]));
        out.push_str(&text[span.clone()]);
        cursor = span.end;
    }
    out.push_str(&rewrite(&text[cursor..]));
    out
}

/// Apply `rewrite` to the text runs of an html fragment. Tags and the content of
/// `OPAQUE_ELEMENTS` are copied through untouched.
pub fn replace_outside_tags<F>(html: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some((open, end)) = next_tag(rest) {
        out.push_str(&rewrite(&rest[..open]));
        let tag = &rest[open..end];
        out.push_str(tag);
        rest = &rest[end..];

        if let Some(name) = opaque_element(tag) {
            let closing = format!("</{}>", name);
            let skip = rest.find(&closing).map_or(rest.len(), |at| at + closing.len());
            out.push_str(&rest[..skip]);
            rest = &rest[skip..];
        }
    }
    out.push_str(&rewrite(rest));
    out
}

/// Offsets of the next `<...>` tag: start and exclusive end.
fn next_tag(text: &str) -> Option<(usize, usize)> {
    let open = text.find('<')?;
    let close = text[open..].find('>')?;
    Some((open, open + close + 1))
}

/// The element name if `tag` opens one of `OPAQUE_ELEMENTS`.
fn opaque_element(tag: &str) -> Option<&'static str> {
    let inner = &tag[1..];
    let name_end = inner
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(inner.len());
    let name = &inner[..name_end];
    OPAQUE_ELEMENTS
        .iter()
        .copied()
        .find(|element| name.eq_ignore_ascii_case(element))
}
