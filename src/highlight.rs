//! Match Highlighting
//!
//! Splits suggestion text into plain and matched runs so the view can wrap
//! matches in `<strong>` without building HTML strings.

/// A run of text, `matched` if it equals the query ignoring case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

fn chars_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of the prefix of `hay` that matches `needle`, if any
fn match_len(hay: &str, needle: &str) -> Option<usize> {
    let mut hay_chars = hay.char_indices();
    let mut end = 0;
    for n in needle.chars() {
        let (idx, h) = hay_chars.next()?;
        if !chars_eq(h, n) {
            return None;
        }
        end = idx + h.len_utf8();
    }
    Some(end)
}

/// Every non-overlapping, case-insensitive occurrence of `query` in `text`,
/// scanning left to right. The query is literal text.
pub fn highlight_segments(text: &str, query: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    if query.is_empty() {
        if !text.is_empty() {
            segments.push(Segment { text: text.to_string(), matched: false });
        }
        return segments;
    }

    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        match match_len(&text[pos..], query) {
            Some(len) if len > 0 => {
                if plain_start < pos {
                    segments.push(Segment { text: text[plain_start..pos].to_string(), matched: false });
                }
                segments.push(Segment { text: text[pos..pos + len].to_string(), matched: true });
                pos += len;
                plain_start = pos;
            }
            _ => {
                // advance one char
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if plain_start < text.len() {
        segments.push(Segment { text: text[plain_start..].to_string(), matched: false });
    }
    segments
}

/// Label shown for a suggestion
pub fn suggestion_label(code: &str, description: &str) -> String {
    format!("{} - {}", code, description)
}
