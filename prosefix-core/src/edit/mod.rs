//! Line editors.
//!
//! All span arithmetic is in characters, not bytes: Vale reports a span as a
//! pair of 1-based, inclusive character positions within the line, and byte
//! indexing would split multibyte characters in non-ASCII prose.

pub mod spacing;

use crate::errors::EditError;

pub use spacing::{normalize_spacing, strip_trailing_whitespace};

/// Punctuation stripped from the end of headings.
const HEADING_PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Resolve a 1-based inclusive character span into a byte range of `line`.
fn span_to_byte_range(line: &str, span: (u32, u32)) -> Result<std::ops::Range<usize>, EditError> {
    let (start, end) = span;
    let out_of_bounds = || EditError::SpanOutOfBounds {
        start,
        end,
        len: line.chars().count(),
    };

    if start == 0 || end < start {
        return Err(out_of_bounds());
    }

    let mut start_byte = None;
    let mut end_byte = None;
    for (char_idx, (byte_idx, ch)) in line.char_indices().enumerate() {
        let pos = char_idx as u32 + 1;
        if pos == start {
            start_byte = Some(byte_idx);
        }
        if pos == end {
            end_byte = Some(byte_idx + ch.len_utf8());
            break;
        }
    }

    match (start_byte, end_byte) {
        (Some(s), Some(e)) => Ok(s..e),
        _ => Err(out_of_bounds()),
    }
}

/// Replace the span with `replacement` (contractions, word-list fixes).
pub fn substitute(line: &str, span: (u32, u32), replacement: &str) -> Result<String, EditError> {
    let range = span_to_byte_range(line, span)?;
    let mut revised = String::with_capacity(line.len() + replacement.len());
    revised.push_str(&line[..range.start]);
    revised.push_str(replacement);
    revised.push_str(&line[range.end..]);
    Ok(revised)
}

/// Strip trailing punctuation from a heading span.
pub fn strip_heading_punctuation(line: &str, span: (u32, u32)) -> Result<String, EditError> {
    let range = span_to_byte_range(line, span)?;
    let segment = &line[range.clone()];
    let revised_segment = segment.trim_end_matches(HEADING_PUNCTUATION);
    Ok(format!(
        "{}{}{}",
        &line[..range.start],
        revised_segment,
        &line[range.end..]
    ))
}

/// Sentence-case a heading span: capitalize the first word, lowercase the
/// rest, keep words from the exception list verbatim. Whitespace inside the
/// span collapses to single spaces.
pub fn sentence_case_heading(
    line: &str,
    span: (u32, u32),
    exceptions: &[String],
) -> Result<String, EditError> {
    let range = span_to_byte_range(line, span)?;
    let segment = &line[range.clone()];

    let revised_words: Vec<String> = segment
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if exceptions.iter().any(|e| e == word) {
                word.to_string()
            } else if i == 0 {
                capitalize(word)
            } else {
                word.to_lowercase()
            }
        })
        .collect();

    Ok(format!(
        "{}{}{}",
        &line[..range.start],
        revised_words.join(" "),
        &line[range.end..]
    ))
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
