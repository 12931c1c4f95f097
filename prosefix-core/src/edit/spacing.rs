//! Whole-line whitespace normalization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Spaces before punctuation: `word .` → `word.`
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r" +([.,:;?!])").unwrap());

/// Punctuation glued to the next word: `word.Next` → `word. Next`
/// The second class excludes whitespace, further punctuation (ellipses,
/// `?!`), and `*` (Markdown emphasis markers hug punctuation).
static MISSING_SPACE_AFTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.,:;?!])([^ \t.,:;?!*])").unwrap());

/// Runs of spaces after punctuation: `word.   Next` → `word. Next`
static EXTRA_SPACE_AFTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.,:;?!]) +").unwrap());

/// Standardize spacing around `.,:;?!` and trim the line.
pub fn normalize_spacing(line: &str) -> String {
    let line = SPACE_BEFORE_PUNCT.replace_all(line, "$1");
    let line = MISSING_SPACE_AFTER.replace_all(&line, "$1 $2");
    let line = EXTRA_SPACE_AFTER.replace_all(&line, "$1 ");
    line.trim().to_string()
}

/// Strip trailing whitespace.
pub fn strip_trailing_whitespace(line: &str) -> String {
    line.trim_end().to_string()
}
