//! Emphasis encoding and decoding
//!
//! Emphasis is expressed by wrapping a tag in nested brackets. The depth is
//! read lexically from the leading bracket run, and stripping removes every
//! bracket character plus any numeric weight suffix (`tag:1.3`).

use crate::domain::{Dialect, Tag};
use regex::Regex;
use std::sync::OnceLock;

/// Number of leading emphasis brackets on a tag
pub type EmphasisLevel = usize;

/// Depth at which toggling cycles back to plain text
pub const MAX_EMPHASIS: EmphasisLevel = 6;

/// Every bracket either dialect (or weight syntax) may leave in a tag
fn bracket_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[{}()\[\]]").unwrap())
}

/// Count consecutive `{` or `(` at the start of the tag text.
///
/// Both openers count regardless of the active dialect.
pub fn score(tag: &Tag) -> EmphasisLevel {
    tag.text
        .chars()
        .take_while(|ch| matches!(ch, '{' | '('))
        .count()
}

/// Remove all emphasis markup from a string.
///
/// Brackets are removed wherever they occur, then the first `:` and
/// everything after it is dropped.
pub fn strip(text: &str) -> String {
    let mut processed = bracket_regex().replace_all(text, "").into_owned();
    if let Some(idx) = processed.find(':') {
        processed.truncate(idx);
    }
    processed
}

/// Strip `id` and `text` independently
pub fn strip_tag(tag: &Tag) -> Tag {
    tag.transform(strip)
}

/// Add one emphasis layer, or reset to plain text once the tag is at
/// [`MAX_EMPHASIS`] or deeper.
pub fn toggle(tag: &Tag, dialect: Dialect) -> Tag {
    if score(tag) >= MAX_EMPHASIS {
        return strip_tag(tag);
    }

    tag.transform(|value| dialect.wrap(value))
}
