//! Prompt string import and export

use crate::domain::emphasis::strip;
use crate::domain::Tag;

/// Separator placed between tags in an exported prompt
pub const PROMPT_SEPARATOR: &str = ", ";

/// Join tag texts, emphasis included, in list order
pub fn export_prompt(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.text.as_str())
        .collect::<Vec<&str>>()
        .join(PROMPT_SEPARATOR)
}

/// Trimmed, non-empty comma-separated segments of `raw`
pub fn split_segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Split a raw comma-separated prompt into plain tags.
///
/// Each segment is trimmed and stripped of emphasis; segments left empty
/// are dropped.
pub fn parse_prompt(raw: &str) -> Vec<Tag> {
    split_segments(raw)
        .map(strip)
        .filter(|text| !text.is_empty())
        .map(Tag::from_text)
        .collect()
}
