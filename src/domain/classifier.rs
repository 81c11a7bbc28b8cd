//! Category lookup for individual tags

use crate::domain::emphasis::strip;
use crate::domain::{Category, Tag, Taxonomy};

/// Index of the first category whose vocabulary contains the tag's
/// canonical text, or `None` when the tag is uncategorized.
pub fn classify(tag: &Tag, taxonomy: &Taxonomy) -> Option<usize> {
    let canonical = strip(&tag.text);
    taxonomy
        .categories()
        .iter()
        .position(|category| category.contains(&canonical))
}

pub fn category_of<'a>(tag: &Tag, taxonomy: &'a Taxonomy) -> Option<&'a Category> {
    classify(tag, taxonomy).and_then(|index| taxonomy.get(index))
}

/// Display color of the owning category
pub fn color_of<'a>(tag: &Tag, taxonomy: &'a Taxonomy) -> Option<&'a str> {
    category_of(tag, taxonomy).map(|category| category.color.as_str())
}
