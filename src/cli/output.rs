//! Output formatting utilities

use crate::application::{AnnotatedTag, Review};
use crate::domain::Taxonomy;

/// Format the tag list with positions and owning categories
pub fn format_tag_list(tags: &[AnnotatedTag]) -> String {
    if tags.is_empty() {
        return "No tags".to_string();
    }

    let width = tags.len().to_string().len();
    let mut output = String::new();
    for (idx, entry) in tags.iter().enumerate() {
        match &entry.category {
            Some(label) => output.push_str(&format!(
                "{:>width$}. {}  [{} {}]\n",
                idx + 1,
                entry.tag.text,
                label.name,
                label.color,
                width = width
            )),
            None => output.push_str(&format!(
                "{:>width$}. {}\n",
                idx + 1,
                entry.tag.text,
                width = width
            )),
        }
    }
    output
}

/// Format a grouped review, skipping empty categories
pub fn format_review(review: &Review) -> String {
    let mut output = String::new();

    if !review.uncategorized.is_empty() {
        output.push_str("uncategorized\n");
        for tag in &review.uncategorized {
            output.push_str(&format!("  {}\n", tag.text));
        }
    }

    for group in &review.groups {
        if group.tags.is_empty() {
            continue;
        }
        output.push_str(&format!(
            "{} ({})\n",
            group.category.name, group.category.color
        ));
        for tag in &group.tags {
            output.push_str(&format!("  {}\n", tag.text));
        }
    }

    if output.is_empty() {
        return "No tags".to_string();
    }
    output
}

/// Format the categories of a taxonomy
pub fn format_category_list(taxonomy: &Taxonomy) -> String {
    if taxonomy.is_empty() {
        return "No categories".to_string();
    }

    let mut output = String::new();
    for category in taxonomy.categories() {
        output.push_str(&format!(
            "{}  {}  ({} tags)\n",
            category.color,
            category.name,
            category.tags.len()
        ));
    }
    output
}

pub fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return "No suggestions".to_string();
    }

    let mut output = String::new();
    for suggestion in suggestions {
        output.push_str(suggestion);
        output.push('\n');
    }
    output
}
