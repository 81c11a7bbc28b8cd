//! Emphasis use cases

use crate::application::edit_tags::index_for;
use crate::domain::{emphasis, Tag};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TagRepository};

/// Toggle emphasis on the tag at a 1-based position using the active dialect
pub fn emphasize(repository: &FileSystemRepository, position: usize) -> Result<Tag> {
    let config = repository.load_config()?;
    let mut tags = repository.load_tags()?;
    let index = index_for(position, tags.len())?;

    let toggled = emphasis::toggle(&tags[index], config.dialect);
    log::debug!(
        "Emphasis on '{}': {} -> {}",
        tags[index].text,
        emphasis::score(&tags[index]),
        emphasis::score(&toggled)
    );
    tags[index] = toggled.clone();
    repository.save_tags(&tags)?;

    Ok(toggled)
}

/// Strip emphasis from every stored tag
pub fn reset_emphasis(repository: &FileSystemRepository) -> Result<Vec<Tag>> {
    let tags: Vec<Tag> = repository
        .load_tags()?
        .iter()
        .map(emphasis::strip_tag)
        .collect();
    repository.save_tags(&tags)?;
    Ok(tags)
}
