//! Tag list editing use cases

use crate::domain::prompt::split_segments;
use crate::domain::Tag;
use crate::error::{PromptagsError, Result};
use crate::infrastructure::{FileSystemRepository, TagRepository};

/// Convert a 1-based position into an index into a list of `len` tags
pub(crate) fn index_for(position: usize, len: usize) -> Result<usize> {
    if position == 0 || position > len {
        return Err(PromptagsError::PositionOutOfRange { position, len });
    }
    Ok(position - 1)
}

/// Outcome of adding tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReport {
    pub added: Vec<Tag>,
    pub skipped: Vec<String>,
}

/// Service for editing the stored tag list
pub struct TagListService {
    repository: FileSystemRepository,
}

impl TagListService {
    pub fn new(repository: FileSystemRepository) -> Self {
        TagListService { repository }
    }

    pub fn list(&self) -> Result<Vec<Tag>> {
        self.repository.load_tags()
    }

    /// Append tags as typed. Commas delimit tags inside one argument.
    /// Blank input and texts already present are skipped.
    pub fn add(&self, texts: &[String]) -> Result<AddReport> {
        let mut tags = self.repository.load_tags()?;
        let mut added = Vec::new();
        let mut skipped = Vec::new();

        for text in texts.iter().flat_map(|raw| split_segments(raw)) {
            if tags.iter().any(|tag| tag.text == text) {
                skipped.push(text.to_string());
                continue;
            }

            let tag = Tag::from_text(text);
            tags.push(tag.clone());
            added.push(tag);
        }

        if !added.is_empty() {
            self.repository.save_tags(&tags)?;
        }

        Ok(AddReport { added, skipped })
    }

    /// Remove the tag at a 1-based position
    pub fn remove(&self, position: usize) -> Result<Tag> {
        let mut tags = self.repository.load_tags()?;
        let index = index_for(position, tags.len())?;

        let removed = tags.remove(index);
        self.repository.save_tags(&tags)?;

        Ok(removed)
    }

    /// Move a tag from one 1-based position to another
    pub fn move_tag(&self, from: usize, to: usize) -> Result<Vec<Tag>> {
        let mut tags = self.repository.load_tags()?;
        let from_index = index_for(from, tags.len())?;
        let to_index = index_for(to, tags.len())?;

        let tag = tags.remove(from_index);
        tags.insert(to_index, tag);
        self.repository.save_tags(&tags)?;

        Ok(tags)
    }

    /// Drop every tag from the current list. History is kept.
    pub fn clear(&self) -> Result<usize> {
        let count = self.repository.load_tags()?.len();
        self.repository.save_tags(&[])?;
        Ok(count)
    }
}
