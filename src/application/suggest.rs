//! Autocomplete suggestions use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TagRepository};
use std::collections::{BTreeSet, HashSet};

/// Service offering tag completions from the taxonomy and past exports
pub struct SuggestService {
    repository: FileSystemRepository,
}

impl SuggestService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SuggestService { repository }
    }

    /// Suggestions starting with `prefix` (case-insensitive), sorted,
    /// excluding texts already in the tag list.
    pub fn suggest(&self, prefix: Option<&str>, limit: Option<usize>) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;
        let taxonomy = self.repository.load_taxonomy(&config)?;

        let mut pool: BTreeSet<String> = taxonomy.suggestion_vocabulary();
        pool.extend(
            self.repository
                .load_history()?
                .into_iter()
                .map(|tag| tag.text)
                .filter(|text| !text.is_empty()),
        );

        let current: HashSet<String> = self
            .repository
            .load_tags()?
            .into_iter()
            .map(|tag| tag.text)
            .collect();

        let needle = prefix.map(|p| p.trim().to_lowercase()).unwrap_or_default();

        let matches = pool
            .into_iter()
            .filter(|text| !current.contains(text))
            .filter(|text| text.to_lowercase().starts_with(&needle));

        Ok(match limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        })
    }
}
