//! Prompt import and export use cases

use crate::domain::emphasis::strip_tag;
use crate::domain::prompt::{export_prompt as join_prompt, parse_prompt};
use crate::domain::Tag;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TagRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Prompt text, emphasis included
    pub prompt: String,
    /// Plain tags written to history
    pub stripped: Vec<Tag>,
}

/// Replace the tag list with tags parsed from a comma-separated prompt.
///
/// Blank input returns `None` and leaves the list untouched. Any other input
/// replaces the list, even when no segment survives parsing.
pub fn import_tags(repository: &FileSystemRepository, raw: &str) -> Result<Option<Vec<Tag>>> {
    if raw.trim().is_empty() {
        log::debug!("Nothing to import");
        return Ok(None);
    }

    let tags = parse_prompt(raw);
    repository.save_tags(&tags)?;
    log::info!("Imported {} tags", tags.len());
    Ok(Some(tags))
}

/// Build the prompt string and record the plain tags in history.
///
/// Unless `keep_emphasis` is set, the stored list is also replaced by its
/// plain form.
pub fn export_prompt(repository: &FileSystemRepository, keep_emphasis: bool) -> Result<ExportReport> {
    let tags = repository.load_tags()?;
    let prompt = join_prompt(&tags);
    let stripped: Vec<Tag> = tags.iter().map(strip_tag).collect();

    if !keep_emphasis {
        repository.save_tags(&stripped)?;
    }
    repository.append_history(&stripped)?;

    Ok(ExportReport { prompt, stripped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_with(texts: &[&str]) -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let tags: Vec<Tag> = texts.iter().map(|t| Tag::from_text(*t)).collect();
        repo.save_tags(&tags).unwrap();
        (temp, repo)
    }

    fn texts(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_import_replaces_list() {
        let (_temp, repo) = repo_with(&["old"]);
        let tags = import_tags(&repo, "((cat)), dog:1.2 , ,8k").unwrap().unwrap();

        assert_eq!(texts(&tags), vec!["cat", "dog", "8k"]);
        assert_eq!(repo.load_tags().unwrap(), tags);
    }

    #[test]
    fn test_import_blank_keeps_list() {
        let (_temp, repo) = repo_with(&["old"]);
        assert!(import_tags(&repo, "  ").unwrap().is_none());
        assert_eq!(texts(&repo.load_tags().unwrap()), vec!["old"]);
    }

    #[test]
    fn test_import_without_tags_clears_list() {
        let (_temp, repo) = repo_with(&["old"]);
        let tags = import_tags(&repo, ",,, ()").unwrap();

        assert_eq!(tags, Some(Vec::new()));
        assert!(repo.load_tags().unwrap().is_empty());
    }

    #[test]
    fn test_export_strips_stored_list_and_appends_history() {
        let (_temp, repo) = repo_with(&["((cat))", "8k"]);
        repo.append_history(&[Tag::from_text("earlier")]).unwrap();

        let report = export_prompt(&repo, false).unwrap();

        assert_eq!(report.prompt, "((cat)), 8k");
        assert_eq!(texts(&report.stripped), vec!["cat", "8k"]);
        assert_eq!(texts(&repo.load_tags().unwrap()), vec!["cat", "8k"]);
        assert_eq!(
            texts(&repo.load_history().unwrap()),
            vec!["earlier", "cat", "8k"]
        );
    }

    #[test]
    fn test_export_keep_emphasis() {
        let (_temp, repo) = repo_with(&["((cat))"]);

        let report = export_prompt(&repo, true).unwrap();

        assert_eq!(report.prompt, "((cat))");
        assert_eq!(texts(&repo.load_tags().unwrap()), vec!["((cat))"]);
        assert_eq!(texts(&repo.load_history().unwrap()), vec!["cat"]);
    }

    #[test]
    fn test_export_then_import_roundtrip() {
        let (_temp, repo) = repo_with(&["{sharp focus}", "(cat:1.3)", "8k"]);

        let report = export_prompt(&repo, false).unwrap();
        let plain_prompt = join_prompt(&report.stripped);
        let imported = import_tags(&repo, &plain_prompt).unwrap();

        assert_eq!(imported, Some(report.stripped));
    }
}
