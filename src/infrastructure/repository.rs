//! File system repository

use crate::domain::{Tag, Taxonomy};
use crate::error::{PromptagsError, Result};
use crate::infrastructure::config::STORE_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

const TAGS_FILE: &str = "tags.json";
const HISTORY_FILE: &str = "history.json";

/// Abstract repository for tag store operations
pub trait TagRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .promptags/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .promptags/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .promptags directory exists
    fn is_initialized(&self) -> bool;

    /// Create .promptags directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the current tag list (missing or unreadable data reads as empty)
    fn load_tags(&self) -> Result<Vec<Tag>>;

    /// Overwrite the current tag list
    fn save_tags(&self, tags: &[Tag]) -> Result<()>;

    /// Load every tag ever exported
    fn load_history(&self) -> Result<Vec<Tag>>;

    /// Append tags to the history, keeping existing entries
    fn append_history(&self, tags: &[Tag]) -> Result<()>;

    /// Load the configured taxonomy, or the builtin one
    fn load_taxonomy(&self, config: &Config) -> Result<Taxonomy>;
}

/// File system implementation of TagRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover store root by walking up from current directory
    /// First checks PROMPTAGS_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("PROMPTAGS_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_store_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(PromptagsError::Config(format!(
                    "PROMPTAGS_ROOT is set to '{}' but no .promptags directory found. \
                    Run 'promptags init' in that directory or unset PROMPTAGS_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_store_dir(&current) {
                log::debug!("Using tag store at {}", current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(PromptagsError::NotPromptagsDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_store_dir(path: &Path) -> bool {
        path.join(STORE_DIR).is_dir()
    }

    fn store_path(&self, filename: &str) -> PathBuf {
        self.root.join(STORE_DIR).join(filename)
    }

    /// Read a JSON tag array. A missing file is an empty list; so is a file
    /// that does not decode, after logging a warning.
    fn read_tag_file(&self, filename: &str) -> Result<Vec<Tag>> {
        let path = self.store_path(filename);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PromptagsError::Io(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&contents) {
            Ok(tags) => Ok(tags),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed {} ({}); treating it as empty",
                    path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_tag_file(&self, filename: &str, tags: &[Tag]) -> Result<()> {
        let contents = serde_json::to_string_pretty(tags)?;
        self.write_atomic(&self.store_path(filename), &contents)
    }

    /// Write through a temp file and rename over the target
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.promptags-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("store.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl TagRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_store_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let store_dir = self.root.join(STORE_DIR);

        if store_dir.exists() {
            return Err(PromptagsError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&store_dir)?;
        Ok(())
    }

    fn load_tags(&self) -> Result<Vec<Tag>> {
        self.read_tag_file(TAGS_FILE)
    }

    fn save_tags(&self, tags: &[Tag]) -> Result<()> {
        log::debug!("Saving {} tags", tags.len());
        self.write_tag_file(TAGS_FILE, tags)
    }

    fn load_history(&self) -> Result<Vec<Tag>> {
        self.read_tag_file(HISTORY_FILE)
    }

    fn append_history(&self, tags: &[Tag]) -> Result<()> {
        let mut history = self.load_history()?;
        history.extend_from_slice(tags);
        log::debug!(
            "Appending {} tags to history ({} total)",
            tags.len(),
            history.len()
        );
        self.write_tag_file(HISTORY_FILE, &history)
    }

    fn load_taxonomy(&self, config: &Config) -> Result<Taxonomy> {
        let Some(relative) = &config.taxonomy else {
            return Ok(Taxonomy::builtin());
        };

        let path = self.root.join(relative);
        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PromptagsError::Taxonomy(format!(
                    "Taxonomy file not found: {}",
                    path.display()
                ))
            } else {
                PromptagsError::Io(e)
            }
        })?;

        let taxonomy = Taxonomy::from_toml_str(&contents)?;
        log::debug!(
            "Loaded {} categories from {}",
            taxonomy.len(),
            path.display()
        );
        Ok(taxonomy)
    }
}
