//! Configuration management

use crate::domain::Dialect;
use crate::error::{PromptagsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the store directory inside the root
pub const STORE_DIR: &str = ".promptags";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dialect: Dialect,
    /// Custom taxonomy file, relative to the store root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<PathBuf>,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(dialect: Dialect) -> Self {
        Config {
            dialect,
            taxonomy: None,
            created: Utc::now(),
        }
    }

    /// Load config from .promptags/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STORE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PromptagsError::NotPromptagsDirectory(path.to_path_buf())
            } else {
                PromptagsError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PromptagsError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .promptags/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let store_dir = path.join(STORE_DIR);
        let config_path = store_dir.join("config.toml");

        // Ensure .promptags directory exists
        if !store_dir.exists() {
            fs::create_dir(&store_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| PromptagsError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new(Dialect::NovelAi);
        assert_eq!(config.dialect, Dialect::NovelAi);
        assert!(config.taxonomy.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new(Dialect::NovelAi);
        config.taxonomy = Some(PathBuf::from("taxonomy.toml"));

        // Save config
        config.save_to_dir(temp.path()).unwrap();

        // Check .promptags directory was created
        assert!(temp.path().join(".promptags").exists());
        assert!(temp.path().join(".promptags/config.toml").exists());

        // Load config
        let loaded = Config::load_from_dir(temp.path()).unwrap();

        // Verify it matches
        assert_eq!(loaded.dialect, config.dialect);
        assert_eq!(loaded.taxonomy, config.taxonomy);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_saved_config_format() {
        let temp = TempDir::new().unwrap();
        Config::new(Dialect::StableDiffusion)
            .save_to_dir(temp.path())
            .unwrap();

        let content = fs::read_to_string(temp.path().join(".promptags/config.toml")).unwrap();
        assert!(content.contains("dialect = \"stable-diffusion\""));
        assert!(!content.contains("taxonomy"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        // Try to load config from directory without .promptags
        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            PromptagsError::NotPromptagsDirectory(_) => {}
            _ => panic!("Expected NotPromptagsDirectory error"),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(STORE_DIR)).unwrap();
        fs::write(
            temp.path().join(".promptags/config.toml"),
            "dialect = \"midjourney\"\ncreated = \"2025-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            PromptagsError::Config(msg) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_dialect_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(STORE_DIR)).unwrap();
        fs::write(
            temp.path().join(".promptags/config.toml"),
            "created = \"2025-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.dialect, Dialect::StableDiffusion);
    }
}
