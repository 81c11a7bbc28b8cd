//! Config management use case

use crate::application::switch_dialect::switch_dialect;
use crate::domain::Dialect;
use crate::error::{PromptagsError, Result};
use crate::infrastructure::{Config, FileSystemRepository, TagRepository};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for managing store configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "dialect" => Ok(config.dialect.to_string()),
            "taxonomy" => Ok(config
                .taxonomy
                .map(|path| path.display().to_string())
                .unwrap_or_default()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(PromptagsError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: dialect, taxonomy, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        match key {
            "dialect" => {
                let dialect = Dialect::from_str(value).map_err(PromptagsError::Config)?;
                switch_dialect(&self.repository, dialect)?;
                Ok(())
            }
            "taxonomy" => {
                let mut config = self.repository.load_config()?;
                config.taxonomy = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };

                // Refuse to point at a file that does not load
                self.repository.load_taxonomy(&config)?;
                self.repository.save_config(&config)
            }
            "created" => Err(PromptagsError::Config(
                "Cannot modify 'created' field (read-only)".to_string(),
            )),
            _ => Err(PromptagsError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: dialect, taxonomy",
                key
            ))),
        }
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
