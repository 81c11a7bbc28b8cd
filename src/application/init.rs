//! Initialize tag store use case

use crate::domain::Dialect;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, TagRepository};
use std::fs;
use std::path::Path;

/// Initialize a new tag store at the specified path.
pub fn init(path: &Path, dialect: Dialect) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;
    repo.save_config(&Config::new(dialect))?;
    repo.save_tags(&[])?;

    log::info!("Initialized tag store at {}", path.display());
    println!("Initialized promptags store at {}", path.display());
    println!("Dialect: {}", dialect);

    Ok(())
}
