//! Dialect switch use case

use crate::application::emphasize::reset_emphasis;
use crate::domain::Dialect;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TagRepository};

/// Result of switching dialects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectSwitch {
    pub previous: Dialect,
    pub current: Dialect,
    pub stripped: usize,
}

/// Strip emphasis from every tag, then persist the new dialect.
///
/// Tags are stripped even when the dialect does not change.
pub fn switch_dialect(repository: &FileSystemRepository, dialect: Dialect) -> Result<DialectSwitch> {
    let mut config = repository.load_config()?;
    let previous = config.dialect;

    let stripped = reset_emphasis(repository)?.len();

    config.dialect = dialect;
    repository.save_config(&config)?;
    log::info!("Dialect switched from {} to {}", previous, dialect);

    Ok(DialectSwitch {
        previous,
        current: dialect,
        stripped,
    })
}
