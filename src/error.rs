//! Error types for promptags

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptags
#[derive(Debug, Error)]
pub enum PromptagsError {
    #[error("Not a promptags directory: {0}")]
    NotPromptagsDirectory(PathBuf),

    #[error("No tag at position {position} (list has {len} tags)")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PromptagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptagsError::NotPromptagsDirectory(_) => 2,
            PromptagsError::PositionOutOfRange { .. } => 3,
            PromptagsError::Taxonomy(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PromptagsError::NotPromptagsDirectory(path) => {
                format!(
                    "Not a promptags directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'promptags init' in this directory to create a tag store\n\
                    • Navigate to an existing promptags directory\n\
                    • Set PROMPTAGS_ROOT environment variable to your store path",
                    path.display()
                )
            }
            PromptagsError::PositionOutOfRange { position, len } => {
                if *len == 0 {
                    format!(
                        "No tag at position {}: the tag list is empty\n\n\
                        Add tags first: promptags add 'sharp focus'",
                        position
                    )
                } else {
                    format!(
                        "No tag at position {} (list has {} tags)\n\n\
                        Positions start at 1. Use 'promptags list' to see them.",
                        position, len
                    )
                }
            }
            PromptagsError::Taxonomy(msg) => {
                format!(
                    "Taxonomy error: {}\n\n\
                    Expected format:\n\
                    [[category]]\n\
                    name = \"subject\"\n\
                    color = \"#e67e22\"\n\
                    tags = [\"cat\", \"dog\"]\n\n\
                    Category names must be unique. Clear a custom file with: promptags config taxonomy ''",
                    msg
                )
            }
            PromptagsError::Config(msg) => {
                if msg.contains("Invalid dialect") {
                    format!(
                        "{}\n\n\
                        Example: promptags dialect novelai",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PromptagsError
pub type Result<T> = std::result::Result<T, PromptagsError>;
