//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptags")]
#[command(about = "Prompt tag manager for image generation models", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tag store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Prompt dialect (novelai, stable-diffusion)
        #[arg(short, long, default_value = "stable-diffusion")]
        dialect: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show the tag list with categories
    List,

    /// Append tags to the list
    Add {
        /// Tags to add
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Remove the tag at a position
    Remove {
        /// Position in the list (starting at 1)
        position: usize,
    },

    /// Move a tag to a new position
    Move {
        /// Current position
        from: usize,

        /// New position
        to: usize,
    },

    /// Add one emphasis layer to a tag (resets after six layers)
    Emphasize {
        /// Position in the list (starting at 1)
        position: usize,
    },

    /// Remove emphasis from every tag
    ResetEmphasis,

    /// Show or switch the prompt dialect (switching strips emphasis)
    Dialect {
        /// Dialect to switch to (novelai, stable-diffusion)
        name: Option<String>,
    },

    /// Group tags by category, uncategorized first
    Arrange {
        /// Show the grouping without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace the list with tags from a comma-separated prompt
    Import {
        /// Prompt text, e.g. "(cat:1.2), 8k, sharp focus"
        prompt: String,
    },

    /// Print the prompt and record its tags in history
    Export {
        /// Keep emphasis in the stored list
        #[arg(long)]
        keep_emphasis: bool,
    },

    /// Remove every tag from the list (history is kept)
    Clear,

    /// Suggest tags from the taxonomy and history
    Suggest {
        /// Only show suggestions starting with this text
        prefix: Option<String>,

        /// Maximum number of suggestions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List categories in the active taxonomy
    Categories,
}
