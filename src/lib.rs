//! promptags - Prompt tag manager
//!
//! Curates lists of prompt tags for image generation models: toggles
//! bracket emphasis in the NovelAI and Stable Diffusion dialects, and
//! groups tags by category against an ordered taxonomy.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PromptagsError;
