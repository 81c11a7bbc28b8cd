//! Infrastructure layer - Tag store persistence

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, TagRepository};
