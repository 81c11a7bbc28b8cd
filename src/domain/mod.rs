//! Domain layer - Tag transformation engines

pub mod arranger;
pub mod classifier;
pub mod dialect;
pub mod emphasis;
pub mod prompt;
pub mod tag;
pub mod taxonomy;

pub use arranger::{arrange, Arrangement};
pub use dialect::Dialect;
pub use emphasis::{EmphasisLevel, MAX_EMPHASIS};
pub use tag::Tag;
pub use taxonomy::{Category, Taxonomy};
