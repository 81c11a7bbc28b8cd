//! Application layer - Use cases and orchestration

pub mod arrange;
pub mod edit_tags;
pub mod emphasize;
pub mod init;
pub mod manage_config;
pub mod suggest;
pub mod switch_dialect;
pub mod transfer;

pub use arrange::{AnnotatedTag, ArrangeService, CategoryGroup, CategoryLabel, Review};
pub use edit_tags::{AddReport, TagListService};
pub use emphasize::{emphasize, reset_emphasis};
pub use manage_config::ConfigService;
pub use suggest::SuggestService;
pub use switch_dialect::{switch_dialect, DialectSwitch};
pub use transfer::{export_prompt, import_tags, ExportReport};
