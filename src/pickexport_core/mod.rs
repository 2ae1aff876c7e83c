pub mod category;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod export;

pub use category::{ACCEPTED_TAG_NAME, Category};
pub use cli::{CategoryFilter, Cli, Commands, OutputFormat};
pub use config::ExportConfig;
pub use database::{Database, ImageRow, TagIds};
pub use error::{CopyFailures, PickexportError};
pub use export::{CategoryPlan, ExportStats, ImageFile};
