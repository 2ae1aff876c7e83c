use crate::pickexport_core::category::Category;
use crate::pickexport_core::config::{
    DB_FILE_NAME, DEFAULT_COLLECTION, DEFAULT_ROOT, ExportConfig,
};
use clap::{Parser, Subcommand, ValueEnum};
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Export curator-accepted digiKam images into per-category folders")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Drive root holding the photo collection
    #[arg(long, default_value = DEFAULT_ROOT, global = true)]
    pub root: PathBuf,

    /// Collection folder under the root (albums plus the database file)
    #[arg(long, default_value = DEFAULT_COLLECTION, global = true)]
    pub collection: String,

    /// digiKam database file name inside the collection folder
    #[arg(long, default_value = DB_FILE_NAME, global = true)]
    pub database: String,

    /// Output parent directory (defaults to <root>/output)
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Enable file logging to pickexport.log
    #[arg(long = "log", global = true)]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug, global = true)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Filesystem layout assembled from the global path options.
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            root: self.root.clone(),
            collection: self.collection.clone(),
            database: self.database.clone(),
            output: self.output.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy accepted images into per-category output folders
    Export {
        /// Restrict the export to a single category
        #[arg(long, value_enum, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,

        /// Number of copy workers
        #[arg(long, default_value_t = num_cpus::get())]
        jobs: usize,

        /// Show what would be copied without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the accepted images an export would copy
    List {
        /// Restrict the listing to a single category
        #[arg(long, value_enum, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Paths)]
        output_format: OutputFormat,
    },

    /// Show the resolved tag ids and how many images carry each tag
    Tags,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryFilter {
    Bride,
    Groom,
    Common,
    All,
}

impl CategoryFilter {
    /// Categories selected by this filter, in fixed order.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            CategoryFilter::Bride => &[Category::Bride],
            CategoryFilter::Groom => &[Category::Groom],
            CategoryFilter::Common => &[Category::Common],
            CategoryFilter::All => &Category::ALL,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One source path per line
    Paths,
    /// JSON output
    Json,
    /// Detailed table format
    Table,
}
