use anyhow::Result;
use clap::Parser;
use pickexport::pickexport_core::export::{format_files, plan_export, run_export};
use pickexport::pickexport_core::{ACCEPTED_TAG_NAME, Category, Cli, Commands, Database, ImageFile};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create("pickexport.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let config = cli.export_config();

    match cli.command {
        Commands::Export {
            category,
            jobs,
            dry_run,
        } => {
            let db = Database::open(&config.database_path())?;
            let plans = plan_export(&db, &config, category)?;
            let requested = category.categories().len();

            let stats = run_export(&plans, jobs, dry_run)?;

            if !dry_run {
                println!("\nExport complete!");
                println!("  {} files copied", stats.files_copied);
                println!("  {} categories exported", stats.categories_exported);
                if requested > stats.categories_exported {
                    println!(
                        "  {} categories had no accepted images",
                        requested - stats.categories_exported
                    );
                }
            }
        }

        Commands::List {
            category,
            output_format,
        } => {
            let db = Database::open(&config.database_path())?;
            let plans = plan_export(&db, &config, category)?;
            let files: Vec<ImageFile> = plans.into_iter().flat_map(|p| p.files).collect();
            println!("{}", format_files(&files, &output_format));
        }

        Commands::Tags => {
            let db = Database::open(&config.database_path())?;
            let tags = db.resolve_tags()?;

            println!("Database: {}", config.database_path().display());
            println!("─────────────────────────────────");
            for category in Category::ALL {
                let id = tags.for_category(category);
                println!(
                    "{:<20} id {:>5} {:>8} tagged",
                    category.as_str(),
                    id,
                    db.tag_usage_count(id)?
                );
            }
            println!(
                "{:<20} id {:>5} {:>8} tagged",
                ACCEPTED_TAG_NAME,
                tags.accepted,
                db.tag_usage_count(tags.accepted)?
            );
        }
    }

    Ok(())
}
