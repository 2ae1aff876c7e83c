use crate::pickexport_core::category::Category;
use crate::pickexport_core::cli::{CategoryFilter, OutputFormat};
use crate::pickexport_core::config::ExportConfig;
use crate::pickexport_core::database::Database;
use crate::pickexport_core::error::{CopyFailures, PickexportError, Result};
use crossbeam_channel::unbounded;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A single accepted image selected for export.
#[derive(Debug, Clone, Serialize)]
pub struct ImageFile {
    pub name: String,
    pub source: PathBuf,
    pub category: Category,
}

/// Everything needed to materialize one category on disk.
#[derive(Debug)]
pub struct CategoryPlan {
    pub category: Category,
    pub dest_dir: PathBuf,
    pub files: Vec<ImageFile>,
}

/// Statistics from an export run.
#[derive(Debug, Default)]
pub struct ExportStats {
    pub files_copied: usize,
    pub categories_exported: usize,
}

/// Copy operation dispatched to the worker pool.
struct CopyJob<'a> {
    source: &'a Path,
    destination: PathBuf,
    category: Category,
    bar: ProgressBar,
}

/// Query each selected category and resolve its rows to source paths.
///
/// Categories with no accepted images produce no plan: their output
/// directory is never created and no copy is attempted for them.
pub fn plan_export(
    db: &Database,
    config: &ExportConfig,
    filter: CategoryFilter,
) -> Result<Vec<CategoryPlan>> {
    let tags = db.resolve_tags()?;

    let mut plans = Vec::new();
    for &category in filter.categories() {
        let rows = db.accepted_images(tags.for_category(category), tags.accepted)?;
        if rows.is_empty() {
            log::info!("No accepted images tagged '{}', skipping", category);
            continue;
        }

        log::info!("{} accepted images tagged '{}'", rows.len(), category);

        let files = rows
            .into_iter()
            .map(|row| ImageFile {
                source: config.source_path(&row.relative_path, &row.name),
                name: row.name,
                category,
            })
            .collect();

        plans.push(CategoryPlan {
            category,
            dest_dir: config.output_dir(category),
            files,
        });
    }

    Ok(plans)
}

/// Materialize the planned categories onto disk.
///
/// Destination directories are created up front, then every copy runs on a
/// pool of `jobs` workers, so a finished call means every dispatched copy
/// has completed. A failed copy does not stop the remaining ones; failures
/// are collected and reported as one `CopyFailed` error. Existing
/// destination files are overwritten.
pub fn run_export(plans: &[CategoryPlan], jobs: usize, dry_run: bool) -> Result<ExportStats> {
    if dry_run {
        println!("[DRY RUN] Would copy:");
        for plan in plans {
            println!(
                "  {}: {} files -> {}",
                plan.category,
                plan.files.len(),
                plan.dest_dir.display()
            );
        }
        return Ok(ExportStats::default());
    }

    // Each category's directory must exist before any of its copies start.
    // An already existing directory is left as is.
    for plan in plans {
        fs::create_dir_all(&plan.dest_dir)?;
    }

    let bar_style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .unwrap();

    let progress = MultiProgress::new();
    let mut bars = Vec::with_capacity(plans.len());
    let mut copy_jobs: Vec<CopyJob> = Vec::new();

    for plan in plans {
        let bar = progress.add(ProgressBar::new(plan.files.len() as u64).with_style(bar_style.clone()));
        bar.set_message(format!("Copying {}", plan.category));

        for file in &plan.files {
            copy_jobs.push(CopyJob {
                source: &file.source,
                destination: plan.dest_dir.join(&file.name),
                category: plan.category,
                bar: bar.clone(),
            });
        }

        bars.push((plan.category, bar));
    }

    let total_files = copy_jobs.len();
    let num_workers = jobs.max(1);
    let (job_tx, job_rx) = unbounded::<CopyJob>();
    let failures = Mutex::new(CopyFailures::default());

    rayon::scope(|s| {
        s.spawn(move |_| {
            for job in copy_jobs {
                if job_tx.send(job).is_err() {
                    log::error!("Failed to send job to worker channel");
                    break;
                }
            }
            drop(job_tx);
        });

        for _ in 0..num_workers {
            let job_rx = job_rx.clone();
            let failures = &failures;

            s.spawn(move |_| {
                for job in job_rx {
                    if let Err(e) = fs::copy(job.source, &job.destination) {
                        log::error!(
                            "Failed to copy {} -> {}: {}",
                            job.source.display(),
                            job.destination.display(),
                            e
                        );
                        failures.lock().unwrap().add(
                            job.category,
                            job.source.to_path_buf(),
                            job.destination,
                            e,
                        );
                    }
                    job.bar.inc(1);
                }
            });
        }
    });

    for (category, bar) in bars {
        bar.finish_with_message(format!("{} complete", category));
    }

    let failures = failures.into_inner().unwrap();
    if !failures.is_empty() {
        log::error!("{} files failed to copy", failures.len());
        return Err(PickexportError::CopyFailed(failures));
    }

    Ok(ExportStats {
        files_copied: total_files,
        categories_exported: plans.len(),
    })
}

/// Format planned files for the `list` command.
pub fn format_files(files: &[ImageFile], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Paths => files
            .iter()
            .map(|f| f.source.display().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            serde_json::to_string_pretty(files).unwrap_or_else(|_| "[]".to_string())
        }
        OutputFormat::Table => {
            let mut output = String::new();
            output.push_str(&format!("{:<40} {:>8}  {}\n", "Filename", "Category", "Source"));
            output.push_str(&format!("{}\n", "─".repeat(72)));
            for f in files {
                output.push_str(&format!(
                    "{:<40} {:>8}  {}\n",
                    truncate_str(&f.name, 40),
                    f.category.as_str(),
                    f.source.display()
                ));
            }
            output.push_str(&format!("\nTotal: {} files", files.len()));
            output
        }
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
