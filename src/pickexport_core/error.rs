use crate::pickexport_core::category::Category;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickexportError {
    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database not found at {0}")]
    DatabaseNotFound(PathBuf),

    #[error("Tag not found in database: '{0}'")]
    TagNotFound(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to copy files:\n{0}")]
    CopyFailed(CopyFailures),
}

/// Details about files that failed to copy.
#[derive(Debug, Default)]
pub struct CopyFailures {
    pub failures: Vec<CopyFailure>,
}

#[derive(Debug)]
pub struct CopyFailure {
    pub category: Category,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: std::io::Error,
}

impl std::fmt::Display for CopyFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for failure in &self.failures {
            writeln!(
                f,
                "  [{}] {} -> {}: {}",
                failure.category,
                failure.source.display(),
                failure.destination.display(),
                failure.error
            )?;
        }
        Ok(())
    }
}

impl CopyFailures {
    pub fn add(
        &mut self,
        category: Category,
        source: PathBuf,
        destination: PathBuf,
        error: std::io::Error,
    ) {
        self.failures.push(CopyFailure {
            category,
            source,
            destination,
            error,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }
}

/// Result type for pickexport operations.
pub type Result<T> = std::result::Result<T, PickexportError>;
