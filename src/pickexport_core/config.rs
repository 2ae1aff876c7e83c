use crate::pickexport_core::category::Category;
use std::path::PathBuf;

/// Default drive root holding the photo collection.
pub const DEFAULT_ROOT: &str = "/mnt/d";

/// Default collection folder under the root.
pub const DEFAULT_COLLECTION: &str = "pics";

/// digiKam database file name.
pub const DB_FILE_NAME: &str = "digikam4.db";

/// Output parent directory name under the root.
pub const OUTPUT_DIR_NAME: &str = "output";

/// Filesystem layout for an export run.
///
/// digiKam stores album paths relative to the collection root with a leading
/// separator; [`ExportConfig::source_path`] re-anchors them under
/// `<root>/<collection>`.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Drive root holding both the collection and the output tree.
    pub root: PathBuf,
    /// Collection folder under the root (albums plus the database file).
    pub collection: String,
    /// Database file name inside the collection folder.
    pub database: String,
    /// Output parent directory; `<root>/output` when not set.
    pub output: Option<PathBuf>,
}

impl ExportConfig {
    /// Path of the digiKam database file.
    pub fn database_path(&self) -> PathBuf {
        self.root.join(&self.collection).join(&self.database)
    }

    /// Absolute source path for an image, from its album-relative path and
    /// file name as stored in the database. Pure; never touches the
    /// filesystem.
    pub fn source_path(&self, relative_path: &str, name: &str) -> PathBuf {
        let album = relative_path.trim_start_matches('/');
        let mut path = self.root.join(&self.collection);
        if !album.is_empty() {
            path.push(album);
        }
        path.join(name)
    }

    /// Destination directory for a category.
    pub fn output_dir(&self, category: Category) -> PathBuf {
        let parent = match &self.output {
            Some(dir) => dir.clone(),
            None => self.root.join(OUTPUT_DIR_NAME),
        };
        parent.join(category.as_str())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            root: PathBuf::from(DEFAULT_ROOT),
            collection: DEFAULT_COLLECTION.to_string(),
            database: DB_FILE_NAME.to_string(),
            output: None,
        }
    }
}
