//! Dataset discovery under the processed-data root.
//!
//! Walks the root in raw mode (no gitignore semantics, hidden directories
//! included) so coverage matches exactly what is on disk, then sorts for a
//! stable report order across runs.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::SmokeError;

/// File extension that marks a processed dataset.
pub const DATASET_EXTENSION: &str = "csv";

/// Recursively list every dataset file under `processed_dir`.
///
/// Returns regular files only, lexicographically sorted by path components.
/// Unreadable directory entries are skipped rather than treated as fatal.
/// A root that exists but is not a directory discovers nothing, even when
/// it names a `*.csv` file itself.
///
/// # Errors
///
/// Returns [`SmokeError::ProcessedDirNotFound`] if `processed_dir` does not
/// exist. An empty result is not an error here; the pipeline treats it as
/// one separately.
pub fn discover_datasets(processed_dir: &Path) -> Result<Vec<PathBuf>, SmokeError> {
    if !processed_dir.exists() {
        return Err(SmokeError::ProcessedDirNotFound(
            processed_dir.to_path_buf(),
        ));
    }
    if !processed_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut builder = WalkBuilder::new(processed_dir);
    builder.standard_filters(false);
    builder.hidden(false);

    let mut datasets: Vec<PathBuf> = builder
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == DATASET_EXTENSION)
        })
        .collect();
    datasets.sort();

    tracing::debug!(count = datasets.len(), "discovered dataset files");
    Ok(datasets)
}
