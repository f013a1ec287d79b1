//! Per-dataset result records.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Pass/fail label derived from a dataset's row count.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokeStatus {
    Pass,
    Fail,
}

impl SmokeStatus {
    /// `Pass` iff the count is strictly positive; zero and negative counts
    /// both fail.
    #[must_use]
    pub const fn from_rowcount(rowcount: i64) -> Self {
        if rowcount > 0 { Self::Pass } else { Self::Fail }
    }

    /// Label as rendered in the text table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// One smoke-check result for one discovered dataset file.
///
/// Created once per file, never mutated, and discarded at process exit;
/// the optional JSON report is the only persistence.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct SmokeRecord {
    /// First component of the root-relative path (see [`build_record`]).
    pub dataset_id: String,
    /// Path relative to the scanned root.
    pub relative_path: String,
    /// Absolute resolved path.
    pub absolute_path: String,
    /// Row count reported by the engine.
    pub rowcount: i64,
    /// Derived pass/fail label.
    pub status: SmokeStatus,
}

/// Build the record for one dataset file. Pure; all I/O happens before.
///
/// `dataset` is the path as discovered (rooted at `processed_dir`) and
/// `absolute` its resolved form. The dataset identifier is the first
/// component of the root-relative path; only when that path has no
/// components at all does it fall back to the file stem of `dataset`. A
/// file sitting directly under the root is therefore identified by its full
/// file name, extension included.
#[must_use]
pub fn build_record(
    processed_dir: &Path,
    dataset: &Path,
    absolute: &Path,
    rowcount: i64,
) -> SmokeRecord {
    let relative = dataset.strip_prefix(processed_dir).unwrap_or(dataset);
    let dataset_id = relative.components().next().map_or_else(
        || {
            dataset
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        },
        |first| first.as_os_str().to_string_lossy().into_owned(),
    );

    SmokeRecord {
        dataset_id,
        relative_path: relative.to_string_lossy().into_owned(),
        absolute_path: absolute.to_string_lossy().into_owned(),
        rowcount,
        status: SmokeStatus::from_rowcount(rowcount),
    }
}
