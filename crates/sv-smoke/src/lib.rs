//! Rowcount smoke checks for processed CSV datasets.
//!
//! Walks a processed-data directory for `*.csv` files, counts each file's
//! rows through an embedded `DuckDB` connection using a SQL template with a
//! single `?` placeholder, and aggregates the outcomes into a text table and
//! an optional JSON report. A dataset passes when its rowcount is strictly
//! positive.

pub mod discover;
pub mod error;
pub mod query;
pub mod record;
pub mod report;

use std::path::Path;

pub use discover::{DATASET_EXTENSION, discover_datasets};
pub use error::SmokeError;
pub use query::{RowcountEngine, load_rowcount_query};
pub use record::{SmokeRecord, SmokeStatus, build_record};
pub use report::{
    ReportSummary, SmokeReport, failure_lines, render_table, write_json_report,
};

/// Run the full smoke pipeline: discover datasets under `processed_dir`,
/// load the rowcount template at `sql_path`, and count every dataset's rows
/// over one in-memory `DuckDB` connection.
///
/// Records come back in discovery order (lexicographic by path). A
/// non-positive rowcount is recorded as a failing status, not an error.
///
/// # Errors
///
/// Returns [`SmokeError::ProcessedDirNotFound`] if `processed_dir` does not
/// exist, [`SmokeError::NoDatasets`] if it holds no `*.csv` files,
/// [`SmokeError::TemplateNotFound`] if `sql_path` does not exist, and the
/// per-dataset query errors otherwise.
pub fn run_rowcount_checks(
    processed_dir: &Path,
    sql_path: &Path,
) -> Result<Vec<SmokeRecord>, SmokeError> {
    let datasets = discover_datasets(processed_dir)?;
    if datasets.is_empty() {
        return Err(SmokeError::NoDatasets(processed_dir.to_path_buf()));
    }

    let query = load_rowcount_query(sql_path)?;
    let engine = RowcountEngine::open_in_memory()?;

    let mut records = Vec::with_capacity(datasets.len());
    for dataset in &datasets {
        let rowcount = engine.rowcount(&query, dataset)?;
        let absolute = dataset.canonicalize()?;
        tracing::debug!(dataset = %dataset.display(), rowcount, "counted dataset rows");
        records.push(build_record(processed_dir, dataset, &absolute, rowcount));
    }
    Ok(records)
}
