//! Smoke-check error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmokeError {
    /// The processed-data root does not exist.
    #[error("Processed data directory not found: {0}")]
    ProcessedDirNotFound(PathBuf),

    /// The processed-data root exists but holds no `*.csv` files.
    #[error("No CSV files found in processed directory: {0}")]
    NoDatasets(PathBuf),

    /// The rowcount SQL template does not exist.
    #[error("DuckDB SQL template not found: {0}")]
    TemplateNotFound(PathBuf),

    /// The rowcount query produced no row at all.
    #[error("DuckDB query returned no result for {dataset}")]
    NoResult { dataset: PathBuf },

    /// The rowcount query produced a value no integer can represent.
    #[error("DuckDB query returned a non-integer result for {dataset}: {value}")]
    NonIntegerResult { dataset: PathBuf, value: String },

    #[error("duckdb error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
