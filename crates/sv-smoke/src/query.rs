//! Rowcount query loading and execution.
//!
//! The query template is opaque SQL with exactly one `?` placeholder for a
//! dataset file path. It is read verbatim and never parsed or validated; the
//! engine is the sole interpreter.

use std::fs;
use std::path::Path;

use duckdb::types::Value;
use duckdb::{Connection, params};

use crate::error::SmokeError;

/// Read the rowcount query template from disk, verbatim.
///
/// # Errors
///
/// Returns [`SmokeError::TemplateNotFound`] if `sql_path` does not exist, or
/// [`SmokeError::Io`] if it cannot be read.
pub fn load_rowcount_query(sql_path: &Path) -> Result<String, SmokeError> {
    if !sql_path.exists() {
        return Err(SmokeError::TemplateNotFound(sql_path.to_path_buf()));
    }
    Ok(fs::read_to_string(sql_path)?)
}

/// Executes the rowcount query against one dataset file at a time.
///
/// Owns a single `DuckDB` connection for the lifetime of a smoke-check run.
/// The connection is released when the engine is dropped, on every exit path.
pub struct RowcountEngine {
    conn: Connection,
}

impl RowcountEngine {
    /// Open an in-memory engine.
    ///
    /// # Errors
    ///
    /// Returns [`SmokeError::DuckDb`] if the connection cannot be opened.
    pub fn open_in_memory() -> Result<Self, SmokeError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Run `query` with `dataset` bound as its sole parameter and return the
    /// first column of the single result row as an integer.
    ///
    /// # Errors
    ///
    /// - [`SmokeError::NoResult`] if the query returns no row.
    /// - [`SmokeError::NonIntegerResult`] if the first column is not an
    ///   integer (NULL, floating-point, and text values are all rejected, as
    ///   are integers too wide for `i64`).
    /// - [`SmokeError::DuckDb`] for any engine-level failure.
    pub fn rowcount(&self, query: &str, dataset: &Path) -> Result<i64, SmokeError> {
        let mut stmt = self.conn.prepare(query)?;
        let bound_path = dataset.to_string_lossy();
        let mut rows = stmt.query(params![bound_path.as_ref()])?;

        let Some(row) = rows.next()? else {
            return Err(SmokeError::NoResult {
                dataset: dataset.to_path_buf(),
            });
        };

        let value: Value = row.get(0)?;
        integer_value(&value).ok_or_else(|| SmokeError::NonIntegerResult {
            dataset: dataset.to_path_buf(),
            value: format!("{value:?}"),
        })
    }
}

/// Checked conversion of a `DuckDB` scalar to `i64`.
///
/// Accepts every integer width the engine can return, signed and unsigned,
/// HUGEINT included. Everything else is `None`.
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::TinyInt(v) => Some(i64::from(*v)),
        Value::SmallInt(v) => Some(i64::from(*v)),
        Value::Int(v) => Some(i64::from(*v)),
        Value::BigInt(v) => Some(*v),
        Value::HugeInt(v) => i64::try_from(*v).ok(),
        Value::UTinyInt(v) => Some(i64::from(*v)),
        Value::USmallInt(v) => Some(i64::from(*v)),
        Value::UInt(v) => Some(i64::from(*v)),
        Value::UBigInt(v) => i64::try_from(*v).ok(),
        _ => None,
    }
}
