//! Smoke-check configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default root of the processed datasets.
fn default_processed_dir() -> PathBuf {
    PathBuf::from("data/processed")
}

/// Default rowcount SQL template.
fn default_sql() -> PathBuf {
    PathBuf::from("duckdb/smoke_rowcount.sql")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmokeConfig {
    /// Directory scanned recursively for `*.csv` datasets.
    #[serde(default = "default_processed_dir")]
    pub processed_dir: PathBuf,

    /// SQL file holding the rowcount query (single `?` placeholder).
    #[serde(default = "default_sql")]
    pub sql: PathBuf,

    /// Where to persist the JSON report. `None` disables the report.
    #[serde(default)]
    pub json_report: Option<PathBuf>,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            processed_dir: default_processed_dir(),
            sql: default_sql(),
            json_report: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SmokeConfig::default();
        assert_eq!(config.processed_dir, PathBuf::from("data/processed"));
        assert_eq!(config.sql, PathBuf::from("duckdb/smoke_rowcount.sql"));
        assert!(config.json_report.is_none());
    }
}
