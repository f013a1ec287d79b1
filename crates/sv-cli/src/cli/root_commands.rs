use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate processed datasets with DuckDB rowcount checks.
    Smoke(SmokeArgs),
    /// Build the Playwright visual-regression baseline.
    Baseline(BaselineArgs),
}

/// Arguments for `svo smoke`. Unset flags fall back to the loaded config.
#[derive(Clone, Debug, Args)]
pub struct SmokeArgs {
    /// Directory scanned recursively for *.csv datasets.
    #[arg(long)]
    pub processed_dir: Option<PathBuf>,
    /// SQL file holding the rowcount query (single `?` placeholder).
    #[arg(long)]
    pub sql: Option<PathBuf>,
    /// Write the JSON report to this path.
    #[arg(long)]
    pub json_report: Option<PathBuf>,
}

/// Arguments for `svo baseline`.
#[derive(Clone, Debug, Args)]
pub struct BaselineArgs {
    /// Repo root of the npm monorepo (defaults to the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}
