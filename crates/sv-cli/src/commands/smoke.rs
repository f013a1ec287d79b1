use std::path::PathBuf;

use anyhow::{Context, bail};
use sv_config::{SmokeConfig, SvConfig};
use sv_smoke::{SmokeReport, failure_lines, render_table, run_rowcount_checks, write_json_report};

use crate::cli::root_commands::SmokeArgs;

/// Handle `svo smoke`.
pub fn handle(args: &SmokeArgs, config: &SvConfig) -> anyhow::Result<()> {
    let (processed_dir, sql, json_report) = resolve_paths(args, &config.smoke);

    let records = run_rowcount_checks(&processed_dir, &sql)?;
    println!("{}", render_table(&records));

    let report = SmokeReport::from_records(records);
    if let Some(path) = json_report {
        write_json_report(&path, &report)
            .with_context(|| format!("failed to write JSON report to {}", path.display()))?;
        tracing::debug!(path = %path.display(), "smoke report written");
    }

    if report.has_failures() {
        for line in failure_lines(&report.results) {
            eprintln!("{line}");
        }
        bail!(
            "{failures} of {total} datasets have a non-positive rowcount",
            failures = report.summary.failures,
            total = report.summary.total_files
        );
    }
    Ok(())
}

/// Command-line flags win; anything unset falls back to the loaded config.
fn resolve_paths(args: &SmokeArgs, config: &SmokeConfig) -> (PathBuf, PathBuf, Option<PathBuf>) {
    let processed_dir = args
        .processed_dir
        .clone()
        .unwrap_or_else(|| config.processed_dir.clone());
    let sql = args.sql.clone().unwrap_or_else(|| config.sql.clone());
    let json_report = args.json_report.clone().or_else(|| config.json_report.clone());
    (processed_dir, sql, json_report)
}
