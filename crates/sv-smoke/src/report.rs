//! Table and JSON rendering for smoke-check results.
//!
//! The text table goes to stdout; the JSON report is written only when the
//! caller supplies a path. Both present records in discovery order.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SmokeError;
use crate::record::SmokeRecord;

/// Table column headers, in order.
const HEADERS: [&str; 3] = ["dataset", "rowcount", "status"];

/// Render the aligned text table.
///
/// Column widths are the larger of the header length and the widest cell;
/// `dataset` is left-aligned, `rowcount` right-aligned, `status` unpadded.
/// The second line is one dash run per column, each as wide as its column,
/// with two-space gaps. With no records the table is header and separator
/// only.
#[must_use]
pub fn render_table(records: &[SmokeRecord]) -> String {
    let dataset_width = records
        .iter()
        .map(|record| record.relative_path.len())
        .max()
        .unwrap_or_default()
        .max(HEADERS[0].len());
    let rowcount_width = records
        .iter()
        .map(|record| record.rowcount.to_string().len())
        .max()
        .unwrap_or_default()
        .max(HEADERS[1].len());

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format!(
        "{:<dataset_width$}  {:>rowcount_width$}  {}",
        HEADERS[0], HEADERS[1], HEADERS[2]
    ));
    lines.push(format!(
        "{}  {}  {}",
        "-".repeat(dataset_width),
        "-".repeat(rowcount_width),
        "-".repeat(HEADERS[2].len())
    ));
    for record in records {
        lines.push(format!(
            "{:<dataset_width$}  {:>rowcount_width$}  {}",
            record.relative_path,
            record.rowcount,
            record.status.as_str()
        ));
    }
    lines.join("\n")
}

/// One stderr line per failing record, in record order.
#[must_use]
pub fn failure_lines(records: &[SmokeRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|record| !record.status.is_pass())
        .map(|record| {
            format!(
                "ERROR: Dataset {} has non-positive rowcount: {}",
                record.relative_path, record.rowcount
            )
        })
        .collect()
}

/// Summary block of the JSON report.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct ReportSummary {
    /// Number of discovered dataset files.
    pub total_files: usize,
    /// Number of records whose status is not `pass`.
    pub failures: usize,
}

/// The persisted JSON report: summary plus every record in discovery order.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct SmokeReport {
    pub summary: ReportSummary,
    pub results: Vec<SmokeRecord>,
}

impl SmokeReport {
    /// Aggregate records into a report, preserving their order.
    #[must_use]
    pub fn from_records(results: Vec<SmokeRecord>) -> Self {
        let failures = results
            .iter()
            .filter(|record| !record.status.is_pass())
            .count();
        Self {
            summary: ReportSummary {
                total_files: results.len(),
                failures,
            },
            results,
        }
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.summary.failures > 0
    }
}

/// Write the report as pretty-printed JSON with a trailing newline,
/// creating parent directories as needed.
///
/// # Errors
///
/// Returns [`SmokeError::Io`] if directories or the file cannot be written,
/// [`SmokeError::Json`] if serialization fails.
pub fn write_json_report(path: &Path, report: &SmokeReport) -> Result<(), SmokeError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut body = serde_json::to_string_pretty(report)?;
    body.push('\n');
    fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::record::SmokeStatus;

    fn record(relative_path: &str, rowcount: i64) -> SmokeRecord {
        SmokeRecord {
            dataset_id: relative_path
                .split('/')
                .next()
                .unwrap_or(relative_path)
                .to_string(),
            relative_path: relative_path.to_string(),
            absolute_path: format!("/srv/data/processed/{relative_path}"),
            rowcount,
            status: SmokeStatus::from_rowcount(rowcount),
        }
    }

    // ── Text table ──────────────────────────────────────────────────────

    #[test]
    fn table_uses_header_widths_for_short_cells() {
        let records = vec![record("a/x.csv", 10), record("b/y.csv", 0)];

        let expected = [
            "dataset  rowcount  status",
            "-------  --------  ------",
            "a/x.csv        10  pass",
            "b/y.csv         0  fail",
        ]
        .join("\n");
        assert_eq!(render_table(&records), expected);
    }

    #[test]
    fn table_widens_to_the_longest_cell() {
        let records = vec![record("budgets/2023.csv", 9999)];

        let expected = [
            "dataset           rowcount  status",
            "----------------  --------  ------",
            "budgets/2023.csv      9999  pass",
        ]
        .join("\n");
        assert_eq!(render_table(&records), expected);
    }

    #[test]
    fn empty_table_is_header_and_separator() {
        let expected = ["dataset  rowcount  status", "-------  --------  ------"].join("\n");
        assert_eq!(render_table(&[]), expected);
    }

    // ── Failure lines ───────────────────────────────────────────────────

    #[test]
    fn failure_lines_name_failing_records_only() {
        let records = vec![record("a/x.csv", 10), record("b/y.csv", 0), record("c/z.csv", -4)];

        let lines = failure_lines(&records);
        assert_eq!(
            lines,
            vec![
                "ERROR: Dataset b/y.csv has non-positive rowcount: 0",
                "ERROR: Dataset c/z.csv has non-positive rowcount: -4",
            ]
        );
    }

    // ── JSON report ─────────────────────────────────────────────────────

    #[test]
    fn summary_counts_failures() {
        let report =
            SmokeReport::from_records(vec![record("a/x.csv", 10), record("b/y.csv", 0)]);

        assert_eq!(report.summary.total_files, 2);
        assert_eq!(report.summary.failures, 1);
        assert!(report.has_failures());

        let clean = SmokeReport::from_records(vec![record("a/x.csv", 5)]);
        assert!(!clean.has_failures());
    }

    #[test]
    fn json_report_round_trips() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = tmp.path().join("reports").join("smoke").join("report.json");

        let report =
            SmokeReport::from_records(vec![record("a/x.csv", 10), record("b/y.csv", 0)]);
        write_json_report(&path, &report).expect("report writes");

        let body = std::fs::read_to_string(&path).expect("report exists");
        assert!(body.ends_with('\n'));
        assert!(body.contains("\n  \"summary\": {"));

        let parsed: SmokeReport = serde_json::from_str(&body).expect("report parses");
        assert_eq!(parsed, report);
        assert_eq!(parsed.summary.total_files, 2);
        assert_eq!(parsed.summary.failures, 1);
    }
}
