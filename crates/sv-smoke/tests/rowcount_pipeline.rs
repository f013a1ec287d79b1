//! End-to-end pipeline tests over real files and a real `DuckDB` connection.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use sv_smoke::{SmokeError, SmokeReport, failure_lines, run_rowcount_checks};
use tempfile::TempDir;

/// Typed template so header detection never depends on sniffing heuristics.
const TYPED_ROWCOUNT_SQL: &str =
    "SELECT count(*) AS rowcount FROM read_csv(?, header = true, columns = {'id': 'INTEGER', 'name': 'VARCHAR'});";

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dirs");
    }
    fs::write(path, contents).expect("file writes");
}

fn typed_template(root: &Path) -> PathBuf {
    let sql_path = root.join("duckdb").join("rowcount.sql");
    write_file(&sql_path, TYPED_ROWCOUNT_SQL);
    sql_path
}

#[test]
fn mixed_statuses_report_in_discovery_order() {
    let tmp = TempDir::new().expect("temp dir");
    let processed = tmp.path().join("processed");
    write_file(&processed.join("a/x.csv"), "id,name\n1,alpha\n2,beta\n");
    write_file(&processed.join("b/y.csv"), "id,name\n");
    let sql_path = typed_template(tmp.path());

    let records = run_rowcount_checks(&processed, &sql_path).expect("pipeline runs");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].relative_path, "a/x.csv");
    assert_eq!(records[0].dataset_id, "a");
    assert_eq!(records[0].rowcount, 2);
    assert!(records[0].status.is_pass());
    assert_eq!(records[1].relative_path, "b/y.csv");
    assert_eq!(records[1].dataset_id, "b");
    assert_eq!(records[1].rowcount, 0);
    assert!(!records[1].status.is_pass());
    for record in &records {
        assert!(Path::new(&record.absolute_path).is_absolute());
    }

    let lines = failure_lines(&records);
    assert_eq!(
        lines,
        vec!["ERROR: Dataset b/y.csv has non-positive rowcount: 0"]
    );

    let report = SmokeReport::from_records(records);
    assert_eq!(report.summary.total_files, 2);
    assert_eq!(report.summary.failures, 1);
}

#[test]
fn missing_processed_dir_is_reported_by_path() {
    let tmp = TempDir::new().expect("temp dir");
    let processed = tmp.path().join("absent");
    let sql_path = typed_template(tmp.path());

    let error = run_rowcount_checks(&processed, &sql_path).expect_err("must fail");
    assert!(matches!(error, SmokeError::ProcessedDirNotFound(path) if path == processed));
}

#[test]
fn processed_tree_without_csv_files_is_an_error() {
    let tmp = TempDir::new().expect("temp dir");
    let processed = tmp.path().join("processed");
    write_file(&processed.join("notes/readme.txt"), "not a dataset\n");
    let sql_path = typed_template(tmp.path());

    let error = run_rowcount_checks(&processed, &sql_path).expect_err("must fail");
    assert!(matches!(error, SmokeError::NoDatasets(path) if path == processed));
}

#[test]
fn csv_file_as_processed_root_is_an_empty_discovery() {
    let tmp = TempDir::new().expect("temp dir");
    let file_root = tmp.path().join("census.csv");
    write_file(&file_root, "id,name\n1,alpha\n");
    let sql_path = typed_template(tmp.path());

    let error = run_rowcount_checks(&file_root, &sql_path).expect_err("must fail");
    assert!(matches!(error, SmokeError::NoDatasets(path) if path == file_root));
}

#[test]
fn missing_template_is_reported_before_any_query() {
    let tmp = TempDir::new().expect("temp dir");
    let processed = tmp.path().join("processed");
    write_file(&processed.join("a/x.csv"), "id,name\n1,alpha\n");
    let sql_path = tmp.path().join("duckdb").join("absent.sql");

    let error = run_rowcount_checks(&processed, &sql_path).expect_err("must fail");
    assert!(matches!(error, SmokeError::TemplateNotFound(path) if path == sql_path));
}

#[test]
fn default_template_counts_rows() {
    let workspace_root: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("workspace root")
        .to_path_buf();
    let sql_path = workspace_root.join("duckdb").join("smoke_rowcount.sql");

    let tmp = TempDir::new().expect("temp dir");
    let processed = tmp.path().join("processed");
    write_file(&processed.join("census/rows.csv"), "id,value\n1,10\n2,20\n3,30\n");

    let records = run_rowcount_checks(&processed, &sql_path).expect("pipeline runs");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rowcount, 3);
    assert!(records[0].status.is_pass());
}

#[test]
fn report_written_through_pipeline_parses_back() {
    let tmp = TempDir::new().expect("temp dir");
    let processed = tmp.path().join("processed");
    write_file(&processed.join("census/rows.csv"), "id,name\n1,alpha\n");
    let sql_path = typed_template(tmp.path());

    let records = run_rowcount_checks(&processed, &sql_path).expect("pipeline runs");
    let report = SmokeReport::from_records(records);

    let report_path = tmp.path().join("reports").join("smoke.json");
    sv_smoke::write_json_report(&report_path, &report).expect("report writes");

    let body = fs::read_to_string(&report_path).expect("report exists");
    let parsed: SmokeReport = serde_json::from_str(&body).expect("report parses");
    assert_eq!(parsed, report);
    assert!(!parsed.has_failures());
}
