use std::fs;
use std::path::PathBuf;

use org_chart::io::records;
use org_chart::report;
use org_chart::{ChartError, ValidationError};
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn full_report_lists_chart_then_total() {
    let hierarchy = report::load_hierarchy(&fixture("org.json")).expect("hierarchy loaded");
    let text = report::render_report(&hierarchy, None).expect("report rendered");

    assert_eq!(
        text,
        "Employee hierarchy:\n\
         └─Jamie\n  ├─Alan\n  │ ├─Alex\n  │ └─Bea\n  └─Martin\n    ├─David\n    └─Steve\n\
         Total salaries: $625,000.\n"
    );
}

#[test]
fn subtree_report_covers_only_that_branch() {
    let hierarchy = report::load_hierarchy(&fixture("org.json")).expect("hierarchy loaded");
    let text = report::render_report(&hierarchy, Some(3)).expect("report rendered");

    assert_eq!(
        text,
        "Employee hierarchy:\n└─Martin\n  ├─David\n  └─Steve\nTotal salaries: $235,000.\n"
    );
    assert_eq!(report::select_total(&hierarchy, Some(3)).expect("total"), 235_000);
}

#[test]
fn unknown_subtree_head_is_an_error() {
    let hierarchy = report::load_hierarchy(&fixture("org.json")).expect("hierarchy loaded");

    let error = report::render_report(&hierarchy, Some(404)).expect_err("unknown id");
    assert!(matches!(error, ChartError::UnknownEmployee(404)));
    assert!(matches!(
        report::select_total(&hierarchy, Some(404)),
        Err(ChartError::UnknownEmployee(404))
    ));
}

#[test]
fn validation_failures_keep_their_kind() {
    let error = report::load_hierarchy(&fixture("two-ceos.json")).expect_err("invalid input");

    assert!(matches!(
        error,
        ChartError::Validation(ValidationError::MultipleRoots { .. })
    ));
    assert!(
        error
            .to_string()
            .contains("found multiple employees without a manager")
    );
}

#[test]
fn malformed_json_is_a_decoding_error() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, r#"[{"id": 1, "name": "A""#).expect("input written");

    let error = records::read_records(&path).expect_err("decoding fails");
    assert!(matches!(error, ChartError::Json(_)));

    let error = records::parse_records(r#"[{"id": -1, "name": "A", "salary": 1, "manager_id": 0}]"#)
        .expect_err("negative ids are rejected");
    assert!(matches!(error, ChartError::Json(_)));
}

#[test]
fn unreadable_source_is_an_io_error() {
    let temp_dir = tempdir().expect("temporary directory");
    let error = report::load_hierarchy(&temp_dir.path().join("absent.json"))
        .expect_err("missing file");

    assert!(matches!(error, ChartError::Io(_)));
}

#[test]
fn records_ignore_unknown_fields() {
    let decoded = records::parse_records(
        r#"[{"id": 1, "name": "A", "salary": 10, "manager_id": 0, "title": "CEO"}]"#,
    )
    .expect("records decoded");

    assert_eq!(decoded.len(), 1);
    assert!(decoded[0].is_root());
    assert_eq!(decoded[0].salary, 10);
}
