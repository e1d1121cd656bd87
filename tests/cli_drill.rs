//! Integration tests for `drilltree drill`

mod common;

use std::fs;

use tempfile::tempdir;

use common::{assert_success, run, stderr, stdout, write_chart};

#[test]
fn drill_marks_active_level_from_chart() {
    let dir = tempdir().unwrap();
    write_chart(dir.path());

    let output = run(dir.path(), &["drill", "--chart", "chart.json"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "Country > [City]\n");
}

#[test]
fn active_flag_overrides_chart_state() {
    let dir = tempdir().unwrap();
    write_chart(dir.path());

    let output = run(dir.path(), &["drill", "--chart", "chart.json", "--active", "0"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "[Country] > City\n");
}

#[test]
fn drill_json_lists_segments() {
    let dir = tempdir().unwrap();
    write_chart(dir.path());

    let output = run(dir.path(), &["--json", "drill", "--chart", "chart.json"]);
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    let segments = json["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["label"], "Country");
    assert_eq!(segments[0]["is_active"], false);
    assert_eq!(segments[1]["is_active"], true);
}

#[test]
fn chart_without_drillable_fields_prints_nothing() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("chart.json"),
        r#"{"datas": [{"type": "group", "rows": [{"uid": "1", "colName": "Country"}]}]}"#,
    )
    .unwrap();

    let output = run(dir.path(), &["drill", "--chart", "chart.json"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "");
}

#[test]
fn missing_chart_fails() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["drill", "--chart", "missing.json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("chart config not found"));
}
