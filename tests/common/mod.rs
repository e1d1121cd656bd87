//! Shared fixtures for CLI integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_drilltree")
}

/// Run the binary in `dir` with a plain, isolated environment
pub fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("DRILLTREE_DEBOUNCE_MS")
        .env_remove("DRILLTREE_VERBOSITY")
        .env_remove("DRILLTREE_UNICODE")
        .args(args)
        .output()
        .unwrap()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Sales folder with two views, a root view, and two archived items
pub const WORKSPACE: &str = r#"{
  "views": [
    { "id": "f1", "name": "Sales", "isFolder": true, "index": 0 },
    { "id": "v1", "name": "Revenue", "parentId": "f1", "index": 0 },
    { "id": "v2", "name": "Cost", "parentId": "f1", "index": 1 },
    { "id": "v3", "name": "Overview", "index": 1 }
  ],
  "archived": [
    { "id": "a1", "name": "Old folder", "isFolder": true },
    { "id": "a2", "name": "Old revenue" }
  ]
}"#;

pub const CHART: &str = r#"{
  "datas": [
    { "type": "group", "drillable": true, "rows": [
      { "uid": "1", "colName": "Country" },
      { "uid": "2", "colName": "City" }
    ]},
    { "type": "aggregate", "rows": [
      { "uid": "3", "colName": "amount", "aggregate": "sum", "category": "measure" }
    ]}
  ],
  "drillOption": { "current": 1 }
}"#;

pub fn write_workspace(dir: &Path) -> PathBuf {
    let path = dir.join("workspace.json");
    fs::write(&path, WORKSPACE).unwrap();
    path
}

pub fn write_chart(dir: &Path) -> PathBuf {
    let path = dir.join("chart.json");
    fs::write(&path, CHART).unwrap();
    path
}
