#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn write_model(dir: &Path) -> std::path::PathBuf {
    let model = json!({
        "format_version": "1.2.0",
        "packages": [{ "name": "java.util" }],
        "types": [
            {
                "name": "List",
                "package": "java.util",
                "kind": "interface",
                "members": [{ "name": "size", "kind": "method", "signature": "()" }]
            },
            { "name": "ArrayList", "package": "java.util", "kind": "class", "interfaces": ["java.util.List"] }
        ]
    });
    let path = dir.join("model.json");
    fs::write(&path, model.to_string()).unwrap();
    path
}

fn docwright() -> Command {
    let mut cmd = Command::cargo_bin("docwright").unwrap();
    cmd.env_remove("DOCWRIGHT_OUTPUT_DIR")
        .env_remove("DOCWRIGHT_CHARSET")
        .env_remove("DOCWRIGHT_LOG");
    cmd
}

#[test]
fn generate_writes_pages_and_reports_them() {
    let dir = TempDir::new().unwrap();
    let model = write_model(dir.path());
    let out = dir.path().join("site");

    docwright()
        .arg(&model)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+ pages written to .*site, 0 diagnostics\n$").unwrap());

    assert!(out.join("index.html").exists());
    assert!(out.join("java/util/List.html").exists());
    assert!(out.join("type-search-index.js").exists());
}

#[test]
fn options_reach_the_pages() {
    let dir = TempDir::new().unwrap();
    let model = write_model(dir.path());
    let out = dir.path().join("site");

    docwright()
        .arg(&model)
        .args(["--window-title", "Acme", "--no-index", "--group", "Utilities=java.util*"])
        .env("DOCWRIGHT_OUTPUT_DIR", &out)
        .env("DOCWRIGHT_CHARSET", "ISO-8859-1")
        .assert()
        .success();

    let overview = fs::read_to_string(out.join("overview-summary.html")).unwrap();
    assert!(overview.contains("<title>Overview (Acme)</title>"));
    assert!(overview.contains("<meta charset=\"ISO-8859-1\">"));
    assert!(overview.contains(">Utilities</button>"));
    assert!(!out.join("index-all.html").exists());
}

#[test]
fn quiet_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let model = write_model(dir.path());

    docwright()
        .arg(&model)
        .arg("-q")
        .arg("-d")
        .arg(dir.path().join("site"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_mode_filters_by_query() {
    let dir = TempDir::new().unwrap();
    let model = write_model(dir.path());

    docwright()
        .arg(&model)
        .args(["--list", "--query", "size"])
        .assert()
        .success()
        .stdout("method java.util.List.size()\n");

    docwright()
        .arg(&model)
        .args(["--list", "--query", "LIST", "--case-sensitive"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!dir.path().join("docs").exists());
}

#[test]
fn query_requires_list_mode() {
    let dir = TempDir::new().unwrap();
    let model = write_model(dir.path());

    docwright()
        .arg(&model)
        .args(["--query", "size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--list"));
}

#[test]
fn unreadable_model_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    docwright()
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("loading").and(predicate::str::contains("missing.json")));
}

#[test]
fn unsupported_format_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, json!({ "format_version": "2.0.0" }).to_string()).unwrap();

    docwright()
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("2.0.0"));
}

#[test]
fn bad_group_is_reported() {
    let dir = TempDir::new().unwrap();
    let model = write_model(dir.path());

    docwright()
        .arg(&model)
        .args(["--group", "no-equals-sign"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no-equals-sign"));
}
