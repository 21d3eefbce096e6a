use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid utf-8")
}

#[test]
fn sections_lists_builtin_catalog() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fgt-extract"));
    cmd.env("NO_COLOR", "1")
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("sections source=embedded"))
        .stdout(predicate::str::contains("- address: Firewall address objects"))
        .stdout(predicate::str::contains("- policy: IPv4 firewall policies"));
}

#[test]
fn sections_json_outputs_structured_payload() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fgt-extract"));
    cmd.arg("sections")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"drop_columns\""))
        .stdout(predicate::str::contains("\"service-group\""));
}

#[test]
fn custom_sections_file_drives_extraction() {
    let dir = tempdir().expect("tempdir");
    let catalog = dir.path().join("sections.toml");
    fs::write(
        &catalog,
        r#"
[[section]]
id = "category"
headers = ["config firewall service category"]
stem = "categories"
description = "Service categories"
"#,
    )
    .expect("write catalog");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fgt-extract"));
    cmd.arg("extract")
        .arg(fixture("fixtures/fortigate-sample.conf"))
        .arg("-o")
        .arg(path_as_str(dir.path()))
        .arg("--sections-file")
        .arg(path_as_str(&catalog))
        .assert()
        .success()
        .stdout(predicate::str::contains("extracted 1 section(s)"));

    let out = fs::read_to_string(dir.path().join("categories.csv")).expect("read categories.csv");
    assert_eq!(out, "name,comment\nGeneral,General services.\n");
}

#[test]
fn broken_sections_file_falls_back_with_warning() {
    let dir = tempdir().expect("tempdir");
    let catalog = dir.path().join("broken.toml");
    fs::write(&catalog, "not = [valid").expect("write catalog");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fgt-extract"));
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("sections")
        .arg("--sections-file")
        .arg(path_as_str(&catalog))
        .assert()
        .success()
        .stdout(predicate::str::contains("sections source=embedded"))
        .stderr(predicate::str::contains("failed to parse sections file"));
}
