//! Integration tests for the `icp` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE: &str = "name: icp\nserver:\n  host: localhost\n  port: 8080\n";

/// Write `contents` to `config.yaml` under `dir`.
fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, contents).expect("write");
    path
}

fn icp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("icp").expect("icp binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_config_as_json() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(temp.path(), SAMPLE);

    let output = icp_cmd().arg(&path).assert().success().get_output().clone();
    let printed: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(
        printed,
        json!({ "name": "icp", "server": { "host": "localhost", "port": 8080 } })
    );
}

#[test]
fn prints_config_as_yaml() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(temp.path(), SAMPLE);

    icp_cmd()
        .arg(&path)
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port: 8080"))
        .stdout(predicate::str::contains("name: icp"));
}

#[test]
fn prints_single_key() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(temp.path(), SAMPLE);

    icp_cmd()
        .arg(&path)
        .args(["--key", "server.host"])
        .assert()
        .success()
        .stdout("\"localhost\"\n");
}

#[test]
fn missing_key_fails() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(temp.path(), SAMPLE);

    icp_cmd()
        .arg(&path)
        .args(["--key", "server.user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key not found: server.user"));
}

#[test]
fn empty_file_prints_empty_object() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(temp.path(), "# empty\n");

    icp_cmd().arg(&path).assert().success().stdout("{}\n");
}

#[test]
fn missing_file_fails() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("absent.yaml");

    icp_cmd()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn sequence_root_fails() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(temp.path(), "- a\n- b\n");

    icp_cmd()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config root must be a mapping"));
}
