//! Integration tests for the nodeplan CLI surface: help, exit codes,
//! configuration and logging.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{demo_network, nodeplan, nodeplan_in, setup_demo, DEMO_OWNED};
use tempfile::tempdir;

#[test]
fn test_help_flag() {
    nodeplan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: nodeplan"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("nodes"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_version_flag() {
    nodeplan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nodeplan"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    nodeplan_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `nodeplan --help`"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    nodeplan()
        .args(["--format", "yaml", "nodes"])
        .assert()
        .code(2);
}

#[test]
fn test_parse_error_json_envelope() {
    nodeplan()
        .args(["--format", "json", "path"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_missing_network_exit_code_3() {
    let dir = tempdir().unwrap();
    nodeplan_in(dir.path())
        .arg("nodes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("network definition not found"));
}

#[test]
fn test_invalid_network_exit_code_3() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("network.toml"),
        "[[node]]\nname = \"Velia\"\ncost = 0\nconnects = [\"Heidel\"]\n",
    )
    .unwrap();

    nodeplan_in(dir.path())
        .arg("nodes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid network"))
        .stderr(predicate::str::contains("Heidel"));
}

#[test]
fn test_unknown_owned_node_reports_line() {
    let dir = tempdir().unwrap();
    setup_demo(dir.path(), "Velia\nCalpheon\n");

    nodeplan_in(dir.path())
        .arg("nodes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "could not find node \"Calpheon\" referenced on line 2",
        ));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    setup_demo(dir.path(), DEMO_OWNED);

    let output = nodeplan_in(dir.path())
        .args(["--format", "json", "path", "Calpheon"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_node");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();
    nodeplan_in(dir.path())
        .args(["--quiet", "nodes"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_network_and_owned_flags() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("mine.txt"), "Toscani Farm\n").unwrap();

    nodeplan_in(dir.path())
        .arg("--network")
        .arg(demo_network())
        .args(["--owned", "mine.txt", "nodes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You own 3 nodes for 1 contribution points.",
        ));
}

#[test]
fn test_network_from_environment() {
    let dir = tempdir().unwrap();
    nodeplan_in(dir.path())
        .env("NODEPLAN_NETWORK", demo_network())
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You own 2 nodes for 0 contribution points.",
        ));
}

#[test]
fn test_network_from_global_config() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!("network = {:?}\n", demo_network().display().to_string()),
    )
    .unwrap();

    nodeplan_in(dir.path())
        .args(["path", "Glish"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 contribution points are needed to connect to Glish.",
        ));
}

#[test]
fn test_log_level_debug_writes_to_stderr() {
    let dir = tempdir().unwrap();
    setup_demo(dir.path(), DEMO_OWNED);

    nodeplan_in(dir.path())
        .args(["--log-level", "debug", "nodes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("load_network"));
}

#[test]
fn test_default_log_level_is_quiet() {
    let dir = tempdir().unwrap();
    setup_demo(dir.path(), DEMO_OWNED);

    nodeplan_in(dir.path())
        .arg("nodes")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
