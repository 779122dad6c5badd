//! Integration tests for the `search` command

mod support;

use predicates::prelude::*;
use support::{nodeplan_in, setup_demo, DEMO_OWNED};
use tempfile::tempdir;

#[test]
fn test_search_by_item() {
    let dir = tempdir().unwrap();
    setup_demo(dir.path(), DEMO_OWNED);

    nodeplan_in(dir.path())
        .args(["search", "copper"])
        .assert()
        .success()
        .stdout("Coastal Cave: B [2], closest worker from Velia, produces: Copper Ore\n");
}

#[test]
fn test_search_joins_phrase_words() {
    let dir = tempdir().unwrap();
    setup_demo(dir.path(), DEMO_OWNED);

    nodeplan_in(dir.path())
        .args(["search", "rough", "stone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ancient Stone Chamber: A [2]"));
}

#[test]
fn test_search_costs_ranked() {
    let dir = tempdir().unwrap();
    setup_demo(dir.path(), DEMO_OWNED);

    nodeplan_in(dir.path())
        .args(["search", "--costs", "farm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] Bartali Farm (1) owned\n"))
        .stdout(predicate::str::ends_with(
            "[1] Toscani Farm: Farming [1], closest worker from Velia, produces: Wheat, Barley\n",
        ));
}

#[test]
fn test_search_no_match() {
    let dir = tempdir().unwrap();
    setup_demo(dir.path(), DEMO_OWNED);

    nodeplan_in(dir.path())
        .args(["search", "mithril"])
        .assert()
        .success()
        .stdout("No nodes match 'mithril'\n");
}

#[test]
fn test_search_costs_json() {
    let dir = tempdir().unwrap();
    setup_demo(dir.path(), DEMO_OWNED);

    let output = nodeplan_in(dir.path())
        .args(["--format", "json", "search", "--costs", "fig"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Glish: Swamp");
    assert_eq!(json[0]["connect_cost"], 3);
}
