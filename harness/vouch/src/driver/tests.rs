use std::cell::Cell;
use std::fs::{self, File};
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use vouch_expect::expect;

use super::*;
use crate::loader::Catalog;
use crate::report::SilentReporter;
use crate::scheduler::defer;

thread_local! {
    static ARITHMETIC_LOADS: Cell<usize> = const { Cell::new(0) };
}

fn arithmetic(h: &mut Harness) {
    ARITHMETIC_LOADS.with(|loads| loads.set(loads.get() + 1));
    h.describe("Arithmetic", |suite| {
        suite.it("adds", || expect(1 + 1).to_be(2));
        suite.it("subtracts", || expect(3 - 1).to_be(2));
        suite.it("is wrong", || expect(2 * 2).to_be(5));
    });
}

fn deferred(h: &mut Harness) {
    h.it("waits", || {
        defer(async {
            tokio::time::sleep(Duration::from_millis(2)).await;
            expect("done").to_equal("done")
        })
    });
}

fn catalog() -> Catalog {
    Catalog::new()
        .module("arithmetic", arithmetic)
        .module("deferred", deferred)
}

fn run_silent(config: &RunConfig) -> RunStatistics {
    run_with_reporter(config, &catalog(), Box::new(SilentReporter)).unwrap()
}

fn config_for(root: &std::path::Path) -> RunConfig {
    RunConfig {
        root: root.to_path_buf(),
        ..RunConfig::default()
    }
}

#[test]
fn test_full_run() {
    let dir = tempdir().unwrap();
    let vendored = dir.path().join("node_modules");
    fs::create_dir(&vendored).unwrap();

    File::create(dir.path().join("arithmetic.test.rs")).unwrap();
    File::create(dir.path().join("deferred.test.rs")).unwrap();
    File::create(dir.path().join("ghost.test.rs")).unwrap();
    File::create(dir.path().join("readme.md")).unwrap();
    File::create(vendored.join("arithmetic.test.rs")).unwrap();

    ARITHMETIC_LOADS.with(|loads| loads.set(0));
    let stats = run_silent(&config_for(dir.path()));

    assert_eq!(ARITHMETIC_LOADS.with(Cell::get), 1);
    assert_eq!(stats.passed, 3);
    assert_eq!(stats.failed, 2);
    assert_eq!(stats.tests_run(), 4);
    assert_eq!(stats.load_failures.len(), 1);
    assert!(stats.load_failures[0].path.ends_with("ghost.test.rs"));
    assert!(stats.result("Arithmetic is wrong").unwrap().outcome.is_failed());
    assert!(stats.result("waits").unwrap().outcome.is_passed());
    assert_eq!(stats.exit_code(), 1);
}

#[test]
fn test_empty_tree_succeeds() {
    let dir = tempdir().unwrap();
    let stats = run_silent(&config_for(dir.path()));

    assert_eq!(stats.passed, 0);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.exit_code(), 0);
}

#[test]
fn test_all_passing_exit_code() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("deferred.test.rs")).unwrap();

    let stats = run_silent(&config_for(dir.path()));
    assert_eq!(stats.passed, 1);
    assert_eq!(stats.exit_code(), 0);
}

#[test]
fn test_filter() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("arithmetic.test.rs")).unwrap();
    File::create(dir.path().join("deferred.test.rs")).unwrap();

    let config = RunConfig {
        filter: Some("adds".into()),
        ..config_for(dir.path())
    };
    let stats = run_silent(&config);

    assert_eq!(stats.tests_run(), 1);
    assert!(stats.result("Arithmetic adds").is_some());
}

#[test]
fn test_missing_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let result = run_with_reporter(&config_for(&missing), &catalog(), Box::new(SilentReporter));
    assert!(matches!(result, Err(RunError::PathNotFound(path)) if path == missing));
}

#[test]
fn test_single_file_root() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deferred.test.rs");
    File::create(&path).unwrap();

    let stats = run_silent(&config_for(&path));
    assert_eq!(stats.passed, 1);
}
