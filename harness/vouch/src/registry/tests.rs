use std::cell::RefCell;
use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use vouch_expect::expect;

use super::*;
use crate::report::SilentReporter;
use crate::result::{RunStatistics, TestResult};

fn harness() -> Harness {
    Harness::new(Scheduler::new(Box::new(SilentReporter)))
}

async fn run(harness: Harness) -> RunStatistics {
    let mut scheduler = harness.into_scheduler();
    scheduler.drain().await;
    scheduler.finish()
}

/// Display names in the order results were reported.
fn names(stats: &RunStatistics) -> Vec<String> {
    stats.results.iter().map(TestResult::display_name).collect()
}

#[test]
fn test_registration_schedules_immediately() {
    let mut h = harness();
    h.it("top level", || ());
    h.describe("Suite", |suite| {
        suite.it("one", || ());
        suite.it("two", || ());
    });
    assert_eq!(h.scheduler().scheduled(), 3);
}

#[tokio::test]
async fn test_each_names_and_arguments() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut h = harness();
    h.describe("Test each", |suite| {
        let seen = Rc::clone(&seen);
        suite
            .each([[1, 2], [4, 5]])
            .it("value %s is lower than %s", move |[a, b]| {
                seen.borrow_mut().push((a, b));
                expect(a < b).to_be_truthy()
            });
    });

    let stats = run(h).await;

    assert_eq!(
        names(&stats),
        vec![
            "Test each value 1 is lower than 2".to_string(),
            "Test each value 4 is lower than 5".to_string(),
        ]
    );
    assert_eq!(stats.passed, 2);
    assert_eq!(*seen.borrow(), vec![(1, 2), (4, 5)]);
}

#[tokio::test]
async fn test_suite_label_applies_only_inside_describe() {
    let mut h = harness();
    h.it("before", || ());
    h.describe("Suite name for blah", |suite| {
        assert_eq!(suite.label(), "Suite name for blah");
        suite.it("Bla blah", || ());
        suite.it("Hey ho", || ());
    });
    h.it("after", || ());

    let stats = run(h).await;

    assert_eq!(
        names(&stats),
        vec![
            "before".to_string(),
            "Suite name for blah Bla blah".to_string(),
            "Suite name for blah Hey ho".to_string(),
            "after".to_string(),
        ]
    );
    assert!(stats.result("after").unwrap().suite.is_none());
}

#[tokio::test]
async fn test_each_outside_suite_and_empty_samples() {
    let mut h = harness();
    h.each(Vec::<i64>::new()).it("never %s", |_| ());
    h.each(["x", "y"]).it("case %# is %s", |s| expect(s).not().to_be_null());

    let stats = run(h).await;

    assert_eq!(
        names(&stats),
        vec!["case 0 is x".to_string(), "case 1 is y".to_string()]
    );
}

#[tokio::test]
async fn test_each_failure_counts_per_sample() {
    let mut h = harness();
    h.each([1, 2, 3]).it("%s is odd", |n: i64| expect(n % 2).to_be(1));

    let stats = run(h).await;

    assert_eq!(stats.passed, 2);
    assert_eq!(stats.failed, 1);
    assert!(stats.result("2 is odd").unwrap().outcome.is_failed());
}

#[test]
fn test_each_len() {
    let mut h = harness();
    let each = h.each(vec![1, 2, 3]);
    assert_eq!(each.len(), 3);
    assert!(!each.is_empty());
    each.it("n %s", |_: i32| ());
    assert_eq!(h.scheduler().scheduled(), 3);
}

#[test]
fn test_format_name_sequence() {
    let sample = Value::from(vec![1, 2]);
    assert_eq!(
        format_name("value %s is lower than %s", &sample, 0),
        "value 1 is lower than 2"
    );
}

#[test]
fn test_format_name_missing_arguments_stay_literal() {
    let sample = Value::from(vec![1]);
    assert_eq!(format_name("%s and %s", &sample, 0), "1 and %s");
}

#[test]
fn test_format_name_scalar_fills_first_slot() {
    assert_eq!(format_name("got %s, %s", &Value::from("a"), 0), "got a, %s");
    assert_eq!(format_name("plain", &Value::from(7), 3), "plain");
}

#[test]
fn test_format_name_index() {
    let sample = Value::from(vec!["x"]);
    assert_eq!(format_name("#%# %s (%#)", &sample, 4), "#4 x (4)");
}

#[test]
fn test_format_name_map_uses_field_values() {
    let mut fields = BTreeMap::new();
    fields.insert("b", 2);
    fields.insert("a", 1);
    let sample = Value::from(fields);
    assert_eq!(format_name("%s then %s", &sample, 0), "1 then 2");
}

#[test]
fn test_format_name_other_percent_signs() {
    let sample = Value::from(vec![50]);
    assert_eq!(format_name("%s%% done %d", &sample, 0), "50%% done %d");
    assert_eq!(format_name("trailing %", &sample, 0), "trailing %");
}

#[test]
fn test_format_name_nested_list_stringifies() {
    let sample = Value::from(vec![vec![1, 2], vec![3]]);
    assert_eq!(format_name("%s | %s", &sample, 0), "1,2 | 3");
}

#[tokio::test]
async fn test_results_follow_registration_order() {
    let mut h = harness();
    h.describe("Test each", |suite| {
        suite
            .each([[1, 2], [4, 5]])
            .it("value %s is lower than %s", |[a, b]| expect(a < b).to_be_truthy());
    });
    h.it("Bla blah", || ());
    h.describe("Suite name for blah", |suite| {
        suite.it("Bla blah", || ());
        suite.it("Hey ho", || ());
    });

    let stats = run(h).await;

    assert_eq!(
        names(&stats),
        vec![
            "Test each value 1 is lower than 2".to_string(),
            "Test each value 4 is lower than 5".to_string(),
            "Bla blah".to_string(),
            "Suite name for blah Bla blah".to_string(),
            "Suite name for blah Hey ho".to_string(),
        ]
    );
}
