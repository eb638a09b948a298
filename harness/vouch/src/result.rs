//! Test result types.

use std::any::Any;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use thiserror::Error;
use vouch_expect::AssertionError;

use crate::loader::LoadError;
use crate::scheduler::TestError;

/// Why a test failed.
#[derive(Clone, Debug, Error)]
pub enum Failure {
    /// A matcher's condition was false.
    #[error(transparent)]
    Assertion(#[from] AssertionError),
    /// The test function returned an error.
    #[error("{0}")]
    Error(String),
    /// The test function panicked.
    #[error("panicked: {0}")]
    Panic(String),
}

impl Failure {
    /// Classify an error returned by a test function.
    pub fn from_error(error: TestError) -> Self {
        match error.downcast::<AssertionError>() {
            Ok(assertion) => Failure::Assertion(*assertion),
            Err(other) => Failure::Error(other.to_string()),
        }
    }

    /// Build a failure from a caught panic payload.
    #[cold]
    pub fn panicked(payload: &(dyn Any + Send)) -> Self {
        Failure::Panic(panic_message(payload))
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Failure::Assertion(_))
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Failure::Panic(_))
    }
}

/// Text of a panic payload raised with `panic!("...")` or `assert!`.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Outcome of a single test.
#[derive(Clone, Debug)]
pub enum TestOutcome {
    Passed,
    Failed(Failure),
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TestOutcome::Failed(_))
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            TestOutcome::Passed => None,
            TestOutcome::Failed(failure) => Some(failure),
        }
    }
}

impl From<Result<(), Failure>> for TestOutcome {
    fn from(result: Result<(), Failure>) -> Self {
        match result {
            Ok(()) => TestOutcome::Passed,
            Err(failure) => TestOutcome::Failed(failure),
        }
    }
}

/// Result of running a single test.
#[derive(Clone, Debug)]
pub struct TestResult {
    /// Suite label the test was registered under.
    pub suite: Option<String>,
    pub name: String,
    pub outcome: TestOutcome,
    /// Time from invoking the test function until its result settled.
    pub duration: Duration,
}

impl TestResult {
    pub fn passed(suite: Option<String>, name: String, duration: Duration) -> Self {
        TestResult {
            suite,
            name,
            outcome: TestOutcome::Passed,
            duration,
        }
    }

    #[cold]
    pub fn failed(suite: Option<String>, name: String, failure: Failure, duration: Duration) -> Self {
        TestResult {
            suite,
            name,
            outcome: TestOutcome::Failed(failure),
            duration,
        }
    }

    /// `suite name`, or just `name` outside a suite.
    pub fn display_name(&self) -> String {
        display_name(self.suite.as_deref(), &self.name)
    }
}

pub(crate) fn display_name(suite: Option<&str>, name: &str) -> String {
    match suite {
        Some(suite) if !suite.is_empty() => format!("{suite} {name}"),
        _ => name.to_string(),
    }
}

/// A test module that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: LoadError,
}

impl LoadFailure {
    pub fn new(path: PathBuf, error: LoadError) -> Self {
        LoadFailure { path, error }
    }
}

/// Aggregate counters for one run.
///
/// Only ever incremented. Load failures count towards `failed`.
#[derive(Debug)]
pub struct RunStatistics {
    pub passed: usize,
    pub failed: usize,
    /// Results in completion order.
    pub results: Vec<TestResult>,
    pub load_failures: Vec<LoadFailure>,
    started: Instant,
}

impl RunStatistics {
    pub fn new() -> Self {
        RunStatistics {
            passed: 0,
            failed: 0,
            results: Vec::new(),
            load_failures: Vec::new(),
            started: Instant::now(),
        }
    }

    pub fn add_result(&mut self, result: TestResult) {
        match &result.outcome {
            TestOutcome::Passed => self.passed += 1,
            TestOutcome::Failed(_) => self.failed += 1,
        }
        self.results.push(result);
    }

    pub fn add_load_failure(&mut self, failure: LoadFailure) {
        self.failed += 1;
        self.load_failures.push(failure);
    }

    /// Number of tests that ran to an outcome.
    pub fn tests_run(&self) -> usize {
        self.results.len()
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Process exit code: 0 = no failures, 1 = at least one failure.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }

    /// Look up a result by display name.
    pub fn result(&self, display_name: &str) -> Option<&TestResult> {
        self.results
            .iter()
            .find(|result| result.display_name() == display_name)
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        RunStatistics::new()
    }
}
