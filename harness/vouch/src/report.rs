//! Console reporting.

use std::io::{self, Write};

use crate::result::{LoadFailure, RunStatistics, TestOutcome, TestResult};

/// Receives run events as they happen.
pub trait Reporter {
    fn run_started(&mut self) {}

    fn test_finished(&mut self, result: &TestResult);

    fn load_failed(&mut self, failure: &LoadFailure);

    fn run_finished(&mut self, _stats: &RunStatistics) {}
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn test_finished(&mut self, _result: &TestResult) {}

    fn load_failed(&mut self, _failure: &LoadFailure) {}
}

/// Writes PASS/FAIL lines and the summary to a writer (stdout by default).
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        ConsoleReporter { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(error) = writeln!(self.out, "{text}") {
            tracing::warn!(%error, "failed to write report");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn run_started(&mut self) {
        self.emit("TESTING");
    }

    fn test_finished(&mut self, result: &TestResult) {
        self.emit(&format_result(result));
    }

    fn load_failed(&mut self, failure: &LoadFailure) {
        self.emit(&format_load_failure(failure));
    }

    fn run_finished(&mut self, stats: &RunStatistics) {
        self.emit("============");
        self.emit(&format_summary(stats));
        if let Err(error) = self.out.flush() {
            tracing::warn!(%error, "failed to flush report");
        }
    }
}

/// `  PASS name`, or `  FAIL name` followed by the indented failure detail.
pub fn format_result(result: &TestResult) -> String {
    match &result.outcome {
        TestOutcome::Passed => format!("  PASS {}", result.display_name()),
        TestOutcome::Failed(failure) => {
            format!("  FAIL {}\n    {failure}", result.display_name())
        }
    }
}

pub fn format_load_failure(failure: &LoadFailure) -> String {
    format!(
        "  FAIL Cannot load {}\n    {}",
        failure.path.display(),
        failure.error
    )
}

/// `SUCCESS|FAILED <passed> passed, <failed> failed in <ms> ms`
pub fn format_summary(stats: &RunStatistics) -> String {
    let status = if stats.has_failures() {
        "FAILED"
    } else {
        "SUCCESS"
    };
    format!(
        "{status} {} passed, {} failed in {} ms",
        stats.passed,
        stats.failed,
        stats.elapsed().as_millis()
    )
}
