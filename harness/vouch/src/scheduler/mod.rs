//! Cooperative test scheduler.
//!
//! Registration hands each test to [`Scheduler::execute`], which never runs
//! the test inline: it pushes a future into the pending set. Every such
//! future first yields once, so a file finishes registering all of its tests
//! before any test body runs, and bodies start in registration order. [`Scheduler::drain`] polls the
//! set on the current thread until every test has settled, recording each
//! result as it completes.
//!
//! Test functions may finish synchronously (returning `()` or a `Result`)
//! or hand back a deferred future through [`defer`]. Panics in either path
//! are caught and recorded as failures.

use std::error::Error;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use futures::future::LocalBoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use tracing::{debug, trace};
use vouch_value::Value;

use crate::report::Reporter;
use crate::result::{display_name, Failure, LoadFailure, RunStatistics, TestOutcome, TestResult};

/// Error type a test function may return.
pub type TestError = Box<dyn Error + 'static>;

/// What a test function hands back when invoked.
pub enum Completion {
    /// The test already finished.
    Ready(Result<(), TestError>),
    /// The test finishes when this future resolves.
    Deferred(LocalBoxFuture<'static, Result<(), TestError>>),
}

impl From<()> for Completion {
    fn from((): ()) -> Self {
        Completion::Ready(Ok(()))
    }
}

impl<E: Into<TestError>> From<Result<(), E>> for Completion {
    fn from(result: Result<(), E>) -> Self {
        Completion::Ready(result.map_err(Into::into))
    }
}

/// Values a deferred test may resolve to.
pub trait TestReturn {
    fn into_result(self) -> Result<(), TestError>;
}

impl TestReturn for () {
    fn into_result(self) -> Result<(), TestError> {
        Ok(())
    }
}

impl<E: Into<TestError>> TestReturn for Result<(), E> {
    fn into_result(self) -> Result<(), TestError> {
        self.map_err(Into::into)
    }
}

/// Mark a test as asynchronous: its result is recorded when `future` resolves.
pub fn defer<F>(future: F) -> Completion
where
    F: Future + 'static,
    F::Output: TestReturn,
{
    Completion::Deferred(Box::pin(future.map(TestReturn::into_result)))
}

/// Zero-argument closure producing a test's completion.
pub type TestBody = Box<dyn FnOnce() -> Completion>;

/// A registered test waiting to run.
pub struct TestCase {
    suite: Option<String>,
    name: String,
    arguments: Vec<Value>,
    body: TestBody,
}

impl TestCase {
    pub fn new(suite: Option<String>, name: String, body: TestBody) -> Self {
        TestCase {
            suite,
            name,
            arguments: Vec::new(),
            body,
        }
    }

    /// Attach the sample a parameterized test was generated from.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<Value>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn suite(&self) -> Option<&str> {
        self.suite.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    pub fn display_name(&self) -> String {
        display_name(self.suite.as_deref(), &self.name)
    }
}

/// Owns the pending set and the run's statistics.
pub struct Scheduler {
    pending: FuturesUnordered<LocalBoxFuture<'static, TestResult>>,
    stats: RunStatistics,
    reporter: Box<dyn Reporter>,
    filter: Option<String>,
    scheduled: usize,
    skipped: usize,
}

impl Scheduler {
    pub fn new(reporter: Box<dyn Reporter>) -> Self {
        Scheduler {
            pending: FuturesUnordered::new(),
            stats: RunStatistics::new(),
            reporter,
            filter: None,
            scheduled: 0,
            skipped: 0,
        }
    }

    /// Only schedule tests whose display name contains `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    /// Queue a test. It starts no earlier than the next executor turn.
    pub fn execute(&mut self, case: TestCase) {
        let test_name = case.display_name();
        if let Some(filter) = &self.filter {
            if !test_name.contains(filter.as_str()) {
                trace!(test = %test_name, "filtered out");
                self.skipped += 1;
                return;
            }
        }

        debug!(test = %test_name, arguments = case.arguments.len(), "scheduled");
        self.scheduled += 1;
        self.pending.push(Box::pin(run_case(case)));
    }

    /// Count a module that failed to load.
    pub fn record_load_failure(&mut self, failure: LoadFailure) {
        debug!(path = %failure.path.display(), error = %failure.error, "load failure recorded");
        self.reporter.load_failed(&failure);
        self.stats.add_load_failure(failure);
    }

    /// Run every pending test to completion, recording results in
    /// completion order.
    ///
    /// Must be awaited inside a tokio runtime.
    pub async fn drain(&mut self) {
        while let Some(result) = self.pending.next().await {
            trace!(test = %result.display_name(), passed = result.outcome.is_passed(), "settled");
            self.reporter.test_finished(&result);
            self.stats.add_result(result);
        }
    }

    /// Tests queued so far.
    pub fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// Tests dropped by the name filter.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Tests queued but not yet settled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn statistics(&self) -> &RunStatistics {
        &self.stats
    }

    /// Report the summary and hand back the statistics.
    pub fn finish(mut self) -> RunStatistics {
        self.reporter.run_finished(&self.stats);
        self.stats
    }
}

/// Returns `Pending` once, waking itself first.
///
/// Woken tests re-enter the pending set's ready queue in the order they
/// yielded, so synchronous tests run in registration order.
struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

fn yield_once() -> YieldOnce {
    YieldOnce { yielded: false }
}

async fn run_case(case: TestCase) -> TestResult {
    yield_once().await;

    let TestCase {
        suite, name, body, ..
    } = case;
    let start = Instant::now();
    let outcome = match catch_unwind(AssertUnwindSafe(body)) {
        Err(payload) => Err(Failure::panicked(payload.as_ref())),
        Ok(Completion::Ready(result)) => result.map_err(Failure::from_error),
        Ok(Completion::Deferred(future)) => match AssertUnwindSafe(future).catch_unwind().await {
            Ok(result) => result.map_err(Failure::from_error),
            Err(payload) => Err(Failure::panicked(payload.as_ref())),
        },
    };
    let duration = start.elapsed();

    match TestOutcome::from(outcome) {
        TestOutcome::Passed => TestResult::passed(suite, name, duration),
        TestOutcome::Failed(failure) => TestResult::failed(suite, name, failure, duration),
    }
}
