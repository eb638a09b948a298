//! Run driver: discover, load, drain, report.

use std::io;
use std::panic::{self, PanicHookInfo};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::discovery::discover_tests;
use crate::loader::ModuleLoader;
use crate::registry::Harness;
use crate::report::{ConsoleReporter, Reporter};
use crate::result::{LoadFailure, RunStatistics};
use crate::scheduler::Scheduler;

/// A run that could not take place at all.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("cannot start the test runtime: {0}")]
    Runtime(#[source] io::Error),
}

/// Run every test under `config.root`, reporting to stdout.
pub fn run(config: &RunConfig, loader: &dyn ModuleLoader) -> Result<RunStatistics, RunError> {
    run_with_reporter(config, loader, Box::new(ConsoleReporter::stdout()))
}

/// Run every test under `config.root`, reporting to `reporter`.
///
/// Each discovered file is loaded exactly once, in walk order. Every test
/// its registration schedules is then driven to completion on a
/// single-threaded runtime.
pub fn run_with_reporter(
    config: &RunConfig,
    loader: &dyn ModuleLoader,
    mut reporter: Box<dyn Reporter>,
) -> Result<RunStatistics, RunError> {
    if !config.root.exists() {
        return Err(RunError::PathNotFound(config.root.clone()));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)?;

    reporter.run_started();
    let scheduler = Scheduler::new(reporter).with_filter(config.filter.clone());
    let mut harness = Harness::new(scheduler);

    let discovery = discover_tests(&config.root, &config.suffix);
    info!(
        root = %config.root.display(),
        files = discovery.files.len(),
        "discovery finished"
    );
    for failure in discovery.errors {
        harness.scheduler_mut().record_load_failure(failure);
    }

    for file in &discovery.files {
        debug!(path = %file.path.display(), "processing");
        if let Err(error) = loader.load(file, &mut harness) {
            warn!(path = %file.path.display(), %error, "cannot load test module");
            harness
                .scheduler_mut()
                .record_load_failure(LoadFailure::new(file.path.clone(), error));
        }
    }

    let mut scheduler = harness.into_scheduler();
    debug!(
        scheduled = scheduler.scheduled(),
        skipped = scheduler.skipped(),
        "draining"
    );
    runtime.block_on(scheduler.drain());

    Ok(scheduler.finish())
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Replaces the process panic hook until dropped.
///
/// Test panics are caught and reported as failures, so the default hook's
/// stderr output is replaced by a `debug` log line.
pub struct QuietPanics {
    previous: Option<PanicHook>,
}

impl QuietPanics {
    pub fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            debug!(%info, "test panicked");
        }));
        QuietPanics {
            previous: Some(previous),
        }
    }
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        // `set_hook` panics when called while unwinding.
        if std::thread::panicking() {
            return;
        }
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
