//! Vouch - a minimal test harness.
//!
//! Test modules register suites and tests against a [`Harness`]:
//!
//! ```text
//! use vouch::prelude::*;
//!
//! pub fn register(h: &mut Harness) {
//!     h.describe("Arithmetic", |suite| {
//!         suite.it("adds", || expect(1 + 1).to_be(2));
//!         suite
//!             .each([[1, 2], [4, 5]])
//!             .it("value %s is lower than %s", |[a, b]| expect(a < b).to_be_truthy());
//!     });
//! }
//! ```
//!
//! A binary lists its modules in a [`Catalog`] and hands control to
//! [`cli::main_with_args`], which discovers `*.test.rs` files under a root,
//! runs the catalog entry named after each one, drives every scheduled test
//! to completion and reports a pass/fail summary.
//!
//! # Architecture
//!
//! - [`registry`]: `describe` / `it` / `each` registration
//! - [`scheduler`]: cooperative single-threaded execution of test bodies
//! - [`result`]: outcomes and run statistics
//! - [`discovery`] and [`loader`]: finding and loading test modules
//! - [`report`]: console output
//! - [`driver`]: one complete run

pub mod cli;
pub mod config;
pub mod discovery;
pub mod driver;
pub mod loader;
pub mod prelude;
pub mod registry;
pub mod report;
pub mod result;
pub mod scheduler;
pub mod tracing_setup;

pub use config::RunConfig;
pub use driver::{run, run_with_reporter, RunError};
pub use loader::{Catalog, LoadError, ModuleLoader};
pub use registry::Harness;
pub use result::{Failure, RunStatistics, TestOutcome, TestResult};
pub use scheduler::{defer, Completion};
