//! Suite and test registration.
//!
//! [`Harness`] is the registration surface handed to every test module.
//! `describe` opens a [`Suite`] whose label is prefixed to every test
//! registered through it; a suite cannot open another suite, so labels never
//! nest. `it` and `each(..).it` hand tests to the [`Scheduler`] immediately.

mod format;

use std::rc::Rc;

use tracing::debug;
use vouch_value::Value;

use crate::scheduler::{Completion, Scheduler, TestCase};

pub use format::format_name;

/// Registration surface for test modules.
pub struct Harness {
    scheduler: Scheduler,
}

impl Harness {
    pub fn new(scheduler: Scheduler) -> Self {
        Harness { scheduler }
    }

    /// Register the tests declared in `body` under the label `name`.
    pub fn describe(&mut self, name: impl Into<String>, body: impl FnOnce(&mut Suite<'_>)) {
        let label = name.into();
        debug!(suite = %label, "describe");
        let mut suite = Suite {
            label,
            scheduler: &mut self.scheduler,
        };
        body(&mut suite);
    }

    /// Register a test outside any suite.
    pub fn it<F, R>(&mut self, name: impl Into<String>, function: F)
    where
        F: FnOnce() -> R + 'static,
        R: Into<Completion>,
    {
        register(&mut self.scheduler, None, name.into(), function);
    }

    /// Start a parameterized registration over `samples`.
    pub fn each<T, I>(&mut self, samples: I) -> Each<'_, T>
    where
        I: IntoIterator<Item = T>,
    {
        Each::new(None, samples, &mut self.scheduler)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn into_scheduler(self) -> Scheduler {
        self.scheduler
    }
}

/// Registration context inside a `describe` body.
pub struct Suite<'h> {
    label: String,
    scheduler: &'h mut Scheduler,
}

impl Suite<'_> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Register a test under this suite's label.
    pub fn it<F, R>(&mut self, name: impl Into<String>, function: F)
    where
        F: FnOnce() -> R + 'static,
        R: Into<Completion>,
    {
        register(
            self.scheduler,
            Some(self.label.clone()),
            name.into(),
            function,
        );
    }

    /// Start a parameterized registration labelled with this suite.
    pub fn each<T, I>(&mut self, samples: I) -> Each<'_, T>
    where
        I: IntoIterator<Item = T>,
    {
        Each::new(Some(self.label.clone()), samples, self.scheduler)
    }
}

/// Pending parameterized registration: samples captured, `it` not yet called.
///
/// The suite label is captured when `each` is called.
#[must_use = "`each` registers nothing until `it` is called"]
pub struct Each<'s, T> {
    suite: Option<String>,
    samples: Vec<T>,
    scheduler: &'s mut Scheduler,
}

impl<'s, T> Each<'s, T> {
    fn new(
        suite: Option<String>,
        samples: impl IntoIterator<Item = T>,
        scheduler: &'s mut Scheduler,
    ) -> Self {
        Each {
            suite,
            samples: samples.into_iter().collect(),
            scheduler,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<T> Each<'_, T>
where
    T: Clone + Into<Value> + 'static,
{
    /// Register one test per sample, in sample order.
    ///
    /// Each test is named by [`format_name`] applied to `name_format` and its
    /// sample; `function` receives the sample as its argument.
    pub fn it<F, R>(self, name_format: &str, function: F)
    where
        F: Fn(T) -> R + 'static,
        R: Into<Completion>,
    {
        let function = Rc::new(function);
        for (index, sample) in self.samples.into_iter().enumerate() {
            let argument: Value = sample.clone().into();
            let name = format_name(name_format, &argument, index);
            let function = Rc::clone(&function);
            let case = TestCase::new(
                self.suite.clone(),
                name,
                Box::new(move || (*function)(sample).into()),
            )
            .with_arguments(vec![argument]);
            self.scheduler.execute(case);
        }
    }
}

fn register<F, R>(scheduler: &mut Scheduler, suite: Option<String>, name: String, function: F)
where
    F: FnOnce() -> R + 'static,
    R: Into<Completion>,
{
    scheduler.execute(TestCase::new(
        suite,
        name,
        Box::new(move || function().into()),
    ));
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
