//! Spy wrappers around plain functions and methods.

use std::rc::Rc;

use vouch_value::Value;

use crate::log::CallLog;

/// Wrap `function` in a spy.
pub fn mock_fn<A, R, F>(function: F) -> Mock<A, R>
where
    A: Clone,
    F: Fn(A) -> R + 'static,
{
    Mock {
        log: CallLog::new(),
        function: Rc::new(function),
    }
}

/// Wrap a function taking a receiver in a spy. The receiver is forwarded
/// unchanged and is not recorded.
pub fn mock_method<S, A, R, F>(function: F) -> MockMethod<S, A, R>
where
    S: ?Sized,
    A: Clone,
    F: Fn(&S, A) -> R + 'static,
{
    MockMethod {
        log: CallLog::new(),
        function: Rc::new(function),
    }
}

/// A recording wrapper around `Fn(A) -> R`.
pub struct Mock<A, R> {
    log: CallLog<A>,
    function: Rc<dyn Fn(A) -> R>,
}

impl<A: Clone, R> Mock<A, R> {
    /// Record `args`, then delegate. Returns (or panics with) exactly what
    /// the wrapped function does.
    pub fn call(&self, args: A) -> R {
        let count = self.log.record(args.clone());
        tracing::trace!(call = count, "mock called");
        (self.function)(args)
    }

    /// Arguments of every call so far, oldest first.
    pub fn calls(&self) -> Vec<A> {
        self.log.snapshot()
    }

    pub fn call_count(&self) -> usize {
        self.log.len()
    }

    pub fn last_call(&self) -> Option<A> {
        self.log.last()
    }

    /// Read access to the shared log.
    pub fn log(&self) -> &CallLog<A> {
        &self.log
    }

    /// The log as a `Value` list, for `expect(..).to_equal(..)`.
    pub fn calls_as_values(&self) -> Value
    where
        A: Into<Value>,
    {
        self.log.to_value()
    }
}

impl<A, R> Clone for Mock<A, R> {
    fn clone(&self) -> Self {
        Mock {
            log: self.log.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

/// A recording wrapper around `Fn(&S, A) -> R`.
pub struct MockMethod<S: ?Sized, A, R> {
    log: CallLog<A>,
    function: Rc<dyn Fn(&S, A) -> R>,
}

impl<S: ?Sized, A: Clone, R> MockMethod<S, A, R> {
    /// Record `args`, then delegate with `receiver` passed through.
    pub fn call(&self, receiver: &S, args: A) -> R {
        let count = self.log.record(args.clone());
        tracing::trace!(call = count, "mock method called");
        (self.function)(receiver, args)
    }

    pub fn calls(&self) -> Vec<A> {
        self.log.snapshot()
    }

    pub fn call_count(&self) -> usize {
        self.log.len()
    }

    pub fn last_call(&self) -> Option<A> {
        self.log.last()
    }

    pub fn log(&self) -> &CallLog<A> {
        &self.log
    }

    pub fn calls_as_values(&self) -> Value
    where
        A: Into<Value>,
    {
        self.log.to_value()
    }
}

impl<S: ?Sized, A, R> Clone for MockMethod<S, A, R> {
    fn clone(&self) -> Self {
        MockMethod {
            log: self.log.clone(),
            function: Rc::clone(&self.function),
        }
    }
}
