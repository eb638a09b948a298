//! The shared, append-only call log behind every spy.

use std::cell::RefCell;
use std::rc::Rc;

use vouch_value::Value;

/// Arguments of every call made through one spy, in call order.
pub struct CallLog<A> {
    calls: Rc<RefCell<Vec<A>>>,
}

impl<A> CallLog<A> {
    pub(crate) fn new() -> Self {
        CallLog {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append one call. The borrow ends before this returns, so the wrapped
    /// function may call back into the same spy.
    pub(crate) fn record(&self, args: A) -> usize {
        let mut calls = self.calls.borrow_mut();
        calls.push(args);
        calls.len()
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

impl<A: Clone> CallLog<A> {
    /// Snapshot of all recorded calls.
    pub fn snapshot(&self) -> Vec<A> {
        self.calls.borrow().clone()
    }

    pub fn last(&self) -> Option<A> {
        self.calls.borrow().last().cloned()
    }

    pub fn get(&self, index: usize) -> Option<A> {
        self.calls.borrow().get(index).cloned()
    }

    /// All recorded calls as one `Value` list.
    pub fn to_value(&self) -> Value
    where
        A: Into<Value>,
    {
        Value::from(self.snapshot())
    }
}

impl<A> Clone for CallLog<A> {
    fn clone(&self) -> Self {
        CallLog {
            calls: Rc::clone(&self.calls),
        }
    }
}
