//! The `expect(value)` surface.

use vouch_value::{Kind, Value};

use crate::error::AssertionError;
use crate::matcher::Matcher;

/// Wrap `value` for assertion.
pub fn expect(value: impl Into<Value>) -> Expectation {
    Expectation {
        subject: value.into(),
        negated: false,
    }
}

/// A subject value plus the truth value its matchers must produce.
#[derive(Clone, Debug)]
#[must_use = "an expectation does nothing until a matcher is called"]
pub struct Expectation {
    subject: Value,
    negated: bool,
}

impl Expectation {
    /// The same matchers with inverted truth value.
    pub fn not(self) -> Self {
        Expectation {
            negated: !self.negated,
            ..self
        }
    }

    pub fn subject(&self) -> &Value {
        &self.subject
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Strictly identical: primitives by content, composites by storage.
    pub fn to_be(&self, expected: impl Into<Value>) -> Result<(), AssertionError> {
        self.check(&Matcher::Be(expected.into()))
    }

    /// Deeply equal.
    pub fn to_equal(&self, expected: impl Into<Value>) -> Result<(), AssertionError> {
        self.check(&Matcher::Equal(expected.into()))
    }

    pub fn to_be_truthy(&self) -> Result<(), AssertionError> {
        self.check(&Matcher::Truthy)
    }

    pub fn to_be_falsy(&self) -> Result<(), AssertionError> {
        self.check(&Matcher::Falsy)
    }

    pub fn to_be_null(&self) -> Result<(), AssertionError> {
        self.check(&Matcher::Null)
    }

    /// Substring of a string, or identical element of a list.
    pub fn to_contain(&self, item: impl Into<Value>) -> Result<(), AssertionError> {
        self.check(&Matcher::Contain(item.into()))
    }

    pub fn to_be_instance_of(&self, kind: Kind) -> Result<(), AssertionError> {
        self.check(&Matcher::InstanceOf(kind))
    }

    /// Every field of `pattern` is deeply equal on the subject; extra subject
    /// fields are ignored.
    pub fn object_containing(&self, pattern: impl Into<Value>) -> Result<(), AssertionError> {
        self.check(&Matcher::ObjectContaining(pattern.into()))
    }

    /// Evaluate `matcher` and compare against the expected truth value.
    pub fn check(&self, matcher: &Matcher) -> Result<(), AssertionError> {
        let holds = matcher.holds(&self.subject)?;
        tracing::trace!(
            matcher = matcher.name(),
            negated = self.negated,
            holds,
            "evaluated matcher"
        );
        if holds != self.negated {
            return Ok(());
        }
        let prefix = if self.negated { "not " } else { "" };
        Err(AssertionError::Mismatch {
            subject: self.subject.render().to_string(),
            expectation: format!("{prefix}{matcher}"),
            negated: self.negated,
        })
    }
}
