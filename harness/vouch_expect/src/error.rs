//! Assertion failures.

use thiserror::Error;

/// Failure raised by a matcher.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// The matcher's condition did not have the expected truth value.
    #[error("expected {subject} {expectation}")]
    Mismatch {
        /// Rendered subject value.
        subject: String,
        /// Matcher description, prefixed with `not ` when negated.
        expectation: String,
        negated: bool,
    },
    /// The matcher cannot be applied to its arguments. Fails under `not()`
    /// as well.
    #[error("{matcher}: {reason}")]
    InvalidUsage {
        matcher: &'static str,
        reason: String,
    },
}

impl AssertionError {
    pub fn is_negated(&self) -> bool {
        matches!(self, AssertionError::Mismatch { negated: true, .. })
    }
}
