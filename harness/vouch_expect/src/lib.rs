//! Vouch Expect - the assertion surface of the vouch test harness.
//!
//! `expect(value)` wraps a subject in an [`Expectation`]; each matcher
//! returns `Result<(), AssertionError>` so a failing check leaves the test
//! function through `?`:
//!
//! ```text
//! expect(5).to_be(5)?;
//! expect(5).not().to_be(6)?;
//! expect(vec![1, 2]).to_equal(vec![1, 2])?;
//! expect(Value::map_from([("a", 1), ("b", 2)]))
//!     .object_containing(Value::map_from([("a", 1)]))?;
//! ```
//!
//! Every matcher is a [`Matcher`] variant evaluated by one function; the
//! negated surface (`not()`) flips the expected truth value instead of
//! duplicating matcher logic.

mod error;
mod expectation;
mod matcher;

pub use error::AssertionError;
pub use expectation::{expect, Expectation};
pub use matcher::Matcher;
