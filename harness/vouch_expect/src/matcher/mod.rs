//! Matcher evaluation.

use std::fmt;

use vouch_value::{equal, Kind, Value};

use crate::error::AssertionError;

/// A named check applied to a subject value.
#[derive(Clone, Debug)]
pub enum Matcher {
    /// Strict identity.
    Be(Value),
    /// Deep equality.
    Equal(Value),
    Truthy,
    Falsy,
    Null,
    /// Substring for strings, element membership for lists.
    Contain(Value),
    InstanceOf(Kind),
    /// Every key of the pattern is present and deeply equal on the subject.
    ObjectContaining(Value),
}

impl Matcher {
    /// Name of the matcher as written by test authors.
    pub fn name(&self) -> &'static str {
        match self {
            Matcher::Be(_) => "to_be",
            Matcher::Equal(_) => "to_equal",
            Matcher::Truthy => "to_be_truthy",
            Matcher::Falsy => "to_be_falsy",
            Matcher::Null => "to_be_null",
            Matcher::Contain(_) => "to_contain",
            Matcher::InstanceOf(_) => "to_be_instance_of",
            Matcher::ObjectContaining(_) => "object_containing",
        }
    }

    /// Whether the matcher's condition holds for `subject`.
    ///
    /// Usage errors (a subject that is not a container, a pattern that is not
    /// a keyed mapping) are reported as `Err` and are independent of
    /// negation.
    pub fn holds(&self, subject: &Value) -> Result<bool, AssertionError> {
        match self {
            Matcher::Be(expected) => Ok(subject.is_identical(expected)),
            Matcher::Equal(expected) => Ok(equal(subject, expected)),
            Matcher::Truthy => Ok(subject.is_truthy()),
            Matcher::Falsy => Ok(!subject.is_truthy()),
            Matcher::Null => Ok(subject.is_null()),
            Matcher::Contain(item) => subject.contains(item).ok_or_else(|| {
                self.invalid(format!("{} is not a string or list", subject.render()))
            }),
            Matcher::InstanceOf(kind) => Ok(subject.is_instance_of(kind)),
            Matcher::ObjectContaining(pattern) => {
                let Some(fields) = pattern.as_fields() else {
                    return Err(self.invalid(format!(
                        "pattern {} is not a map or record",
                        pattern.render()
                    )));
                };
                Ok(fields.iter().all(|(key, expected)| {
                    subject.get(key).is_some_and(|actual| equal(actual, expected))
                }))
            }
        }
    }

    fn invalid(&self, reason: String) -> AssertionError {
        AssertionError::InvalidUsage {
            matcher: self.name(),
            reason,
        }
    }
}

/// Description used in failure messages, e.g. `to equal [1, 2]`.
impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Be(expected) => write!(f, "to be {}", expected.render()),
            Matcher::Equal(expected) => write!(f, "to equal {}", expected.render()),
            Matcher::Truthy => f.write_str("to be truthy"),
            Matcher::Falsy => f.write_str("to be falsy"),
            Matcher::Null => f.write_str("to be null"),
            Matcher::Contain(item) => write!(f, "to contain {}", item.render()),
            Matcher::InstanceOf(kind) => write!(f, "to be an instance of {kind}"),
            Matcher::ObjectContaining(pattern) => {
                write!(f, "to contain the fields of {}", pattern.render())
            }
        }
    }
}
