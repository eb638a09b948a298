//! Deep structural equality.
//!
//! Three layers, checked in order:
//! 1. `Null` equals only `Null`.
//! 2. Composites: a list equals only a list of the same length with pairwise
//!    equal elements; maps and records are compared over the union of their
//!    keys, where a key missing on one side never equals a present one.
//! 3. Primitives: strict identity, no coercion.
//!
//! Maps and records compare as plain keyed mappings: the record type name
//! does not take part in equality.

use crate::stack::ensure_sufficient_stack;
use crate::value::{Fields, Value};

/// Structural equality of two values.
pub fn equal(a: &Value, b: &Value) -> bool {
    ensure_sufficient_stack(|| match (a, b) {
        (Value::Null, other) | (other, Value::Null) => other.is_null(),
        _ if a.is_composite() || b.is_composite() => composite_equal(a, b),
        _ => a.is_identical(b),
    })
}

fn composite_equal(a: &Value, b: &Value) -> bool {
    if !(a.is_composite() && b.is_composite()) {
        return false;
    }
    match (a.as_list(), b.as_list()) {
        (Some(left), Some(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(x, y)| equal(x, y))
        }
        (None, None) => match (a.as_fields(), b.as_fields()) {
            (Some(left), Some(right)) => fields_equal(left, right),
            _ => false,
        },
        _ => false,
    }
}

fn fields_equal(left: &Fields, right: &Fields) -> bool {
    left.keys()
        .chain(right.keys())
        .all(|key| match (left.get(key), right.get(key)) {
            (Some(x), Some(y)) => equal(x, y),
            (None, None) => true,
            _ => false,
        })
}

/// `==` on values is deep equality, so `assert_eq!` compares structure.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equal(self, other)
    }
}

#[cfg(test)]
mod tests;
