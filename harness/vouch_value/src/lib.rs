//! Vouch Value - runtime values inspected by the vouch test harness.
//!
//! This crate provides:
//! - The dynamically-typed [`Value`] that matchers assert on and that
//!   parameterized tests receive as their sample
//! - Runtime classification of values ([`Kind`])
//! - The deep equality comparator ([`equal`]) used by `to_equal` and
//!   `object_containing`
//!
//! # Identity vs. Equality
//!
//! Primitives (`Null`, `Bool`, `Int`, `Float`, `Str`) are identical when
//! their contents are identical. Composites (`List`, `Map`, `Record`) are
//! identical only when they share storage, which cloning preserves:
//!
//! ```text
//! let a = Value::list(vec![Value::int(1)]);
//! let b = a.clone();                          // identical to `a`
//! let c = Value::list(vec![Value::int(1)]);   // equal to `a`, not identical
//! ```

mod equal;
mod stack;
mod value;

pub use equal::equal;
pub use stack::ensure_sufficient_stack;
pub use value::{Fields, Heap, Kind, Record, Value};
