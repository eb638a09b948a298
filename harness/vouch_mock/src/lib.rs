//! Vouch Mock - spies that record how a function was called.
//!
//! A spy wraps a function, appends each call's arguments to a shared log and
//! then delegates. Functions of several arguments take them as a tuple:
//!
//! ```text
//! let add = mock_fn(|(a, b): (i64, i64)| a + b);
//! assert_eq!(add.call((1, 2)), 3);
//! assert_eq!(add.calls(), vec![(1, 2)]);
//! ```
//!
//! The log is appended before the wrapped function runs, so a call whose
//! function panics is still recorded. Clones of a spy share one log.

mod log;
mod spy;

pub use log::CallLog;
pub use spy::{mock_fn, mock_method, Mock, MockMethod};
