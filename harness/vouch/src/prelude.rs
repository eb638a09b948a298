//! Everything a test module needs.

pub use vouch_expect::{expect, AssertionError, Expectation};
pub use vouch_mock::{mock_fn, mock_method, Mock, MockMethod};
pub use vouch_value::{Kind, Value};

pub use crate::registry::{Each, Harness, Suite};
pub use crate::scheduler::{defer, Completion, TestError};
