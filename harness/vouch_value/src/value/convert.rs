//! Conversions from Rust values into [`Value`].
//!
//! These let test code write `expect(5)`, `expect("text")` or
//! `expect(vec![1, 2])` without building values by hand.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::{Fields, Value};

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_lossless_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i128::from(n))
                }
            }
        )*
    };
}

from_lossless_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

// Pointer-sized integers are at most 64 bits wide on every supported target.
#[allow(clippy::cast_possible_truncation, reason = "usize and isize fit in 64 bits")]
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(i128::from(n as u64))
    }
}

#[allow(clippy::cast_possible_truncation, reason = "usize and isize fit in 64 bits")]
impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Int(i128::from(n as i64))
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::string(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::string(s.as_str())
    }
}

/// `None` converts to `Null`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::list(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::list(items.iter().cloned().map(Into::into).collect())
    }
}

macro_rules! from_tuple {
    ($($field:ident: $ty:ident),+) => {
        impl<$($ty: Into<Value>),+> From<($($ty,)+)> for Value {
            fn from(($($field,)+): ($($ty,)+)) -> Self {
                Value::list(vec![$($field.into()),+])
            }
        }
    };
}

from_tuple!(a: A);
from_tuple!(a: A, b: B);
from_tuple!(a: A, b: B, c: C);
from_tuple!(a: A, b: B, c: C, d: D);

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::map_from(map)
    }
}

impl<K: Into<String>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect::<Fields>())
    }
}
