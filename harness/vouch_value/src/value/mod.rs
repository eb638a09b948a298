//! Runtime values for the vouch harness.
//!
//! # Heap Enforcement
//!
//! Composite variants hold a [`Heap`], whose constructor is private to this
//! module. Use the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let list = Value::list(vec![Value::int(1), Value::int(2)]);
//! let map = Value::map_from([("a", Value::int(1))]);
//! let point = Value::record("Point", [("x", Value::int(0))]);
//! ```
//!
//! # Stringification vs. Rendering
//!
//! `Display` stringifies a value the way test names need it (`"abc"` prints
//! as `abc`, `[1, 2]` prints as `1,2`). [`Value::render`] produces the
//! literal form used in assertion messages (`"abc"`, `[1, 2]`).

mod convert;
mod heap;
mod kind;

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::stack::ensure_sufficient_stack;

pub use heap::Heap;
pub use kind::Kind;

/// Fields of a keyed mapping, iterated in key order.
pub type Fields = BTreeMap<String, Value>;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    // Primitives
    /// The null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value, wide enough for every Rust integer up to 64 bits.
    Int(i128),
    /// Floating-point value.
    Float(f64),
    /// Text. Compared by content, never by storage.
    Str(Heap<str>),

    // Composites
    /// Ordered sequence.
    List(Heap<Vec<Value>>),
    /// Keyed mapping with string keys.
    Map(Heap<Fields>),
    /// Keyed mapping tagged with a type name.
    Record(Heap<Record>),
}

/// A named keyed mapping, the runtime stand-in for a class instance.
#[derive(Clone, Debug)]
pub struct Record {
    type_name: String,
    fields: Fields,
}

impl Record {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(i128::from(n))
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    pub fn string(s: impl Into<String>) -> Self {
        let text: Rc<str> = Rc::from(s.into());
        Value::Str(Heap::shared(text))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    pub fn map(fields: Fields) -> Self {
        Value::Map(Heap::new(fields))
    }

    /// Build a map from key/value pairs. Later duplicates win.
    pub fn map_from<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::map(collect_fields(entries))
    }

    /// Build a record of type `type_name` from key/value pairs.
    pub fn record<K, V>(type_name: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(Heap::new(Record {
            type_name: type_name.into(),
            fields: collect_fields(entries),
        }))
    }
}

fn collect_fields<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

// Inspection

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether the value is a list, map or record.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_) | Value::Record(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Fields of a map or record.
    pub fn as_fields(&self) -> Option<&Fields> {
        match self {
            Value::Map(fields) => Some(&**fields),
            Value::Record(record) => Some(&record.fields),
            _ => None,
        }
    }

    /// Look up a field of a map or record. `None` for absent keys and for
    /// values that are not keyed mappings.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_fields().and_then(|fields| fields.get(key))
    }

    /// Runtime kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Record(record) => Kind::Record(record.type_name.clone()),
        }
    }

    pub fn is_instance_of(&self, kind: &Kind) -> bool {
        self.kind().is_instance_of(kind)
    }

    /// Boolean coercion: `null`, `false`, `0`, `0.0`, NaN and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::List(_) | Value::Map(_) | Value::Record(_) => true,
        }
    }

    /// Strict identity: primitives by content without coercion, composites
    /// by shared storage.
    #[allow(clippy::float_cmp, reason = "strict identity is exact comparison")]
    pub fn is_identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE comparison: NaN is never identical, +0.0 and -0.0 are.
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Heap::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The value's own containment check.
    ///
    /// Strings test for a substring of the item's stringified form (so
    /// `"a1"` contains `1`), lists test for an identical element. Returns
    /// `None` when the value is not a container.
    pub fn contains(&self, item: &Value) -> Option<bool> {
        match self {
            Value::Str(text) => Some(match item.as_str() {
                Some(needle) => text.contains(needle),
                None => text.contains(item.to_string().as_str()),
            }),
            Value::List(items) => Some(items.iter().any(|element| element.is_identical(item))),
            _ => None,
        }
    }

    /// Literal rendering for assertion messages.
    pub fn render(&self) -> Render<'_> {
        Render(self)
    }
}

// Stringification

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write_float(f, *x),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // Null elements stringify as nothing inside a joined list.
                    if !item.is_null() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::Map(_) | Value::Record(_) => write!(f, "{}", self.render()),
        })
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_infinite() {
        f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{x}")
    }
}

/// Literal rendering of a value, returned by [`Value::render`].
pub struct Render<'a>(&'a Value);

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self.0 {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item.render())?;
                }
                f.write_str("]")
            }
            Value::Map(fields) => write_fields(f, fields),
            Value::Record(record) => {
                write!(f, "{} ", record.type_name)?;
                write_fields(f, &record.fields)
            }
        })
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &Fields) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}: {}", value.render())?;
    }
    f.write_str("}")
}

#[cfg(test)]
mod tests;
