//! Runtime classification of values.

use std::fmt;

/// The runtime kind of a [`Value`](super::Value), used by `to_be_instance_of`.
///
/// `Record` carries the record's type name, so `Kind::record("Point")`
/// only classifies records built as `Point`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Map,
    Record(String),
}

impl Kind {
    /// Kind of records with the given type name.
    pub fn record(type_name: impl Into<String>) -> Self {
        Kind::Record(type_name.into())
    }

    /// Short name used in assertion messages.
    pub fn name(&self) -> &str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "str",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Record(name) => name,
        }
    }

    /// Whether a value of kind `self` is an instance of `other`.
    ///
    /// Kinds must match exactly, except that every record is also a map.
    pub fn is_instance_of(&self, other: &Kind) -> bool {
        match (self, other) {
            (Kind::Record(_), Kind::Map) => true,
            _ => self == other,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
