//! Kind descriptors for values.

use std::fmt;

/// The kind of a [`Value`](crate::Value).
///
/// Its [`name`](Self::name) labels every level of the typed dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    /// The nil kind (only value: nil).
    Nil,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String.
    String,
    /// Ordered list.
    List,
    /// String-keyed map.
    Map,
    /// Named object with fields.
    Object,
}

impl ValueKind {
    /// Returns the lowercase name used in dumps.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
