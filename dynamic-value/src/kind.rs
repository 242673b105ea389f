//! The discriminant of a dynamic value.

use core::fmt::{self, Display, Formatter};

/// Enum distinguishing the ten kinds a [`Value`](crate::Value) can hold.
///
/// Exactly one kind is active per storage at any time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// No payload
    Null,
    /// Signed 32-bit integer
    Int,
    /// Unsigned 32-bit integer
    UInt,
    /// Signed 64-bit integer
    Long,
    /// Unsigned 64-bit integer
    ULong,
    /// 64-bit float
    Double,
    /// Boolean
    Bool,
    /// Owned UTF-8 string
    String,
    /// Ordered sequence of values
    Array,
    /// Mapping from value to value
    Map,
}

impl Kind {
    /// All kinds, in discriminant order.
    pub const ALL: [Kind; 10] = [
        Kind::Null,
        Kind::Int,
        Kind::UInt,
        Kind::Long,
        Kind::ULong,
        Kind::Double,
        Kind::Bool,
        Kind::String,
        Kind::Array,
        Kind::Map,
    ];

    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Int => "int",
            Kind::UInt => "uint",
            Kind::Long => "long",
            Kind::ULong => "ulong",
            Kind::Double => "double",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Map => "map",
        }
    }

    /// Returns `true` for the kinds that own a heap payload.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Kind::String | Kind::Array | Kind::Map)
    }

    /// Returns `true` for the numeric and boolean kinds.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !self.is_container() && !matches!(self, Kind::Null)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
