//! Numeric, boolean and string views of a value.
//!
//! Scalar-to-scalar views use Rust's `as` casts: integer narrowing and sign
//! changes wrap, `double` to integer truncates toward zero (saturating), and
//! `bool` reads as 0 or 1. `null` reads as zero, `false` or `"null"`.
//! Strings, arrays and maps have no numeric view.

use alloc::string::String;

use crate::storage::Storage;
use crate::{Error, Kind, Result, Value};

macro_rules! numeric_view {
    ($(#[$doc:meta])* $name:ident -> $ty:ty, $kind:expr) => {
        $(#[$doc])*
        #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
        pub fn $name(&self) -> Result<$ty> {
            match &*self.storage() {
                Storage::Null => Ok(0 as $ty),
                Storage::Int(v) => Ok(*v as $ty),
                Storage::UInt(v) => Ok(*v as $ty),
                Storage::Long(v) => Ok(*v as $ty),
                Storage::ULong(v) => Ok(*v as $ty),
                Storage::Double(v) => Ok(*v as $ty),
                Storage::Bool(v) => Ok(u8::from(*v) as $ty),
                other => Err(Error::mismatch(stringify!($name), other.kind(), &[$kind])),
            }
        }
    };
}

impl Value {
    numeric_view! {
        /// Reads the value as a 32-bit signed integer.
        as_int -> i32, Kind::Int
    }

    numeric_view! {
        /// Reads the value as a 32-bit unsigned integer.
        as_uint -> u32, Kind::UInt
    }

    numeric_view! {
        /// Reads the value as a 64-bit signed integer.
        as_long -> i64, Kind::Long
    }

    numeric_view! {
        /// Reads the value as a 64-bit unsigned integer.
        as_ulong -> u64, Kind::ULong
    }

    numeric_view! {
        /// Reads the value as a double.
        as_double -> f64, Kind::Double
    }

    /// Reads the value as a boolean.
    ///
    /// Numbers are `true` when non-zero. Strings, arrays and maps are `true`
    /// when non-empty.
    pub fn as_bool(&self) -> Result<bool> {
        Ok(match &*self.storage() {
            Storage::Null => false,
            Storage::Int(v) => *v != 0,
            Storage::UInt(v) => *v != 0,
            Storage::Long(v) => *v != 0,
            Storage::ULong(v) => *v != 0,
            Storage::Double(v) => *v != 0.0,
            Storage::Bool(v) => *v,
            Storage::String(s) => !s.is_empty(),
            Storage::Array(items) => !items.is_empty(),
            Storage::Map(map) => map.len() != 0,
        })
    }

    /// Reads the value as text.
    ///
    /// A string yields its raw contents; every other kind yields its
    /// canonical text, pretty-printed when `pretty` is set.
    #[must_use]
    pub fn as_string(&self, pretty: bool) -> String {
        if let Storage::String(s) = &*self.storage() {
            return s.clone();
        }
        self.str(pretty)
    }
}

macro_rules! try_from_value {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl TryFrom<&Value> for $ty {
                type Error = Error;

                fn try_from(value: &Value) -> Result<Self> {
                    value.$method()
                }
            }
        )*
    };
}

try_from_value! {
    i32 => as_int,
    u32 => as_uint,
    i64 => as_long,
    u64 => as_ulong,
    f64 => as_double,
    bool => as_bool,
}

impl From<&Value> for String {
    fn from(value: &Value) -> Self {
        value.as_string(false)
    }
}
