//! Errors raised by value operations.
//!
//! Every operation checks the active kind (and bounds) before it touches the
//! payload, so a returned error means the value was left untouched.

use alloc::string::String;
use core::fmt::{self, Display, Formatter};

use crate::Kind;

/// Broad classification of an [`Error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation is not defined for the active kind.
    TypeMismatch,
    /// A missing map key or an index past the end.
    OutOfRange,
    /// A structurally valid operation that is intentionally unsupported.
    Unimplemented,
}

/// Error type for value operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation was invoked against a kind that does not support it.
    TypeMismatch {
        /// Name of the rejected operation
        operation: &'static str,
        /// The kind the value actually holds
        actual: Kind,
        /// The kinds the operation accepts (the target kind for conversions)
        expected: &'static [Kind],
    },
    /// Lookup of an absent key through a non-inserting accessor.
    MissingKey {
        /// Canonical text of the key
        key: String,
    },
    /// Array (or string) position at or past the end.
    IndexOutOfRange {
        /// The requested position
        index: u64,
        /// Length at the time of the request
        len: usize,
    },
    /// A string length that would split a UTF-8 sequence.
    NotCharBoundary {
        /// The requested length
        index: usize,
    },
    /// Map reverse iteration and map cursor decrement.
    Unimplemented {
        /// Name of the unsupported operation
        operation: &'static str,
    },
}

impl Error {
    pub(crate) const fn mismatch(
        operation: &'static str,
        actual: Kind,
        expected: &'static [Kind],
    ) -> Self {
        Error::TypeMismatch {
            operation,
            actual,
            expected,
        }
    }

    pub(crate) const fn out_of_range(index: u64, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// The taxonomy bucket this error falls in.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::MissingKey { .. }
            | Error::IndexOutOfRange { .. }
            | Error::NotCharBoundary { .. } => ErrorKind::OutOfRange,
            Error::Unimplemented { .. } => ErrorKind::Unimplemented,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch {
                operation,
                actual,
                expected,
            } => {
                write!(f, "dynamic value `{operation}`: expected ")?;
                for (i, kind) in expected.iter().enumerate() {
                    match i {
                        0 => {}
                        i if i + 1 == expected.len() => f.write_str(" or ")?,
                        _ => f.write_str(", ")?,
                    }
                    write!(f, "{kind}")?;
                }
                write!(f, ", got {actual}")
            }
            Error::MissingKey { key } => write!(f, "dynamic value has no member: {key}"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "dynamic value index {index} out of range for length {len}")
            }
            Error::NotCharBoundary { index } => {
                write!(f, "dynamic value string length {index} is not a char boundary")
            }
            Error::Unimplemented { operation } => {
                write!(f, "dynamic value {operation} not implemented")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Result type for value operations.
pub type Result<T> = core::result::Result<T, Error>;
