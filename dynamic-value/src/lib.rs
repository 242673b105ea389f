//! `dynamic-value` provides a dynamically typed, JSON-like value for code that
//! builds or inspects semi-structured data without a fixed schema.
//!
//! # Features
//!
//! - **Ten kinds**: null, four integer widths, double, bool, string, array and map
//! - **Shared handles**: cloning a [`Value`] shares its storage; [`Value::deep_copy`] does not
//! - **Lenient views**: numeric, boolean and string coercions between scalar kinds
//! - **Uniform cursors**: arrays and maps are walked through the same [`Cursor`] type
//! - **Canonical text**: one deterministic rendering drives `Display`, equality,
//!   ordering and hashing
//!
//! # Example
//!
//! ```
//! use dynamic_value::{Kind, Value};
//!
//! let config = Value::new();
//! config.entry("server")?.entry("port")?.set(8080);
//! config.entry("tags")?.set(vec!["a", "b"]);
//!
//! assert_eq!(config.at("server")?.at("port")?.as_int()?, 8080);
//! assert_eq!(config.to_string(), r#"{"server": {"port": 8080}, "tags": ["a", "b"]}"#);
//! assert_eq!(config.at("tags")?.kind(), Kind::Array);
//! # Ok::<(), dynamic_value::Error>(())
//! ```
//!
//! # Equality
//!
//! Values compare, order and hash by their compact canonical text. Two maps
//! holding the same entries in a different insertion order are therefore
//! *not* equal, and `true` never equals `1`.
//!
//! # Cargo features
//!
//! - `tracing`: emit `tracing` events for re-typing, auto-vivification and
//!   deep copies
//! - `serde`: implement `serde::Serialize` for [`Value`]

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]

extern crate alloc;

mod tracing_macros;

#[macro_use]
mod macros;

mod kind;
pub use kind::Kind;

mod error;
pub use error::{Error, ErrorKind, Result};

mod map;
mod storage;

mod value;
pub use value::Value;

mod access;
mod coerce;
mod format;

mod cursor;
pub use cursor::{
    Access, Const, Cursor, Direction, Entry, Forward, Iter, IterMut, Mut, RevIter, RevIterMut,
    Reverse,
};

#[cfg(feature = "serde")]
mod serde_impl;
