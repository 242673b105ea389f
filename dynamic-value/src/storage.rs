//! Variant storage: the tagged union behind every [`Value`] handle.
//!
//! Scalar kinds live inline; `String`, `Array` and `Map` own their payload.
//! Re-typing replaces the whole enum, so the previous payload is dropped
//! before the new one is installed and two payloads never coexist.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use crate::map::ValueMap;
use crate::{Kind, Value};

/// The active kind together with its payload.
///
/// `Clone` copies string/array/map contents element-wise. Array elements and
/// map entries are handles, so the copy shares their storage.
#[derive(Clone, Default)]
pub(crate) enum Storage {
    #[default]
    Null,
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Double(f64),
    Bool(bool),
    String(String),
    Array(Vec<Value>),
    Map(ValueMap),
}

impl Storage {
    /// Fresh default payload for `kind`: zero, `false`, or an empty container.
    pub(crate) fn default_for(kind: Kind) -> Self {
        match kind {
            Kind::Null => Storage::Null,
            Kind::Int => Storage::Int(0),
            Kind::UInt => Storage::UInt(0),
            Kind::Long => Storage::Long(0),
            Kind::ULong => Storage::ULong(0),
            Kind::Double => Storage::Double(0.0),
            Kind::Bool => Storage::Bool(false),
            Kind::String => Storage::String(String::new()),
            Kind::Array => Storage::Array(Vec::new()),
            Kind::Map => Storage::Map(ValueMap::new()),
        }
    }

    pub(crate) fn kind(&self) -> Kind {
        match self {
            Storage::Null => Kind::Null,
            Storage::Int(_) => Kind::Int,
            Storage::UInt(_) => Kind::UInt,
            Storage::Long(_) => Kind::Long,
            Storage::ULong(_) => Kind::ULong,
            Storage::Double(_) => Kind::Double,
            Storage::Bool(_) => Kind::Bool,
            Storage::String(_) => Kind::String,
            Storage::Array(_) => Kind::Array,
            Storage::Map(_) => Kind::Map,
        }
    }

    /// Drops the active payload and installs the default payload for `kind`.
    ///
    /// Requesting the current kind still clears the payload.
    pub(crate) fn set_active_kind(&mut self, kind: Kind) {
        *self = Storage::default_for(kind);
    }

    /// Moves the payload out, leaving `Null` behind.
    pub(crate) fn take(&mut self) -> Storage {
        mem::take(self)
    }

    /// Number of bytes, elements or entries; `None` for non-containers.
    pub(crate) fn len(&self) -> Option<usize> {
        match self {
            Storage::String(s) => Some(s.len()),
            Storage::Array(items) => Some(items.len()),
            Storage::Map(map) => Some(map.len()),
            _ => None,
        }
    }
}
