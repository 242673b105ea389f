//! The user-facing [`Value`] handle.
//!
//! A `Value` is a reference-counted handle to one variant storage. Cloning
//! (or calling [`Value::share`]) hands out another handle to the *same*
//! storage, so mutations through one handle are visible through all of them.
//! [`Value::deep_copy`] is the only way to obtain independent storage.
//!
//! ```
//! use dynamic_value::Value;
//!
//! let a = Value::from(1);
//! let b = a.share();
//! b.set("now a string");
//! assert!(a.is_string());
//!
//! let c = a.deep_copy();
//! c.set(2.5);
//! assert!(a.is_string());
//! ```

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell, RefMut};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};

use crate::map::{Slot, ValueMap};
use crate::storage::Storage;
use crate::tracing_macros::{debug, trace};
use crate::Kind;

/// A dynamically typed, JSON-like value.
///
/// The handle is not `Send`/`Sync`: storage sharing is unsynchronized, so a
/// value meant for another thread has to be deep-copied and converted first.
pub struct Value(Rc<RefCell<Storage>>);

impl Value {
    /// Creates an empty map.
    ///
    /// The map default is historical and kept for compatibility; use
    /// [`Value::null`] for an empty value.
    #[must_use]
    pub fn new() -> Self {
        Self::with_kind(Kind::Map)
    }

    /// Creates a `null` value.
    #[must_use]
    pub fn null() -> Self {
        Self::from_storage(Storage::Null)
    }

    /// Creates a value of `kind` holding that kind's default payload.
    #[must_use]
    pub fn with_kind(kind: Kind) -> Self {
        Self::from_storage(Storage::default_for(kind))
    }

    /// Builds a map from key/value pairs. Later duplicates overwrite earlier ones.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = ValueMap::new();
        for (key, value) in entries {
            let key: Value = key.into();
            let text = key.str(false);
            map.insert(
                text,
                Slot {
                    key: key.deep_copy_inner(),
                    value: value.into(),
                },
            );
        }
        Self::from_storage(Storage::Map(map))
    }

    pub(crate) fn from_storage(storage: Storage) -> Self {
        Self(Rc::new(RefCell::new(storage)))
    }

    pub(crate) fn storage(&self) -> Ref<'_, Storage> {
        self.0.borrow()
    }

    pub(crate) fn storage_mut(&self) -> RefMut<'_, Storage> {
        self.0.borrow_mut()
    }

    /// Extracts the storage, copying it when other handles still share it.
    fn into_storage(self) -> Storage {
        match Rc::try_unwrap(self.0) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => shared.borrow().clone(),
        }
    }

    // === Sharing ===

    /// Returns another handle to the same storage.
    #[must_use]
    pub fn share(&self) -> Value {
        Value(Rc::clone(&self.0))
    }

    /// Returns `true` if both handles refer to the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of handles currently sharing this storage.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Returns a value with fresh, fully independent storage.
    ///
    /// Arrays and maps are copied recursively (map keys included); scalars
    /// and strings are copied by value.
    #[must_use]
    pub fn deep_copy(&self) -> Value {
        debug!(kind = %self.kind(), "deep copy");
        self.deep_copy_inner()
    }

    pub(crate) fn deep_copy_inner(&self) -> Value {
        let storage = match &*self.storage() {
            Storage::Array(items) => Storage::Array(items.iter().map(Value::deep_copy_inner).collect()),
            Storage::Map(map) => Storage::Map(map.deep_copy()),
            other => other.clone(),
        };
        Value::from_storage(storage)
    }

    // === Kind ===

    /// Returns the active kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.storage().kind()
    }

    /// Re-types the storage to `kind`, installing that kind's default payload.
    ///
    /// The payload is cleared even when `kind` is already active.
    pub fn set_kind(&self, kind: Kind) {
        let mut storage = self.storage_mut();
        trace!(from = %storage.kind(), to = %kind, "set active kind");
        storage.set_active_kind(kind);
    }

    /// Clears the payload to the default value of the current kind.
    pub fn reset(&self) {
        let mut storage = self.storage_mut();
        let kind = storage.kind();
        storage.set_active_kind(kind);
    }

    /// Replaces the contents of the shared storage with `value`.
    ///
    /// The storage takes on the kind of `value`; nothing of the previous
    /// payload is kept. Every handle sharing this storage observes the change.
    /// When `value` is itself a shared handle its payload is copied, with
    /// array elements and map entries still shared.
    pub fn set(&self, value: impl Into<Value>) {
        let replacement = value.into().into_storage();
        let mut storage = self.storage_mut();
        trace!(from = %storage.kind(), to = %replacement.kind(), "assign");
        *storage = replacement;
    }

    /// Re-types the storage to `null`.
    pub fn set_null(&self) {
        self.set_kind(Kind::Null);
    }

    /// Moves the payload into a new handle, leaving this storage `null`.
    #[must_use]
    pub fn take(&self) -> Value {
        let storage = self.storage_mut().take();
        Value::from_storage(storage)
    }

    /// Returns `true` if this is `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    /// Returns `true` if this is a 32-bit signed integer.
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.kind() == Kind::Int
    }

    /// Returns `true` if this is a 32-bit unsigned integer.
    #[must_use]
    pub fn is_uint(&self) -> bool {
        self.kind() == Kind::UInt
    }

    /// Returns `true` if this is a 64-bit signed integer.
    #[must_use]
    pub fn is_long(&self) -> bool {
        self.kind() == Kind::Long
    }

    /// Returns `true` if this is a 64-bit unsigned integer.
    #[must_use]
    pub fn is_ulong(&self) -> bool {
        self.kind() == Kind::ULong
    }

    /// Returns `true` if this is a double.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.kind() == Kind::Double
    }

    /// Returns `true` if this is a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.kind() == Kind::Bool
    }

    /// Returns `true` if this is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.kind() == Kind::String
    }

    /// Returns `true` if this is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    /// Returns `true` if this is a map.
    #[must_use]
    pub fn is_map(&self) -> bool {
        self.kind() == Kind::Map
    }
}

// === Clone ===

impl Clone for Value {
    /// Shares the storage; see [`Value::deep_copy`] for an independent copy.
    fn clone(&self) -> Self {
        self.share()
    }
}

// === Default ===

impl Default for Value {
    fn default() -> Self {
        Self::new()
    }
}

// === Comparison, all through the canonical text ===

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || self.str(false) == other.str(false)
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.shares_storage_with(other) {
            return Ordering::Equal;
        }
        self.str(false).cmp(&other.str(false))
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.str(false).hash(state);
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value({}: ", self.kind())?;
        self.write_canonical(f, false, 0)?;
        f.write_str(")")
    }
}

// === From implementations ===

macro_rules! from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::from_storage(Storage::$variant(v))
                }
            }
        )*
    };
}

from_scalar! {
    i32 => Int,
    u32 => UInt,
    i64 => Long,
    u64 => ULong,
    f64 => Double,
    bool => Bool,
    String => String,
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::from_storage(Storage::Double(f64::from(v)))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::from_storage(Storage::String(v.into()))
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::from(v.as_str())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::null()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::null(),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    /// Collect into an array value.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::from_storage(Storage::Array(iter.into_iter().map(Into::into).collect()))
    }
}
