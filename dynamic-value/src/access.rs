//! Container operations: indexing, sizing and array/map mutation.
//!
//! Every operation checks the active kind before it touches the payload and
//! returns [`Error::TypeMismatch`] on a kind it does not support. Element
//! accessors return handles that share the element's storage, so
//! `v.at(0)?.set(1)` writes through to the container.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem::size_of;

use crate::map::Slot;
use crate::storage::Storage;
use crate::tracing_macros::trace;
use crate::{Error, Kind, Result, Value};

const SIZED: &[Kind] = &[Kind::String, Kind::Array, Kind::Map];
const RESIZABLE: &[Kind] = &[Kind::String, Kind::Array];
const INDEXABLE: &[Kind] = &[Kind::Array, Kind::Map];
const ARRAY: &[Kind] = &[Kind::Array];
const MAP: &[Kind] = &[Kind::Map];

impl Value {
    // === Indexing ===

    /// Mutable indexing.
    ///
    /// On a map an absent key is first bound to a new empty map
    /// (auto-vivification), so chains like `v.entry("a")?.entry("b")?` build
    /// nested maps. On an array this is [`Value::at`].
    pub fn entry(&self, key: impl Into<Value>) -> Result<Value> {
        let key = key.into();
        if self.is_array() {
            return self.at(key);
        }
        let text = key.str(false);
        let key = key.deep_copy_inner();
        match &mut *self.storage_mut() {
            Storage::Map(map) => {
                let (value, created) = map.get_or_insert_with(text, || Slot {
                    key,
                    value: Value::new(),
                });
                if created {
                    trace!("auto-vivified map entry");
                }
                Ok(value.share())
            }
            other => Err(Error::mismatch("entry", other.kind(), INDEXABLE)),
        }
    }

    /// Non-inserting indexing.
    ///
    /// On a map an absent key fails with [`Error::MissingKey`]. On an array
    /// the key is read with [`Value::as_ulong`] and must be below `size()`.
    pub fn at(&self, key: impl Into<Value>) -> Result<Value> {
        let key = key.into();
        match &*self.storage() {
            Storage::Map(map) => {
                let text = key.str(false);
                match map.get(&text) {
                    Some(value) => Ok(value.share()),
                    None => Err(Error::MissingKey { key: text }),
                }
            }
            Storage::Array(items) => {
                let index = key.as_ulong()?;
                usize::try_from(index)
                    .ok()
                    .and_then(|i| items.get(i))
                    .map(Value::share)
                    .ok_or(Error::out_of_range(index, items.len()))
            }
            other => Err(Error::mismatch("at", other.kind(), INDEXABLE)),
        }
    }

    /// First element of an array.
    pub fn front(&self) -> Result<Value> {
        match &*self.storage() {
            Storage::Array(items) => items
                .first()
                .map(Value::share)
                .ok_or(Error::out_of_range(0, 0)),
            other => Err(Error::mismatch("front", other.kind(), ARRAY)),
        }
    }

    /// Last element of an array.
    pub fn back(&self) -> Result<Value> {
        match &*self.storage() {
            Storage::Array(items) => items
                .last()
                .map(Value::share)
                .ok_or(Error::out_of_range(0, 0)),
            other => Err(Error::mismatch("back", other.kind(), ARRAY)),
        }
    }

    /// Whether a map holds `key`. Never inserts.
    pub fn has(&self, key: impl Into<Value>) -> Result<bool> {
        let key = key.into();
        match &*self.storage() {
            Storage::Map(map) => Ok(map.contains(&key.str(false))),
            other => Err(Error::mismatch("has", other.kind(), MAP)),
        }
    }

    // === Sizing ===

    /// Bytes of a string, elements of an array or entries of a map.
    pub fn size(&self) -> Result<usize> {
        let storage = self.storage();
        storage
            .len()
            .ok_or_else(|| Error::mismatch("size", storage.kind(), SIZED))
    }

    /// `size() == 0`.
    pub fn is_empty(&self) -> Result<bool> {
        self.size().map(|len| len == 0)
    }

    /// Upper bound on `size()` imposed by the address space.
    pub fn max_size(&self) -> Result<usize> {
        let max = isize::MAX.unsigned_abs();
        match &*self.storage() {
            Storage::String(_) => Ok(max),
            Storage::Array(_) => Ok(max / size_of::<Value>()),
            Storage::Map(_) => Ok(max / (size_of::<Slot>() + size_of::<String>())),
            other => Err(Error::mismatch("max_size", other.kind(), SIZED)),
        }
    }

    /// Allocated capacity of a string, array or map.
    pub fn capacity(&self) -> Result<usize> {
        match &*self.storage() {
            Storage::String(s) => Ok(s.capacity()),
            Storage::Array(items) => Ok(items.capacity()),
            Storage::Map(map) => Ok(map.capacity()),
            other => Err(Error::mismatch("capacity", other.kind(), SIZED)),
        }
    }

    /// Ensures room for at least `additional` more bytes, elements or entries.
    pub fn reserve(&self, additional: usize) -> Result<()> {
        match &mut *self.storage_mut() {
            Storage::String(s) => s.reserve(additional),
            Storage::Array(items) => items.reserve(additional),
            Storage::Map(map) => map.reserve(additional),
            other => return Err(Error::mismatch("reserve", other.kind(), SIZED)),
        }
        Ok(())
    }

    /// Releases unused capacity of a string or array.
    pub fn shrink_to_fit(&self) -> Result<()> {
        match &mut *self.storage_mut() {
            Storage::String(s) => s.shrink_to_fit(),
            Storage::Array(items) => items.shrink_to_fit(),
            other => return Err(Error::mismatch("shrink_to_fit", other.kind(), RESIZABLE)),
        }
        Ok(())
    }

    /// Truncates or extends a string or array to `len`.
    ///
    /// Arrays are padded with fresh default values (empty maps), strings with
    /// NUL bytes. Truncating a string inside a UTF-8 sequence fails with
    /// [`Error::NotCharBoundary`].
    pub fn resize(&self, len: usize) -> Result<()> {
        match &mut *self.storage_mut() {
            Storage::String(s) => {
                if len <= s.len() {
                    if !s.is_char_boundary(len) {
                        return Err(Error::NotCharBoundary { index: len });
                    }
                    s.truncate(len);
                } else {
                    let pad = len - s.len();
                    s.extend(core::iter::repeat_n('\0', pad));
                }
            }
            Storage::Array(items) => items.resize_with(len, Value::new),
            other => return Err(Error::mismatch("resize", other.kind(), RESIZABLE)),
        }
        Ok(())
    }

    // === Array mutation ===

    /// Appends `value` to an array. A `Value` argument is stored as a shared handle.
    pub fn push_back(&self, value: impl Into<Value>) -> Result<()> {
        self.emplace_back(value).map(drop)
    }

    /// Appends `value` to an array and returns a handle to the new element.
    pub fn emplace_back(&self, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        match &mut *self.storage_mut() {
            Storage::Array(items) => {
                items.push(value.share());
                Ok(value)
            }
            other => Err(Error::mismatch("emplace_back", other.kind(), ARRAY)),
        }
    }

    /// Inserts `value` before position `index`; `index == size()` appends.
    pub fn emplace(&self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        match &mut *self.storage_mut() {
            Storage::Array(items) => {
                if index > items.len() {
                    return Err(Error::out_of_range(index as u64, items.len()));
                }
                items.insert(index, value.share());
                Ok(value)
            }
            other => Err(Error::mismatch("emplace", other.kind(), ARRAY)),
        }
    }

    /// Removes and returns the last element; `None` on an empty array.
    pub fn pop_back(&self) -> Result<Option<Value>> {
        match &mut *self.storage_mut() {
            Storage::Array(items) => Ok(items.pop()),
            other => Err(Error::mismatch("pop_back", other.kind(), ARRAY)),
        }
    }

    /// Removes and returns the element at `index`, shifting the rest down.
    pub fn erase_at(&self, index: usize) -> Result<Value> {
        match &mut *self.storage_mut() {
            Storage::Array(items) => {
                if index >= items.len() {
                    return Err(Error::out_of_range(index as u64, items.len()));
                }
                Ok(items.remove(index))
            }
            other => Err(Error::mismatch("erase_at", other.kind(), ARRAY)),
        }
    }

    /// Replaces the array contents with `count` handles sharing `value`.
    pub fn assign_repeat(&self, count: usize, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match &mut *self.storage_mut() {
            Storage::Array(items) => {
                items.clear();
                items.extend(core::iter::repeat_n(value, count));
                Ok(())
            }
            other => Err(Error::mismatch("assign_repeat", other.kind(), ARRAY)),
        }
    }

    /// Clears the array, then appends every item of `iter`.
    pub fn assign_iter<T, I>(&self, iter: I) -> Result<()>
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        // Collected first so the iterator may read from this value.
        let values: Vec<Value> = iter.into_iter().map(Into::into).collect();
        match &mut *self.storage_mut() {
            Storage::Array(items) => {
                *items = values;
                Ok(())
            }
            other => Err(Error::mismatch("assign_iter", other.kind(), ARRAY)),
        }
    }

    // === Map mutation ===

    /// Removes `key` from a map, returning its value if it was present.
    ///
    /// The remaining entries keep their order.
    pub fn erase(&self, key: impl Into<Value>) -> Result<Option<Value>> {
        let text = key.into().str(false);
        match &mut *self.storage_mut() {
            Storage::Map(map) => Ok(map.remove(&text)),
            other => Err(Error::mismatch("erase", other.kind(), MAP)),
        }
    }

    /// Empties an array or map.
    pub fn clear(&self) -> Result<()> {
        match &mut *self.storage_mut() {
            Storage::Array(items) => items.clear(),
            Storage::Map(map) => map.clear(),
            other => return Err(Error::mismatch("clear", other.kind(), INDEXABLE)),
        }
        Ok(())
    }
}
