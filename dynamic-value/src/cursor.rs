//! Cursors over arrays and maps.
//!
//! A [`Cursor`] walks either backing with the same interface: dereferencing
//! yields an [`Entry`] whose key is the empty string for an array element and
//! a copy of the entry key for a map entry. Arrays support both directions;
//! maps only move forward.
//!
//! ```
//! use dynamic_value::Value;
//!
//! let v = Value::from_entries([("a", 1), ("b", 2)]);
//! let keys: Vec<String> = v.iter()?.map(|e| e.key.as_string(false)).collect();
//! assert_eq!(keys, ["a", "b"]);
//! assert!(v.rev_iter().is_err());
//! # Ok::<(), dynamic_value::Error>(())
//! ```

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;

use crate::storage::Storage;
use crate::tracing_macros::debug;
use crate::{Error, Kind, Result, Value};

const ARRAY: &[Kind] = &[Kind::Array];
const MAP: &[Kind] = &[Kind::Map];
const INDEXABLE: &[Kind] = &[Kind::Array, Kind::Map];

/// Read-only access marker.
#[derive(Debug, Clone, Copy)]
pub struct Const;

/// Read-write access marker: the cursor can rebind the slot it points at.
#[derive(Debug, Clone, Copy)]
pub struct Mut;

/// Front-to-back direction marker.
#[derive(Debug, Clone, Copy)]
pub struct Forward;

/// Back-to-front direction marker.
#[derive(Debug, Clone, Copy)]
pub struct Reverse;

mod private {
    pub trait Sealed {}
    impl Sealed for super::Const {}
    impl Sealed for super::Mut {}
    impl Sealed for super::Forward {}
    impl Sealed for super::Reverse {}
}

/// Access mode of a cursor, [`Const`] or [`Mut`].
pub trait Access: private::Sealed {}
impl Access for Const {}
impl Access for Mut {}

/// Walking direction of a cursor, [`Forward`] or [`Reverse`].
pub trait Direction: private::Sealed {
    /// Whether positions count down from the back.
    const REVERSE: bool;
}

impl Direction for Forward {
    const REVERSE: bool = false;
}

impl Direction for Reverse {
    const REVERSE: bool = true;
}

/// Read-only forward cursor.
pub type Iter = Cursor<Const, Forward>;
/// Read-write forward cursor.
pub type IterMut = Cursor<Mut, Forward>;
/// Read-only reverse cursor (arrays only).
pub type RevIter = Cursor<Const, Reverse>;
/// Read-write reverse cursor (arrays only).
pub type RevIterMut = Cursor<Mut, Reverse>;

/// What a cursor yields.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The empty string for arrays, an independent copy of the key for maps
    pub key: Value,
    /// Handle sharing the element's storage
    pub value: Value,
}

/// A position within an array or map.
///
/// The cursor holds a handle to the container, so it stays usable while the
/// container is mutated; a position that falls past the end then reads as
/// out of range, and re-typing the container makes every access fail.
///
/// Reverse cursors store the position one past the element they address,
/// so `rbegin` sits at `size()` and `rend` at 0.
pub struct Cursor<A: Access, D: Direction> {
    container: Value,
    backing: Kind,
    pos: usize,
    _marker: PhantomData<fn() -> (A, D)>,
}

impl<A: Access, D: Direction> Cursor<A, D> {
    fn new(container: &Value, backing: Kind, pos: usize) -> Self {
        Self {
            container: container.share(),
            backing,
            pos,
            _marker: PhantomData,
        }
    }

    /// The kind of container the cursor was created over.
    #[must_use]
    pub fn backing(&self) -> Kind {
        self.backing
    }

    fn mismatch(&self, operation: &'static str, actual: Kind) -> Error {
        let expected = if self.backing == Kind::Map { MAP } else { ARRAY };
        Error::mismatch(operation, actual, expected)
    }

    /// Container length, failing if the container is no longer of the backing kind.
    fn len(&self, operation: &'static str) -> Result<usize> {
        let storage = self.container.storage();
        match (&*storage, self.backing) {
            (Storage::Array(items), Kind::Array) => Ok(items.len()),
            (Storage::Map(map), Kind::Map) => Ok(map.len()),
            (other, _) => Err(self.mismatch(operation, other.kind())),
        }
    }

    /// Index of the addressed element, if the cursor addresses one.
    fn index(&self) -> Option<usize> {
        if D::REVERSE {
            self.pos.checked_sub(1)
        } else {
            Some(self.pos)
        }
    }

    /// Dereferences the cursor.
    ///
    /// Fails with [`Error::IndexOutOfRange`] at the end position.
    pub fn get(&self) -> Result<Entry> {
        let storage = self.container.storage();
        let index = self.index();
        match (&*storage, self.backing) {
            (Storage::Array(items), Kind::Array) => index
                .and_then(|i| items.get(i))
                .map(|value| Entry {
                    key: Value::from(""),
                    value: value.share(),
                })
                .ok_or(Error::out_of_range(self.pos as u64, items.len())),
            (Storage::Map(map), Kind::Map) => index
                .and_then(|i| map.get_index(i))
                .map(|slot| Entry {
                    key: slot.key.deep_copy_inner(),
                    value: slot.value.share(),
                })
                .ok_or(Error::out_of_range(self.pos as u64, map.len())),
            (other, _) => Err(self.mismatch("cursor get", other.kind())),
        }
    }

    /// Moves one step in the cursor's direction.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when already at the end.
    pub fn advance(&mut self) -> Result<()> {
        let len = self.len("cursor advance")?;
        if D::REVERSE {
            self.pos = self
                .pos
                .checked_sub(1)
                .ok_or(Error::out_of_range(0, len))?;
        } else {
            if self.pos >= len {
                return Err(Error::out_of_range(self.pos as u64, len));
            }
            self.pos += 1;
        }
        Ok(())
    }

    /// Moves one step against the cursor's direction.
    ///
    /// Map cursors only move forward and fail with [`Error::Unimplemented`].
    pub fn retreat(&mut self) -> Result<()> {
        let len = self.len("cursor retreat")?;
        if self.backing == Kind::Map {
            debug!("rejected map cursor decrement");
            return Err(Error::Unimplemented {
                operation: "map cursor decrement",
            });
        }
        if D::REVERSE {
            if self.pos >= len {
                return Err(Error::out_of_range(self.pos as u64, len));
            }
            self.pos += 1;
        } else {
            self.pos = self
                .pos
                .checked_sub(1)
                .ok_or(Error::out_of_range(0, len))?;
        }
        Ok(())
    }

    /// Returns `true` when the cursor sits on its end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        match self.len("cursor is_end") {
            Ok(_) if D::REVERSE => self.pos == 0,
            Ok(len) => self.pos >= len,
            Err(_) => true,
        }
    }
}

impl<D: Direction> Cursor<Mut, D> {
    /// Rebinds the addressed slot to `value`, returning the previous handle.
    ///
    /// Other handles to the previous element are unaffected.
    pub fn replace(&self, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        let index = self.index();
        let mut storage = self.container.storage_mut();
        match (&mut *storage, self.backing) {
            (Storage::Array(items), Kind::Array) => {
                let len = items.len();
                let slot = index
                    .and_then(|i| items.get_mut(i))
                    .ok_or(Error::out_of_range(self.pos as u64, len))?;
                Ok(core::mem::replace(slot, value))
            }
            (Storage::Map(map), Kind::Map) => {
                let len = map.len();
                let slot = index
                    .and_then(|i| map.get_index_mut(i))
                    .ok_or(Error::out_of_range(self.pos as u64, len))?;
                Ok(core::mem::replace(&mut slot.value, value))
            }
            (other, _) => Err(self.mismatch("cursor replace", other.kind())),
        }
    }
}

impl<A: Access, D: Direction> Iterator for Cursor<A, D> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        let entry = self.get().ok()?;
        if D::REVERSE {
            self.pos -= 1;
        } else {
            self.pos += 1;
        }
        Some(entry)
    }
}

impl<A: Access, D: Direction> Clone for Cursor<A, D> {
    fn clone(&self) -> Self {
        Self::new(&self.container, self.backing, self.pos)
    }
}

impl<A: Access, D: Direction> PartialEq for Cursor<A, D> {
    /// Same container storage and same position.
    fn eq(&self, other: &Self) -> bool {
        self.container.shares_storage_with(&other.container)
            && self.backing == other.backing
            && self.pos == other.pos
    }
}

impl<A: Access, D: Direction> Eq for Cursor<A, D> {}

impl<A: Access, D: Direction> Debug for Cursor<A, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("backing", &self.backing)
            .field("reverse", &D::REVERSE)
            .field("pos", &self.pos)
            .finish()
    }
}

impl Value {
    /// Kind and length of the container, for cursor construction.
    fn cursor_backing(&self, operation: &'static str, reverse: bool) -> Result<(Kind, usize)> {
        let storage = self.storage();
        match &*storage {
            Storage::Array(items) => Ok((Kind::Array, items.len())),
            Storage::Map(_) if reverse => {
                debug!(operation, "rejected map reverse iteration");
                Err(Error::Unimplemented {
                    operation: "map reverse iteration",
                })
            }
            Storage::Map(map) => Ok((Kind::Map, map.len())),
            other => Err(Error::mismatch(operation, other.kind(), INDEXABLE)),
        }
    }

    fn forward_cursor<A: Access>(
        &self,
        operation: &'static str,
        at_end: bool,
    ) -> Result<Cursor<A, Forward>> {
        let (backing, len) = self.cursor_backing(operation, false)?;
        Ok(Cursor::new(self, backing, if at_end { len } else { 0 }))
    }

    fn reverse_cursor<A: Access>(
        &self,
        operation: &'static str,
        at_end: bool,
    ) -> Result<Cursor<A, Reverse>> {
        let (backing, len) = self.cursor_backing(operation, true)?;
        Ok(Cursor::new(self, backing, if at_end { 0 } else { len }))
    }

    /// Read-write cursor at the first element.
    pub fn begin(&self) -> Result<IterMut> {
        self.forward_cursor("begin", false)
    }

    /// Read-write cursor one past the last element.
    pub fn end(&self) -> Result<IterMut> {
        self.forward_cursor("end", true)
    }

    /// Read-write reverse cursor at the last element. Arrays only.
    pub fn rbegin(&self) -> Result<RevIterMut> {
        self.reverse_cursor("rbegin", false)
    }

    /// Read-write reverse cursor one before the first element. Arrays only.
    pub fn rend(&self) -> Result<RevIterMut> {
        self.reverse_cursor("rend", true)
    }

    /// Read-only cursor at the first element.
    pub fn cbegin(&self) -> Result<Iter> {
        self.forward_cursor("cbegin", false)
    }

    /// Read-only cursor one past the last element.
    pub fn cend(&self) -> Result<Iter> {
        self.forward_cursor("cend", true)
    }

    /// Read-only reverse cursor at the last element. Arrays only.
    pub fn crbegin(&self) -> Result<RevIter> {
        self.reverse_cursor("crbegin", false)
    }

    /// Read-only reverse cursor one before the first element. Arrays only.
    pub fn crend(&self) -> Result<RevIter> {
        self.reverse_cursor("crend", true)
    }

    /// Iterates the entries of an array or map.
    pub fn iter(&self) -> Result<Iter> {
        self.cbegin()
    }

    /// Like [`Value::iter`], with cursors that can rebind slots.
    pub fn iter_mut(&self) -> Result<IterMut> {
        self.begin()
    }

    /// Iterates an array back to front.
    pub fn rev_iter(&self) -> Result<RevIter> {
        self.crbegin()
    }

    /// Like [`Value::rev_iter`], with cursors that can rebind slots.
    pub fn rev_iter_mut(&self) -> Result<RevIterMut> {
        self.rbegin()
    }
}
