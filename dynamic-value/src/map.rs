//! Map payload: entries keyed by the canonical text of their key.

use alloc::string::String;

use indexmap::IndexMap;
use indexmap::map::Entry as SlotEntry;

use crate::Value;

/// A key-value pair as stored in a map payload.
#[derive(Clone)]
pub(crate) struct Slot {
    /// Independent copy of the key the entry was created with
    pub(crate) key: Value,
    pub(crate) value: Value,
}

/// Map payload.
///
/// Two keys are the same key iff their canonical texts are identical, so the
/// backing store is indexed by that text. Entries keep insertion order; the
/// serialized form (and with it equality) follows that order.
#[derive(Clone, Default)]
pub(crate) struct ValueMap {
    slots: IndexMap<String, Slot>,
}

impl ValueMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    pub(crate) fn contains(&self, text: &str) -> bool {
        self.slots.contains_key(text)
    }

    pub(crate) fn get(&self, text: &str) -> Option<&Value> {
        self.slots.get(text).map(|slot| &slot.value)
    }

    /// Returns the value stored under `text`, inserting `make()` first if absent.
    ///
    /// The `bool` is `true` when a new entry was created.
    pub(crate) fn get_or_insert_with(
        &mut self,
        text: String,
        make: impl FnOnce() -> Slot,
    ) -> (&Value, bool) {
        match self.slots.entry(text) {
            SlotEntry::Occupied(o) => (&o.into_mut().value, false),
            SlotEntry::Vacant(v) => (&v.insert(make()).value, true),
        }
    }

    /// Inserts or overwrites the entry under `text`, keeping its position if it existed.
    pub(crate) fn insert(&mut self, text: String, slot: Slot) -> Option<Value> {
        self.slots.insert(text, slot).map(|old| old.value)
    }

    /// Removes the entry under `text`, preserving the order of the others.
    pub(crate) fn remove(&mut self, text: &str) -> Option<Value> {
        self.slots.shift_remove(text).map(|slot| slot.value)
    }

    pub(crate) fn get_index(&self, index: usize) -> Option<&Slot> {
        self.slots.get_index(index).map(|(_, slot)| slot)
    }

    pub(crate) fn get_index_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_index_mut(index).map(|(_, slot)| slot)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.values()
    }

    /// Recursively copies every key and value into independent storage.
    pub(crate) fn deep_copy(&self) -> Self {
        let slots = self
            .slots
            .iter()
            .map(|(text, slot)| {
                let copy = Slot {
                    key: slot.key.deep_copy_inner(),
                    value: slot.value.deep_copy_inner(),
                };
                (text.clone(), copy)
            })
            .collect();
        Self { slots }
    }
}
