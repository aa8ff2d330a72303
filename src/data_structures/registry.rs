//! Tag-keyed resource storage.
//!
//! [`TagRegistry`] is the container behind both the texture and the material
//! registry. Entries keep their insertion order (the slot index of an entry is
//! its position) while lookups by tag go through a hashed index. When a tag is
//! registered twice the later entry still occupies a slot, but lookups keep
//! resolving to the first one.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("registry is full: all {capacity} slots are taken (rejected tag `{tag}`)")]
    Full { tag: String, capacity: usize },
}

/// A value registered under a human-readable tag.
#[derive(Clone, Debug)]
pub struct Tagged<T> {
    pub tag: String,
    pub value: T,
}

#[derive(Debug)]
pub struct TagRegistry<T> {
    entries: Vec<Tagged<T>>,
    index: HashMap<String, usize>,
    capacity: Option<usize>,
}

impl<T> TagRegistry<T> {
    /// Create a registry without a slot limit.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            capacity: None,
        }
    }

    /// Create a registry that rejects inserts past `capacity` entries.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Store `value` in the next free slot and return that slot.
    pub fn insert(&mut self, tag: impl Into<String>, value: T) -> Result<usize, RegistryError> {
        let tag = tag.into();
        if self.is_full() {
            return Err(RegistryError::Full {
                tag,
                capacity: self.entries.len(),
            });
        }
        let slot = self.entries.len();
        if self.index.contains_key(&tag) {
            log::warn!(
                "tag `{}` is already registered; slot {} will not be reachable by lookup",
                tag,
                slot
            );
        } else {
            self.index.insert(tag.clone(), slot);
        }
        self.entries.push(Tagged { tag, value });
        Ok(slot)
    }

    /// Slot of the first entry registered under `tag`.
    pub fn slot(&self, tag: &str) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        self.index.get(tag).copied()
    }

    /// Value of the first entry registered under `tag`.
    pub fn get(&self, tag: &str) -> Option<&T> {
        self.slot(tag).map(|slot| &self.entries[slot].value)
    }

    pub fn entry(&self, slot: usize) -> Option<&Tagged<T>> {
        self.entries.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tagged<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.entries.len() >= capacity)
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Remove every entry, handing them back in slot order.
    pub fn drain(&mut self) -> impl Iterator<Item = Tagged<T>> + '_ {
        self.index.clear();
        self.entries.drain(..)
    }
}

impl<T> Default for TagRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
