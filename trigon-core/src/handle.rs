//! Opaque renderer handles.
//!
//! A [`Handle`] is the token a platform layer stores on the managed side (a `long` field on
//! Android) and passes back on every call. It carries no structure; it only names an entry in
//! a [`HandleTable`].

use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroU64;

/// Identifier of a renderer. Unique for the lifetime of the table that issued it.
///
/// The raw value `0` is never a valid handle, so platform layers can use it to signal that
/// creation failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(NonZeroU64);

impl Handle {
    /// Largest raw value a handle can take, so that it round-trips through a signed 64-bit
    /// integer.
    pub const MAX_RAW: u64 = i64::MAX as u64;

    /// Reconstruct a handle from the value returned by [`Handle::into_raw`].
    ///
    /// Returns `None` for zero and negative values, which no table ever issues.
    pub fn from_raw(raw: i64) -> Option<Handle> {
        u64::try_from(raw).ok().and_then(NonZeroU64::new).map(Handle)
    }

    /// The raw value to hand to the managed side.
    pub fn into_raw(self) -> i64 {
        // Tables never issue values above `MAX_RAW`.
        self.0.get() as i64
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A map from [`Handle`]s to values that never reuses a handle.
#[derive(Debug)]
pub struct HandleTable<T> {
    entries: HashMap<Handle, T>,
    next: u64,
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HandleTable<T> {
    pub fn new() -> Self {
        Self { entries: HashMap::new(), next: 1 }
    }

    /// Store `value` under a fresh handle.
    ///
    /// Returns `None` once every representable handle has been issued.
    pub fn insert(&mut self, value: T) -> Option<Handle> {
        if self.next > Handle::MAX_RAW {
            return None;
        }
        let handle = Handle(NonZeroU64::new(self.next)?);
        self.next += 1;
        self.entries.insert(handle, value);
        Some(handle)
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.entries.get(&handle)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.entries.get_mut(&handle)
    }

    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        self.entries.remove(&handle)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.entries.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry, yielding them in handle order.
    pub fn drain(&mut self) -> impl Iterator<Item = (Handle, T)> {
        let mut entries: Vec<_> = self.entries.drain().collect();
        entries.sort_by_key(|(handle, _)| *handle);
        entries.into_iter()
    }
}
