//! A growable associative container backed by a sequence of pair slots.
//!
//! Lookups are linear scans over the occupied slots, which is fine for the
//! small maps this is meant for. Removal moves the last pair into the
//! vacated slot, so slot order is not insertion order once anything has been
//! removed.

mod error;
mod pair;
mod search;

#[cfg(feature = "serde")]
mod serde;

use core::fmt;
use core::iter::Flatten;
use core::slice;

pub use error::{Error, Result};
pub use pair::Pair;
use search::linear_search_by_key;

/// Capacity of a freshly created `AssociativeArray`.
pub const DEFAULT_CAPACITY: usize = 16;

/// Iterator over the occupied pairs of an `AssociativeArray`, in slot order.
pub type Iter<'a, K, V> = Flatten<slice::Iter<'a, Option<Pair<K, V>>>>;

/// `AssociativeArray` is an unordered key/value container over a backing
/// sequence of optional pair slots.
///
/// The first `size` slots are occupied and the rest are empty. Keys are
/// unique under `PartialEq`. The backing sequence doubles whenever an insert
/// finds it full and never shrinks.
///
/// A missing ("null") key is expressed as `None`: every key-taking method
/// accepts either a key or an `Option` of one.
pub struct AssociativeArray<K, V> {
    slots: Vec<Option<Pair<K, V>>>,
    size: usize,
}

impl<K, V> Default for AssociativeArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> AssociativeArray<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` pairs before the
    /// first growth. A capacity of zero is bumped to one so doubling can
    /// make progress.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity.max(1), || None);

        AssociativeArray { slots, size: 0 }
    }

    /// Number of key/value pairs.
    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn len(&self) -> usize {
        self.size
    }

    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots in the backing sequence.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        debug_assert!(self.size <= self.slots.len());
        self.slots[..self.size].iter().flatten()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> {
        self.iter().map(Pair::key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> {
        self.iter().map(Pair::value)
    }

    /// Doubles the backing sequence. Occupied pairs keep their indices.
    fn expand(&mut self) {
        let capacity = self.capacity() * 2;
        log::trace!(
            "expanding associative array from {} to {} slots",
            self.capacity(),
            capacity
        );

        self.slots.resize_with(capacity, || None);
    }
}

impl<K: PartialEq, V> AssociativeArray<K, V> {
    /// Index of the first occupied slot holding `key`.
    fn find(&self, key: &K) -> Result<usize> {
        linear_search_by_key(self.iter(), key).ok_or_else(Error::key_not_found)
    }

    fn pair_mut(&mut self, index: usize) -> Result<&mut Pair<K, V>> {
        self.slots[index].as_mut().ok_or_else(Error::key_not_found)
    }

    /// Associates `value` with `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullKey`] if `key` is `None`. Nothing is modified in
    /// that case.
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<()> {
        match key.into() {
            Some(key) => {
                self.insert(key, value);
                Ok(())
            }
            None => {
                log::debug!("rejecting null key in set");
                Err(Error::NullKey)
            }
        }
    }

    /// Inserts a pair and returns the previous value if the key was present.
    /// A new key is appended after the last occupied slot, doubling the
    /// backing sequence first if it is full.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Ok(index) = self.find(&key) {
            return self
                .pair_mut(index)
                .ok()
                .map(|pair| pair.replace_value(value));
        }

        if self.size == self.capacity() {
            self.expand();
        }

        self.slots[self.size] = Some(Pair::new(key, value));
        self.size += 1;

        None
    }

    /// Looks up the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `key` is `None` or not present.
    pub fn get<'k>(&self, key: impl Into<Option<&'k K>>) -> Result<&V>
    where
        K: 'k,
    {
        let key = key.into().ok_or_else(Error::null_key_lookup)?;
        let index = self.find(key)?;

        self.slots[index]
            .as_ref()
            .map(Pair::value)
            .ok_or_else(Error::key_not_found)
    }

    /// Mutable counterpart of [`AssociativeArray::get`].
    pub fn get_mut<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Result<&mut V>
    where
        K: 'k,
    {
        let key = key.into().ok_or_else(Error::null_key_lookup)?;
        let index = self.find(key)?;

        self.pair_mut(index).map(Pair::value_mut)
    }

    /// Returns `true` if `key` is present. A `None` key is never present.
    pub fn has_key<'k>(&self, key: impl Into<Option<&'k K>>) -> bool
    where
        K: 'k,
    {
        key.into().is_some_and(|key| self.find(key).is_ok())
    }

    /// Removes `key` and returns its value, or does nothing if the key is
    /// `None` or absent.
    ///
    /// The last occupied pair is moved into the vacated slot rather than
    /// shifting the tail down, so the relative order of the remaining pairs
    /// changes.
    pub fn remove<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Option<V>
    where
        K: 'k,
    {
        let index = self.find(key.into()?).ok()?;
        let last = self.size - 1;

        // When `index == last` the swap is a no-op and the take clears it.
        self.slots.swap(index, last);
        let removed = self.slots[last].take();
        self.size -= 1;

        removed.map(|pair| pair.into_inner().1)
    }
}

impl<K: Clone, V: Clone> Clone for AssociativeArray<K, V> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        while copy.capacity() < self.size {
            copy.expand();
        }

        for (slot, pair) in copy.slots.iter_mut().zip(self.iter()) {
            *slot = Some(pair.clone());
        }
        copy.size = self.size;

        copy
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AssociativeArray<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .iter()
                .all(|pair| other.get(pair.key()).is_ok_and(|value| value == pair.value()))
    }
}

impl<K: Eq, V: Eq> Eq for AssociativeArray<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|pair| (pair.key(), pair.value())))
            .finish()
    }
}

/// Renders as `{K0:V0, K1:V1, ...}` in slot order.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, pair) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pair}")?;
        }
        f.write_str("}")
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for AssociativeArray<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for AssociativeArray<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, K, V> IntoIterator for &'a AssociativeArray<K, V> {
    type Item = &'a Pair<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
