//! Capability traits for the underlying key-value container.
//!
//! A transformed view does not care what concrete container it wraps, only
//! that the container supports keyed lookup, a presence test, and a full
//! traversal of its entries (plus insertion and removal for mutable views).
//! This module captures those capabilities as [`Mapping`] and
//! [`MappingMut`] and implements them for the standard library maps.
//!
//! Any container implementing these traits may be wrapped by a view.

use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::hash::{BuildHasher, Hash};

/// Read access to a key-value container.
///
/// The traversal order of [`entries`](Mapping::entries) is the container's
/// own iteration order; views built on top impose no reordering.
pub trait Mapping {
    /// The key type stored in the container.
    type Key;
    /// The value type stored in the container.
    type Value;
    /// The borrowing iterator over entries.
    type Entries<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Looks up the value stored under `key`.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns `true` if the container holds an entry under `key`.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.lookup(key).is_some()
    }

    /// Iterates over the container's current entries.
    fn entries(&self) -> Self::Entries<'_>;
}

/// Write access to a key-value container.
pub trait MappingMut: Mapping {
    /// Inserts or overwrites the entry under `key`, returning the previous
    /// value if one was present.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Removes the entry under `key`, returning its value if one was
    /// present.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> MappingMut for HashMap<K, V, S> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }
}

impl<K: Ord, V> MappingMut for BTreeMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }
}
