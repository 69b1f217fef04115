//! Key/payload pairs for map-like users of the trees.
//!
//! The trees store whole values and only ever compare them. A map stores an [`Entry`] whose
//! ordering and equality look at the key alone, so inserting an entry with an existing key
//! overwrites the old payload and a lookup can be made with any payload at all.
//!
//! ```
//! use ordtree::{AvlTree, Entry};
//!
//! let mut tree = AvlTree::new();
//! tree.add(Entry::new(1, "one"));
//! tree.add(Entry::new(1, "uno"));
//!
//! assert_eq!(tree.size(), 1);
//! assert_eq!(tree.get(&Entry::lookup(1)).map(Entry::value), Some(&"uno"));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A key with an attached payload. Compared by key only.
#[derive(Clone, Debug)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Pairs `key` with `value`.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Builds an entry that is only good for lookups: its payload is `V::default()`.
    pub fn lookup(key: K) -> Self
    where
        V: Default,
    {
        Self::new(key, V::default())
    }

    /// The ordering key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Splits the entry back into its key and payload.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Entry<K, V> {}

impl<K: Ord, V> PartialOrd for Entry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for Entry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.value)
    }
}
