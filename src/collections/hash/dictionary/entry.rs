/// A key-value pair stored in the dense array of a [`HashDictionary`](super::HashDictionary),
/// along with the full hash of its key and the index slot that refers to it.
#[derive(Debug, Clone, Default)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
    pub(crate) slot: usize,
}

impl<K, V> Entry<K, V> {
    /// Returns a reference to the key of this Entry.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value of this Entry.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value of this Entry.
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the full hash of the key, as produced by the dictionary's hasher.
    pub const fn hash(&self) -> u64 {
        self.hash
    }

    /// Returns the index slot that this Entry was probed into.
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Consumes the Entry, returning its key and value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
