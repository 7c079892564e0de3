use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::ops::Index;

use super::{Entry, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::collections::alloc::{AllocPolicy, Policy, Position, RawPolicy, SizeType};
use crate::collections::contiguous::Buffer;
use crate::collections::error::AllocationLimitExceeded;
use crate::util::fmt::{DebugRaw, DebugWith};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// The capacity of a HashDictionary after its first growth.
pub const MIN_ALLOCATED_CAP: usize = 16;

const GROWTH_FACTOR: usize = 2;

/// A map of keys to values, stored as a dense array of entries and a sparse index over it.
///
/// Entries live contiguously in a [`Buffer`], in insertion order until the first erase. The index
/// is a second Buffer with one slot per unit of capacity, each holding the dense position of an
/// entry or [`npos`](Policy::npos). A key's home slot is its hash modulo the capacity and
/// collisions are resolved by linear probing. Both arrays are allocated by the same policy `P`.
///
/// The load factor is kept at or below 1/2: an insertion that would reach it first rehashes to
/// double the capacity. Erasing fills the hole in the dense array with the last entry, and shifts
/// the rest of the probe cluster backwards so that no tombstones are needed.
///
/// It is a logic error for keys in a HashDictionary to be manipulated in a way that changes their
/// hash. Because of this, HashDictionary's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashDictionary.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `find` | `O(1)`* |
/// | `get` | `O(1)`* |
/// | `erase` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `rehash` | `O(n)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while the
/// probe sequence is followed.
///
/// \** If the HashDictionary has reached its load factor, `insert` will rehash in `O(n)`. \*
/// applies as well.
///
/// # Examples
/// ```
/// # use policy_collections::collections::hash::HashDictionary;
/// let mut ages: HashDictionary<&str, u32> = HashDictionary::new();
/// assert!(ages.insert("ada", 36));
/// assert!(ages.insert("alan", 41));
/// assert!(!ages.insert("ada", 99), "The first value wins.");
///
/// assert_eq!(ages.get("ada"), Some(&36));
/// assert_eq!(ages.erase("alan"), Some(41));
/// assert_eq!(ages.find("alan"), None);
/// ```
pub struct HashDictionary<K, V, P = RawPolicy, B = RandomState>
where
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
{
    pub(crate) entries: Buffer<Entry<K, V>, P>,
    pub(crate) index: Buffer<Position<P>, P>,
    pub(crate) hasher: B,
}

/// The result of following the probe sequence of a key.
enum Probe {
    /// The key is stored in the dense array at `pos`, referred to by `slot`.
    Found { slot: usize, pos: usize },
    /// The key isn't present, and `slot` is the first empty slot of its probe sequence.
    Vacant { slot: usize },
    /// The HashDictionary has no capacity, so there is no probe sequence.
    Unallocated,
}

impl<K, V, P, B> HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher + Default,
{
    /// Creates a new HashDictionary with capacity 0 and the default value for `B`. Memory will be
    /// allocated when the capacity changes.
    pub fn new() -> HashDictionary<K, V, P, B> {
        HashDictionary::with_hasher(B::default())
    }

    /// Creates a new HashDictionary with `cap` slots. The default hasher will be used.
    ///
    /// # Panics
    /// Panics if `cap` exceeds the policy's limit.
    pub fn with_cap(cap: usize) -> HashDictionary<K, V, P, B> {
        HashDictionary::with_cap_and_hasher(cap, B::default())
    }
}

impl<K, V, P, B> HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{
    /// Creates a new HashDictionary with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashDictionary<K, V, P, B> {
        HashDictionary {
            entries: Buffer::new(),
            index: Buffer::new(),
            hasher,
        }
    }

    /// Creates a new HashDictionary with `cap` slots and the provided `hasher`.
    ///
    /// # Panics
    /// Panics if `cap` exceeds the policy's limit.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashDictionary<K, V, P, B> {
        let mut dict = HashDictionary::with_hasher(hasher);
        if cap > 0 {
            dict.rehash(cap);
        }
        dict
    }

    /// Returns the number of entries in the HashDictionary.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the HashDictionary contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashDictionary, which is the number of index slots.
    pub const fn cap(&self) -> usize {
        self.index.len()
    }

    /// Returns the hasher used by the HashDictionary.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Inserts `key` associated with `value`, unless the key is already present, in which case
    /// nothing changes and `value` is dropped. Returns true if the entry was inserted.
    ///
    /// If the insertion would bring the load factor to 1/2, the HashDictionary is first rehashed
    /// to double its capacity (or [`MIN_ALLOCATED_CAP`]). Keys are looked up before that check,
    /// so inserting a key which is already present never rehashes.
    ///
    /// # Errors
    /// Fails if the doubled capacity exceeds the policy's limit, leaving the HashDictionary
    /// unchanged.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<bool, AllocationLimitExceeded> {
        let hash = self.hasher.hash_one(&key);
        if let Probe::Found { .. } = self.probe(&key, hash) {
            return Ok(false);
        }

        if (self.len() + 1) * 2 >= self.cap() {
            self.try_grow()?;
        }

        let slot = match self.probe(&key, hash) {
            Probe::Vacant { slot } => slot,
            // SAFETY: The key wasn't found before, and growth allocated at least one slot.
            _ => unsafe { None.unreachable() },
        };

        self.index[slot] = Self::to_position(self.len());
        // SAFETY: The dense array always has as much capacity as the index, and len < cap.
        unsafe {
            self.entries.push_unchecked(Entry {
                key,
                value,
                hash,
                slot,
            });
        }
        Ok(true)
    }

    /// See [`try_insert`](HashDictionary::try_insert).
    ///
    /// # Panics
    /// Panics if the doubled capacity exceeds the policy's limit.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.try_insert(key, value).throw()
    }

    /// Returns the dense position of the entry for `key`, or None if there is no such entry.
    pub fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(key, self.hasher.hash_one(key)) {
            Probe::Found { pos, .. } => Some(pos),
            _ => None,
        }
    }

    /// Returns the entry for `key` as a key-value pair, or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = &self.entries[self.find(key)?];
        Some((&entry.key, &entry.value))
    }

    /// Returns a reference to the value associated with `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Some(&self.entries[self.find(key)?].value)
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find(key)?;
        Some(&mut self.entries[pos].value)
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns the entry at dense position `pos`.
    pub fn entry_at(&self, pos: usize) -> Option<&Entry<K, V>> {
        self.entries.get(pos)
    }

    /// Returns the dense array of entries.
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    /// Removes the entry for `key`, returning its value if it exists.
    ///
    /// The last entry of the dense array moves into the erased entry's position.
    pub fn erase<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.erase_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key`, returning it as a key-value pair if it exists.
    pub fn erase_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (slot, pos) = match self.probe(key, self.hasher.hash_one(key)) {
            Probe::Found { slot, pos } => (slot, pos),
            _ => return None,
        };

        let last = self.len() - 1;
        if pos != last {
            // The last entry is about to move into pos.
            let moved_slot = self.entries[last].slot;
            self.index[moved_slot] = Self::to_position(pos);
        }

        self.index[slot] = <P as Policy>::npos();
        let removed = self.entries.swap_remove(pos);
        self.close_gap(slot);

        Some(removed.into_pair())
    }

    /// Rehashes the HashDictionary into `cap` slots, re-probing every entry in dense order.
    ///
    /// # Errors
    /// Fails if `cap` exceeds the policy's limit, leaving the HashDictionary unchanged.
    ///
    /// # Panics
    /// Panics if `cap` isn't greater than the number of entries, as at least one slot must stay
    /// empty for probing to terminate.
    pub fn try_rehash(&mut self, cap: usize) -> Result<(), AllocationLimitExceeded> {
        assert!(
            cap > self.len(),
            "Can't rehash {} entries into {cap} slots!",
            self.len()
        );

        // Allocate both arrays before touching self, so that a failure leaves it unchanged.
        let new_entries = Buffer::try_with_cap(cap)?;
        let new_index = Buffer::try_filled(cap, &<P as Policy>::npos())?;

        let old_cap = self.cap();
        let old_entries = mem::replace(&mut self.entries, new_entries);
        self.index = new_index;

        for mut entry in old_entries {
            // Keys are unique, so the first empty slot is always the right one.
            let slot = self.vacant_slot(entry.hash);
            self.index[slot] = Self::to_position(self.len());
            entry.slot = slot;
            // SAFETY: The new dense array has cap slots and cap > the number of entries.
            unsafe { self.entries.push_unchecked(entry); }
        }

        log::debug!(
            "rehashed HashDictionary<{}, {}> from {old_cap} to {cap} slots",
            std::any::type_name::<K>(),
            std::any::type_name::<V>(),
        );
        Ok(())
    }

    /// See [`try_rehash`](HashDictionary::try_rehash).
    ///
    /// # Panics
    /// Panics if `cap` exceeds the policy's limit, or isn't greater than the number of entries.
    pub fn rehash(&mut self, cap: usize) {
        self.try_rehash(cap).throw()
    }

    /// Increases the capacity of the HashDictionary so that `extra` more entries can be inserted
    /// without a rehash.
    ///
    /// # Errors
    /// Fails if the required capacity exceeds the policy's limit.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), AllocationLimitExceeded> {
        let required = self.len()
            .saturating_add(extra)
            .saturating_mul(2)
            .saturating_add(1);

        if required <= self.cap() {
            return Ok(());
        }

        <P as Policy>::check_limit(required)?;
        self.try_rehash(required)
    }

    /// See [`try_reserve`](HashDictionary::try_reserve).
    ///
    /// # Panics
    /// Panics if the required capacity exceeds the policy's limit.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Removes all entries, keeping the capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.fill(<P as Policy>::npos());
    }

    /// Returns an iterator over all key-value pairs, in dense order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over all key-value pairs with mutable values, in dense order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }

    /// Returns an iterator over all keys, in dense order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values, in dense order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values as mutable references, in dense order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes self and returns an iterator over all keys.
    pub fn into_keys(self) -> IntoKeys<K, V, P> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all values.
    pub fn into_values(self) -> IntoValues<K, V, P> {
        IntoValues(self.into_iter())
    }
}

impl<K, V, P, B> HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{
    /// Converts a dense position to the policy's position type.
    fn to_position(pos: usize) -> Position<P> {
        <Position<P> as SizeType>::from_usize(pos)
    }

    /// Returns the home slot for `hash`. The capacity must not be 0.
    pub(crate) const fn home(&self, hash: u64) -> usize {
        (hash % self.cap() as u64) as usize
    }

    /// Follows the probe sequence of `key` from its home slot until either an entry with an equal
    /// key or an empty slot is found. Stored hashes are compared before keys.
    fn probe<Q>(&self, key: &Q, hash: u64) -> Probe
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.cap() == 0 {
            return Probe::Unallocated;
        }

        let mut slot = self.home(hash);
        loop {
            let pos = self.index[slot];
            if pos.is_npos() {
                return Probe::Vacant { slot };
            }

            let entry = &self.entries[pos.to_usize()];
            if entry.hash == hash && entry.key.borrow() == key {
                return Probe::Found { slot, pos: pos.to_usize() };
            }

            // The load factor keeps at least one slot empty, so this can't loop forever.
            slot = (slot + 1) % self.cap();
        }
    }

    /// Returns the first empty slot of the probe sequence for `hash`. The capacity must not be 0.
    fn vacant_slot(&self, hash: u64) -> usize {
        let mut slot = self.home(hash);
        while !self.index[slot].is_npos() {
            slot = (slot + 1) % self.cap();
        }
        slot
    }

    /// Grows the index to double its capacity, or [`MIN_ALLOCATED_CAP`]. The target is never
    /// clamped, so growth past the policy's limit fails before anything is allocated.
    fn try_grow(&mut self) -> Result<(), AllocationLimitExceeded> {
        let target = cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);
        <P as Policy>::check_limit(target)?;
        self.try_rehash(target)
    }

    /// Shifts the entries of the probe cluster following `hole` backwards, so that every entry
    /// remains reachable from its home slot without crossing an empty slot.
    fn close_gap(&mut self, mut hole: usize) {
        let cap = self.cap();
        let mut current = (hole + 1) % cap;

        loop {
            let pos = self.index[current];
            if pos.is_npos() {
                break;
            }

            let home = self.home(self.entries[pos.to_usize()].hash);
            // An entry can only fill the hole if its home doesn't lie cyclically within
            // (hole, current], otherwise it would become unreachable.
            let reachable_without_move = if hole <= current {
                hole < home && home <= current
            } else {
                hole < home || home <= current
            };

            if !reachable_without_move {
                self.index[hole] = pos;
                self.index[current] = <P as Policy>::npos();
                self.entries[pos.to_usize()].slot = hole;
                hole = current;
            }

            current = (current + 1) % cap;
        }
    }
}

impl<K, V, P, B> Default for HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher + Default,
{
    fn default() -> Self {
        HashDictionary::new()
    }
}

impl<K, V, P, B> Clone for HashDictionary<K, V, P, B>
where
    K: Clone,
    V: Clone,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: Clone,
{
    /// Deep copies every entry. The copy has the same capacity and layout as the original.
    fn clone(&self) -> Self {
        let mut entries = Buffer::with_cap(self.index.len());
        entries.replicate(&self.entries);

        HashDictionary {
            entries,
            index: self.index.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, P, B> PartialEq for HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    V: PartialEq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{
    /// Two HashDictionaries are equal if they map the same keys to equal values, regardless of
    /// order or capacity.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, P, B> Eq for HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    V: Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{}

impl<K, V, P, B> Extend<(K, V)> for HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, P, B> FromIterator<(K, V)> for HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = HashDictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<K, V, P, B, Q> Index<&Q> for HashDictionary<K, V, P, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{
    type Output = V;

    /// # Panics
    /// Panics if there is no entry for `key`.
    fn index(&self, key: &Q) -> &Self::Output {
        match self.get(key) {
            Some(value) => value,
            None => panic!("Key not found in HashDictionary!"),
        }
    }
}

impl<K, V, P, B> Debug for HashDictionary<K, V, P, B>
where
    K: Hash + Eq + Debug,
    V: Debug,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashDictionary")
            .field("entries", &DebugWith(|f| f.debug_list().entries(
                self.iter().map(|(k, v)| DebugRaw(format!("({k:?}: {v:?})")))
            ).finish()))
            .field("index", &DebugWith(|f| f.debug_list().entries(
                self.index.iter().map(|pos| DebugRaw(if pos.is_npos() {
                    "-".into()
                } else {
                    pos.to_usize().to_string()
                }))
            ).finish()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K, V, P, B> Display for HashDictionary<K, V, P, B>
where
    K: Hash + Eq + Debug,
    V: Debug,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
