use std::borrow::{Borrow, BorrowMut};
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::slice;

use super::Storage;
use crate::collections::alloc::{AllocPolicy, RawPolicy};
use crate::collections::error::{AllocationLimitExceeded, IndexOutOfBounds};
use crate::util::fmt::DebugWith;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// The capacity of a collection after its first growth.
pub const INITIAL_CAP: usize = 8;

pub(crate) const GROWTH_FACTOR: usize = 2;

/// The growable core shared by every sequential collection: a contiguous run of slots allocated
/// by `P`, of which the first `len` are live.
///
/// Buffer implements the storage contract ([`try_reserve`](Buffer::try_reserve),
/// [`try_resize_with`](Buffer::try_resize_with), [`replicate`](Buffer::replicate), searching and
/// destruction) and is specialised by [`Array`](super::super::Array),
/// [`Stack`](super::super::Stack) and, through its [`Storage`], [`Queue`](super::super::Queue).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Buffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `try_push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `swap_remove` | `O(1)` |
/// | `try_reserve` | `O(n)`**, `O(1)` |
/// | `find` | `O(n)` |
/// | `find_binary` | `O(log n)` |
///
/// \* If the Buffer doesn't have enough capacity for the new element, `try_push` will take
/// `O(n)`.
///
/// \** If the Buffer has enough capacity already, `try_reserve` is `O(1)`.
pub struct Buffer<T, P: AllocPolicy<T> = RawPolicy> {
    pub(crate) storage: Storage<T, P>,
    pub(crate) len: usize,
}

impl<T, P: AllocPolicy<T>> Buffer<T, P> {
    /// Creates a new Buffer with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    pub const fn new() -> Buffer<T, P> {
        Buffer {
            storage: Storage::new(),
            len: 0,
        }
    }

    /// Creates a new Buffer with capacity exactly equal to `cap`.
    ///
    /// # Errors
    /// Fails if `cap` exceeds the policy's limit.
    pub fn try_with_cap(cap: usize) -> Result<Buffer<T, P>, AllocationLimitExceeded> {
        Ok(Buffer {
            storage: Storage::try_with_cap(cap)?,
            len: 0,
        })
    }

    /// Creates a new Buffer with capacity exactly equal to `cap`.
    ///
    /// # Panics
    /// Panics if `cap` exceeds the policy's limit.
    pub fn with_cap(cap: usize) -> Buffer<T, P> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a Buffer of `len` clones of `fill`, with capacity equal to its length.
    ///
    /// # Errors
    /// Fails if `len` exceeds the policy's limit.
    pub fn try_filled(len: usize, fill: &T) -> Result<Buffer<T, P>, AllocationLimitExceeded>
    where
        T: Clone,
    {
        Ok(Buffer {
            storage: Storage::try_filled(len, fill)?,
            len,
        })
    }

    /// Returns the number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Buffer contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    pub const fn cap(&self) -> usize {
        self.storage.cap
    }

    /// Returns the maximum number of elements allowed by the policy.
    pub const fn limit(&self) -> usize {
        P::LIMIT
    }

    /// Ensures that the Buffer has capacity for at least `count` elements in total. Does nothing
    /// if `count <= cap`, otherwise the capacity becomes `min(count + 1, limit)`. The extra slot
    /// means that reserving for exactly `count` pushes doesn't force a second reallocation on the
    /// last one.
    ///
    /// # Errors
    /// Fails without modifying the Buffer if `count` exceeds the policy's limit.
    pub fn try_reserve(&mut self, count: usize) -> Result<(), AllocationLimitExceeded> {
        if count <= self.cap() {
            return Ok(());
        }
        P::check_limit(count)?;

        // count <= LIMIT <= isize::MAX, so the addition can't overflow.
        self.try_realloc(cmp::min(count + 1, P::LIMIT))
    }

    /// See [`try_reserve`](Buffer::try_reserve).
    ///
    /// # Panics
    /// Panics if `count` exceeds the policy's limit.
    pub fn reserve(&mut self, count: usize) {
        self.try_reserve(count).throw()
    }

    /// Pushes `value` onto the end of the Buffer, growing by [`GROWTH_FACTOR`] (or to
    /// [`INITIAL_CAP`]) if there is no spare capacity.
    ///
    /// # Errors
    /// Fails if the Buffer already holds `limit` elements. The Buffer is left unchanged and
    /// `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocationLimitExceeded> {
        if self.len == self.cap() {
            self.try_grow()?;
        }

        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value); }
        Ok(())
    }

    /// Pushes `value` onto the end of the Buffer, assuming that there is enough capacity.
    ///
    /// # Safety
    /// The Buffer must have `len < cap`.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.cap());
        // SAFETY: The caller guarantees that the slot at len exists, and it is vacant.
        unsafe { P::construct(self.storage.slot(self.len), value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Buffer, returning it if there was one.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before taking.
            self.len -= 1;
            // SAFETY: The slot at the new len is within capacity and live.
            Some(unsafe { P::take(self.storage.slot(self.len)) })
        }
    }

    /// Removes the element at `index` in `O(1)` by swapping it with the last element first. The
    /// order of the remaining elements isn't preserved.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.check_index(index);

        let last = self.len - 1;
        if index != last {
            self.swap(index, last);
        }
        // SAFETY: The Buffer isn't empty, because index < len.
        unsafe { self.pop().unreachable() }
    }

    /// Inserts `value` at `index`, shifting all following elements to the right.
    ///
    /// # Errors
    /// Fails if the Buffer already holds `limit` elements.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), AllocationLimitExceeded> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }

        self.try_push(value)?;
        self[index..].rotate_right(1);
        Ok(())
    }

    /// Shortens the Buffer to `len` elements, destroying the rest. Does nothing if the Buffer is
    /// already shorter.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.len -= 1;
            // SAFETY: The slot at the new len is live, and is no longer counted as live.
            unsafe { P::destroy(self.storage.slot(self.len)); }
        }
    }

    /// Destroys all elements. The capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the Buffer to `len` elements. Shrinking destroys the elements in `[len, self.len)`,
    /// growing reserves capacity and fills the new elements with the results of `f`.
    ///
    /// # Errors
    /// Fails without adding elements if `len` exceeds the policy's limit.
    pub fn try_resize_with<F>(&mut self, len: usize, mut f: F) -> Result<(), AllocationLimitExceeded>
    where
        F: FnMut() -> T,
    {
        if len <= self.len {
            self.truncate(len);
            return Ok(());
        }

        self.try_reserve(len)?;
        while self.len < len {
            // SAFETY: Capacity for len elements was just reserved.
            unsafe { self.push_unchecked(f()); }
        }
        Ok(())
    }

    /// See [`try_resize_with`](Buffer::try_resize_with).
    ///
    /// # Panics
    /// Panics if `len` exceeds the policy's limit.
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, f: F) {
        self.try_resize_with(len, f).throw()
    }

    /// Resizes the Buffer to `len` elements, filling new elements with clones of `value`.
    ///
    /// # Panics
    /// Panics if `len` exceeds the policy's limit.
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(len, || value.clone())
    }

    /// Resizes the Buffer to `len` elements, filling new elements with the default value of `T`.
    ///
    /// # Panics
    /// Panics if `len` exceeds the policy's limit.
    pub fn resize_default(&mut self, len: usize)
    where
        T: Default,
    {
        self.resize_with(len, T::default)
    }

    /// Shrinks the capacity of the Buffer to its length.
    pub fn shrink_to_fit(&mut self) {
        // Shrinking can't exceed the limit, because len <= cap <= LIMIT.
        self.try_realloc(self.len).throw()
    }

    /// Replaces the contents of self with clones of the live elements of `other`. Only
    /// `other.len()` elements are copied, never its spare capacity.
    ///
    /// # Panics
    /// Panics if `other` holds more elements than self's policy allows, which can't happen when
    /// both share a policy.
    pub fn replicate<Q: AllocPolicy<T>>(&mut self, other: &Buffer<T, Q>)
    where
        T: Clone,
    {
        self.clear();
        self.reserve(other.len());

        for value in other.iter() {
            // SAFETY: Capacity for other.len() elements was just reserved.
            unsafe { self.push_unchecked(value.clone()); }
        }
    }

    /// Returns the index of the first element equal to `value`, or None if there isn't one.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Binary searches the Buffer with a comparator, which should return the ordering of the probed
    /// element relative to the target. The result is unspecified if the Buffer isn't sorted
    /// consistently with `f`.
    pub fn find_binary_by<F>(&self, mut f: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut low = 0;
        let mut high = self.len;

        while low < high {
            let mid = low + (high - low) / 2;
            match f(&self[mid]) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Some(mid),
            }
        }

        None
    }

    /// Binary searches the Buffer for an element whose key, as extracted by `f`, equals `key`.
    /// The Buffer must be sorted by the same key.
    pub fn find_binary_by_key<K, F>(&self, key: &K, mut f: F) -> Option<usize>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.find_binary_by(|item| f(item).cmp(key))
    }

    /// Binary searches the Buffer for `value`. The Buffer must be sorted in ascending order.
    pub fn find_binary(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find_binary_by(|item| item.cmp(value))
    }

    /// Grows the Buffer so that it can take at least one more element: the new capacity is
    /// `max(len * GROWTH_FACTOR, INITIAL_CAP)`, clamped to the policy's limit.
    pub(crate) fn try_grow(&mut self) -> Result<(), AllocationLimitExceeded> {
        let required = self.len + 1;
        P::check_limit(required)?;

        // len <= isize::MAX, so doubling can't overflow.
        let new_cap = cmp::max(self.len * GROWTH_FACTOR, INITIAL_CAP).clamp(required, P::LIMIT);
        self.try_realloc(new_cap)
    }

    /// Reallocates the underlying Storage with the provided capacity.
    pub(crate) fn try_realloc(&mut self, new_cap: usize) -> Result<(), AllocationLimitExceeded> {
        debug_assert!(new_cap >= self.len);
        // SAFETY: Exactly the first len slots are live and new_cap >= len.
        unsafe { self.storage.try_realloc(new_cap, self.len) }
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }

    /// Takes the Storage out of self, along with the number of live elements it holds, leaving an
    /// empty Buffer behind.
    pub(crate) fn take_storage(&mut self) -> (Storage<T, P>, usize) {
        let len = mem::replace(&mut self.len, 0);
        (mem::replace(&mut self.storage, Storage::new()), len)
    }
}

impl<T, P: AllocPolicy<T>> Default for Buffer<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: AllocPolicy<T>> Drop for Buffer<T, P> {
    fn drop(&mut self) {
        // Destroy exactly the live elements, the spare slots are already vacant.
        self.clear();

        // Implicitly drop self.storage, which deallocates the owned memory.
    }
}

impl<T, P: AllocPolicy<T>> Deref for Buffer<T, P> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are live, properly aligned and within one allocation of at
        // most isize::MAX bytes. The borrow checker prevents mutation for the returned lifetime.
        unsafe { slice::from_raw_parts(self.storage.ptr.as_ptr(), self.len) }
    }
}

impl<T, P: AllocPolicy<T>> DerefMut for Buffer<T, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and self is uniquely borrowed for the returned lifetime.
        unsafe { slice::from_raw_parts_mut(self.storage.ptr.as_ptr(), self.len) }
    }
}

impl<T, P: AllocPolicy<T>> AsRef<[T]> for Buffer<T, P> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T, P: AllocPolicy<T>> AsMut<[T]> for Buffer<T, P> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T, P: AllocPolicy<T>> Borrow<[T]> for Buffer<T, P> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T, P: AllocPolicy<T>> BorrowMut<[T]> for Buffer<T, P> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone, P: AllocPolicy<T>> Clone for Buffer<T, P> {
    fn clone(&self) -> Self {
        // The copy is sized to the live range, spare capacity isn't carried over.
        let mut buf = Self::with_cap(self.len);
        buf.replicate(self);
        buf
    }

    fn clone_from(&mut self, source: &Self) {
        self.replicate(source);
    }
}

impl<T, P: AllocPolicy<T>> Extend<T> for Buffer<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.try_push(item).throw();
        }
    }
}

impl<T, P: AllocPolicy<T>> FromIterator<T> for Buffer<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Buffer::new();
        buf.extend(iter);
        buf
    }
}

impl<T: PartialEq, P: AllocPolicy<T>> PartialEq for Buffer<T, P> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq, P: AllocPolicy<T>> Eq for Buffer<T, P> {}

impl<T: Hash, P: AllocPolicy<T>> Hash for Buffer<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, P: AllocPolicy<T>> Debug for Buffer<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("contents", &DebugWith(|f| f.debug_list().entries(self.iter()).finish()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}
