use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::collections::alloc::{AllocPolicy, RawPolicy};
use crate::collections::contiguous::Buffer;
use crate::collections::error::AllocationLimitExceeded;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// A growable, random access collection with `O(1)` unordered removal, built on [`Buffer`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `remove` | `O(1)` |
/// | `erase` | `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `find` | `O(n)` |
///
/// \* If the Array doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Array has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Array<T, P: AllocPolicy<T> = RawPolicy> {
    pub(crate) buf: Buffer<T, P>,
}

impl<T, P: AllocPolicy<T>> Array<T, P> {
    /// Creates a new Array with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use policy_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub const fn new() -> Array<T, P> {
        Array {
            buf: Buffer::new(),
        }
    }

    /// Creates a new Array with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if `cap` exceeds the policy's limit.
    pub fn with_cap(cap: usize) -> Array<T, P> {
        Array {
            buf: Buffer::with_cap(cap),
        }
    }

    /// Returns the length of the Array.
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the Array contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current capacity of the Array.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the maximum number of elements the Array's policy allows.
    pub const fn limit(&self) -> usize {
        self.buf.limit()
    }

    /// Pushes `value` onto the end of the Array. If the Array is full, its capacity grows to
    /// `max(len * 2, 8)`, clamped to the policy's limit.
    ///
    /// # Errors
    /// Fails if the Array already holds `limit` elements, leaving it unchanged.
    ///
    /// # Examples
    /// ```
    /// # use policy_collections::collections::alloc::RawPolicy;
    /// # use policy_collections::collections::contiguous::Array;
    /// # use policy_collections::collections::error::AllocationLimitExceeded;
    /// let mut arr: Array<u8, RawPolicy<u8, 2>> = Array::new();
    /// assert_eq!(arr.try_push(1), Ok(()));
    /// assert_eq!(arr.try_push(2), Ok(()));
    /// assert_eq!(arr.try_push(3), Err(AllocationLimitExceeded { limit: 2 }));
    /// assert_eq!(&*arr, &[1, 2]);
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<(), AllocationLimitExceeded> {
        self.buf.try_push(value)
    }

    /// See [`try_push`](Array::try_push).
    ///
    /// # Panics
    /// Panics if the Array already holds `limit` elements.
    ///
    /// # Examples
    /// ```
    /// # use policy_collections::collections::contiguous::Array;
    /// let mut arr = Array::<u8>::new();
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Pops the last value off the end of the Array, returning it if there was one.
    pub fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Removes the element at `index` in `O(1)`, by moving the last element into its place. This
    /// means that the Array doesn't preserve the order of its elements after a removal.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use policy_collections::collections::contiguous::Array;
    /// let mut arr: Array<_> = "abcd".chars().collect();
    /// assert_eq!(arr.remove(0), 'a');
    /// assert_eq!(&*arr, &['d', 'b', 'c']);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.buf.swap_remove(index)
    }

    /// Removes the first element equal to `value` in the same manner as
    /// [`remove`](Array::remove), returning it. Does nothing if there is no such element.
    pub fn erase(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.find(value)?;
        Some(self.remove(index))
    }

    /// Inserts `value` at `index`, shifting all following elements to the right. Unlike
    /// [`remove`](Array::remove), this preserves order.
    ///
    /// # Panics
    /// Panics if `index > len` or if the Array already holds `limit` elements.
    pub fn insert(&mut self, index: usize, value: T) {
        self.buf.try_insert(index, value).throw()
    }

    /// Ensures that the Array has capacity for `count` elements in total, see
    /// [`Buffer::try_reserve`].
    ///
    /// # Errors
    /// Fails if `count` exceeds the policy's limit.
    pub fn try_reserve(&mut self, count: usize) -> Result<(), AllocationLimitExceeded> {
        self.buf.try_reserve(count)
    }

    /// See [`try_reserve`](Array::try_reserve).
    ///
    /// # Panics
    /// Panics if `count` exceeds the policy's limit.
    pub fn reserve(&mut self, count: usize) {
        self.buf.reserve(count)
    }

    /// Resizes the Array to `len` elements, see [`Buffer::try_resize_with`].
    ///
    /// # Errors
    /// Fails if `len` exceeds the policy's limit.
    pub fn try_resize_with<F>(&mut self, len: usize, f: F) -> Result<(), AllocationLimitExceeded>
    where
        F: FnMut() -> T,
    {
        self.buf.try_resize_with(len, f)
    }

    /// Resizes the Array to `len` elements, filling new elements with clones of `value`.
    ///
    /// # Panics
    /// Panics if `len` exceeds the policy's limit.
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.buf.resize(len, value)
    }

    /// Resizes the Array to `len` elements, filling new elements with their default value.
    ///
    /// # Panics
    /// Panics if `len` exceeds the policy's limit.
    pub fn resize_default(&mut self, len: usize)
    where
        T: Default,
    {
        self.buf.resize_default(len)
    }

    /// Shortens the Array to `len` elements.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len)
    }

    /// Destroys all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.buf.clear()
    }

    /// Shrinks the capacity of the Array to its length.
    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit()
    }

    /// Replaces the contents of self with clones of the elements of `other`.
    pub fn replicate<Q: AllocPolicy<T>>(&mut self, other: &Array<T, Q>)
    where
        T: Clone,
    {
        self.buf.replicate(&other.buf)
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    /// ```
    /// # use policy_collections::collections::contiguous::Array;
    /// let arr: Array<_> = [4, 8, 15, 16, 23, 42].into_iter().collect();
    /// assert_eq!(arr.find(&15), Some(2));
    /// assert_eq!(arr.find(&7), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.buf.find(value)
    }

    /// Binary searches a sorted Array for `value`.
    pub fn find_binary(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.buf.find_binary(value)
    }

    /// Binary searches an Array sorted consistently with `f`, see [`Buffer::find_binary_by`].
    pub fn find_binary_by<F>(&self, f: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.buf.find_binary_by(f)
    }

    /// Binary searches an Array sorted by the key extracted with `f`.
    pub fn find_binary_by_key<K: Ord, F>(&self, key: &K, f: F) -> Option<usize>
    where
        F: FnMut(&T) -> K,
    {
        self.buf.find_binary_by_key(key, f)
    }
}

impl<T, P: AllocPolicy<T>> Default for Array<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: AllocPolicy<T>> Deref for Array<T, P> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<T, P: AllocPolicy<T>> DerefMut for Array<T, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<T, P: AllocPolicy<T>> AsRef<[T]> for Array<T, P> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T, P: AllocPolicy<T>> AsMut<[T]> for Array<T, P> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T, P: AllocPolicy<T>> Borrow<[T]> for Array<T, P> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T, P: AllocPolicy<T>> BorrowMut<[T]> for Array<T, P> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone, P: AllocPolicy<T>> Clone for Array<T, P> {
    fn clone(&self) -> Self {
        Array {
            buf: self.buf.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.replicate(source)
    }
}

impl<T, P: AllocPolicy<T>> Extend<T> for Array<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buf.extend(iter)
    }
}

impl<T, P: AllocPolicy<T>> FromIterator<T> for Array<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            buf: Buffer::from_iter(iter),
        }
    }
}

impl<T, P: AllocPolicy<T>, const N: usize> From<[T; N]> for Array<T, P> {
    fn from(value: [T; N]) -> Self {
        let mut arr = Array::with_cap(N);
        arr.extend(value);
        arr
    }
}

impl<T: PartialEq, P: AllocPolicy<T>> PartialEq for Array<T, P> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq, P: AllocPolicy<T>> Eq for Array<T, P> {}

impl<T: Hash, P: AllocPolicy<T>> Hash for Array<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, P: AllocPolicy<T>> Debug for Array<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &DebugWith(|f| f.debug_list().entries(self.iter()).finish()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug, P: AllocPolicy<T>> Display for Array<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
