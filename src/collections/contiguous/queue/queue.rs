use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use super::Iter;
use crate::collections::alloc::{AllocPolicy, RawPolicy};
use crate::collections::contiguous::buffer::{GROWTH_FACTOR, INITIAL_CAP, Storage};
use crate::collections::error::IndexOutOfBounds;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// A first-in, first-out collection over a circular run of slots.
///
/// Elements are enqueued at `back` and dequeued from `front`, both of which wrap around the end of
/// the allocation, so neither operation moves any other element. When the Queue is full it grows
/// like an [`Array`](super::super::Array), laying its elements out again in logical order.
///
/// A Queue which already holds `limit` elements is *saturated*: [`enqueue`](Queue::enqueue) drops
/// any further values instead of failing.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* If the Queue doesn't have enough capacity for the new element, `enqueue` will take `O(n)`.
///
/// # Examples
/// ```
/// # use policy_collections::collections::contiguous::Queue;
/// let mut queue: Queue<u8> = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Some(1));
///
/// queue.enqueue(3);
/// assert_eq!(queue[0], 2);
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [2, 3]);
/// ```
pub struct Queue<T, P: AllocPolicy<T> = RawPolicy> {
    pub(crate) storage: Storage<T, P>,
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) len: usize,
}

impl<T, P: AllocPolicy<T>> Queue<T, P> {
    /// Creates a new, empty Queue without allocating.
    pub const fn new() -> Queue<T, P> {
        Queue {
            storage: Storage::new(),
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Creates a new Queue with room for `cap` elements.
    ///
    /// # Panics
    /// Panics if `cap` exceeds the policy's limit.
    pub fn with_cap(cap: usize) -> Queue<T, P> {
        Queue {
            storage: Storage::try_with_cap(cap).throw(),
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Queue.
    pub const fn cap(&self) -> usize {
        self.storage.cap
    }

    /// Returns the maximum number of elements the Queue's policy allows.
    pub const fn limit(&self) -> usize {
        P::LIMIT
    }

    /// Returns true if the Queue holds `limit` elements, meaning that further calls to
    /// [`enqueue`](Queue::enqueue) are ignored.
    pub const fn is_saturated(&self) -> bool {
        self.len == P::LIMIT
    }

    /// Adds `value` to the back of the Queue, growing it first if it is full. If the Queue is
    /// [saturated](Queue::is_saturated), `value` is dropped and the Queue is left unchanged.
    pub fn enqueue(&mut self, value: T) {
        if self.is_saturated() {
            log::warn!(
                "dropped a value enqueued onto a Queue<{}> saturated at {} elements",
                std::any::type_name::<T>(),
                P::LIMIT,
            );
            return;
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: len < cap, so the slot at back is vacant and in bounds.
        unsafe { P::construct(self.storage.slot(self.back), value); }
        self.back = (self.back + 1) % self.cap();
        self.len += 1;
    }

    /// Removes the element at the front of the Queue and returns it, or None if the Queue is
    /// empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: The Queue isn't empty, so the slot at front is live. It is vacant once front
        // moves past it.
        let value = unsafe { P::take(self.storage.slot(self.front)) };
        self.front = (self.front + 1) % self.cap();
        self.len -= 1;
        Some(value)
    }

    /// Returns a reference to the element at the front of the Queue, the next to be dequeued.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the most recently enqueued element.
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Returns a reference to the element `index` places behind the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // SAFETY: The physical slot of any index below len is live.
            Some(unsafe { self.storage.slot(self.physical(index)).as_ref() })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element `index` places behind the front.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            // SAFETY: The physical slot of any index below len is live, and self is borrowed
            // mutably for the returned lifetime.
            Some(unsafe { self.storage.slot(self.physical(index)).as_mut() })
        } else {
            None
        }
    }

    /// Returns a reference to the element `index` places behind the front.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw(),
        }
    }

    /// Destroys all elements, keeping the capacity.
    pub fn clear(&mut self) {
        while self.len > 0 {
            self.len -= 1;
            // SAFETY: The physical slot of the last logical index is live, and is no longer
            // counted once len is decremented.
            unsafe { P::destroy(self.storage.slot(self.physical(self.len))); }
        }

        self.front = 0;
        self.back = 0;
    }

    /// Returns an iterator over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            queue: self,
            start: 0,
            end: self.len,
        }
    }

    /// Maps a logical index to the physical slot holding it.
    pub(crate) const fn physical(&self, index: usize) -> usize {
        let slot = self.front + index;
        if slot >= self.storage.cap {
            slot - self.storage.cap
        } else {
            slot
        }
    }

    /// Moves the element at the back of the Queue out, leaving its slot vacant.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        self.back = self.physical(self.len);
        // SAFETY: back is now the physical slot of the last live element, which is no longer
        // counted as live.
        Some(unsafe { P::take(self.storage.slot(self.back)) })
    }

    /// Grows a full Queue to `max(len * GROWTH_FACTOR, INITIAL_CAP)` slots, clamped to the
    /// policy's limit. The elements are laid out in logical order afterwards, so `front` is 0.
    fn grow(&mut self) {
        debug_assert!(self.len == self.cap() && self.len < P::LIMIT);
        let new_cap = cmp::max(self.len * GROWTH_FACTOR, INITIAL_CAP).clamp(self.len + 1, P::LIMIT);

        if self.front == 0 {
            // Already in logical order, so the allocation can be moved as is.
            // SAFETY: The Queue is full and unwrapped, so exactly the first len slots are live.
            unsafe { self.storage.try_realloc(new_cap, self.len).throw() };
        } else {
            let mut storage: Storage<T, P> = Storage::try_with_cap(new_cap).throw();
            for index in 0..self.len {
                // SAFETY: Every logical index below len maps to a live slot of the old Storage,
                // which is taken exactly once. index < len < new_cap, so the new slot is vacant
                // and in bounds.
                unsafe {
                    let value = P::take(self.storage.slot(self.physical(index)));
                    P::construct(storage.slot(index), value);
                }
            }

            log::trace!(
                "relocated a wrapped Queue<{}> from {} to {} slots",
                std::any::type_name::<T>(),
                self.cap(),
                new_cap,
            );

            // The old Storage is entirely vacant now and deallocates when dropped.
            drop(mem::replace(&mut self.storage, storage));
        }

        self.front = 0;
        self.back = self.len;
    }
}

impl<T, P: AllocPolicy<T>> Default for Queue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: AllocPolicy<T>> Drop for Queue<T, P> {
    fn drop(&mut self) {
        self.clear();

        // Implicitly drop self.storage, which deallocates the owned memory.
    }
}

impl<T, P: AllocPolicy<T>> Index<usize> for Queue<T, P> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.at(index)
    }
}

impl<T, P: AllocPolicy<T>> IndexMut<usize> for Queue<T, P> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => Err(IndexOutOfBounds {
                index,
                len,
            }).throw(),
        }
    }
}

impl<T: Clone, P: AllocPolicy<T>> Clone for Queue<T, P> {
    /// Copies the live elements in logical order, so the clone is never wrapped.
    fn clone(&self) -> Self {
        let mut queue = Queue::with_cap(self.len);
        queue.extend(self.iter().cloned());
        queue
    }
}

impl<T, P: AllocPolicy<T>> Extend<T> for Queue<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T, P: AllocPolicy<T>> FromIterator<T> for Queue<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: PartialEq, P: AllocPolicy<T>> PartialEq for Queue<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, P: AllocPolicy<T>> Eq for Queue<T, P> {}

impl<T: Debug, P: AllocPolicy<T>> Debug for Queue<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugWith(|f| f.debug_list().entries(self.iter()).finish()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
