use std::fmt::{self, Debug, Formatter};

use crate::collections::alloc::{AllocPolicy, RawPolicy};
use crate::collections::contiguous::Buffer;
use crate::collections::error::AllocationLimitExceeded;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

use super::Iter;

/// A last-in, first-out collection built on [`Buffer`]. The top of the Stack is the end of the
/// Buffer, so it grows by the same rule as [`Array::push`](super::super::Array::push).
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* If the Stack doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// # Examples
/// ```
/// # use policy_collections::collections::contiguous::Stack;
/// let mut stack: Stack<char> = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// stack.push('c');
///
/// assert_eq!(stack.top(), Some(&'c'));
/// assert_eq!(stack.peek(2), Some(&'a'));
/// assert_eq!(stack.pop(), Some('c'));
/// assert_eq!(stack.iter().collect::<String>(), "ba");
/// ```
pub struct Stack<T, P: AllocPolicy<T> = RawPolicy> {
    pub(crate) buf: Buffer<T, P>,
}

impl<T, P: AllocPolicy<T>> Stack<T, P> {
    /// Creates a new, empty Stack without allocating.
    pub const fn new() -> Stack<T, P> {
        Stack {
            buf: Buffer::new(),
        }
    }

    /// Creates a new Stack with room for `cap` elements.
    ///
    /// # Panics
    /// Panics if `cap` exceeds the policy's limit.
    pub fn with_cap(cap: usize) -> Stack<T, P> {
        Stack {
            buf: Buffer::with_cap(cap),
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current capacity of the Stack.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the maximum number of elements the Stack's policy allows.
    pub const fn limit(&self) -> usize {
        self.buf.limit()
    }

    /// Pushes `value` onto the top of the Stack.
    ///
    /// # Errors
    /// Fails if the Stack already holds `limit` elements, leaving it unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocationLimitExceeded> {
        self.buf.try_push(value)
    }

    /// See [`try_push`](Stack::try_push).
    ///
    /// # Panics
    /// Panics if the Stack already holds `limit` elements.
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Removes the top element and returns it, or None if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Returns a reference to the top element.
    pub fn top(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Returns a mutable reference to the top element.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.buf.last_mut()
    }

    /// Returns a reference to the element `offset` places below the top, so `peek(0)` is the top
    /// itself.
    pub fn peek(&self, offset: usize) -> Option<&T> {
        let index = self.len().checked_sub(offset + 1)?;
        self.buf.get(index)
    }

    /// Destroys all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.buf.clear()
    }

    /// Returns an iterator over the elements, from the top down.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.buf.iter().rev(),
        }
    }
}

impl<T, P: AllocPolicy<T>> Default for Stack<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: AllocPolicy<T>> Clone for Stack<T, P> {
    fn clone(&self) -> Self {
        Stack {
            buf: self.buf.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buf.replicate(&source.buf)
    }
}

impl<T, P: AllocPolicy<T>> Extend<T> for Stack<T, P> {
    /// Pushes every item in order, so the last item ends up on top.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buf.extend(iter)
    }
}

impl<T, P: AllocPolicy<T>> FromIterator<T> for Stack<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            buf: Buffer::from_iter(iter),
        }
    }
}

impl<T: PartialEq, P: AllocPolicy<T>> PartialEq for Stack<T, P> {
    fn eq(&self, other: &Self) -> bool {
        *self.buf == *other.buf
    }
}

impl<T: Eq, P: AllocPolicy<T>> Eq for Stack<T, P> {}

impl<T: Debug, P: AllocPolicy<T>> Debug for Stack<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_down", &DebugWith(|f| f.debug_list().entries(self.iter()).finish()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
