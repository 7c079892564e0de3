use std::iter::FusedIterator;

use super::Queue;
use crate::collections::alloc::{AllocPolicy, RawPolicy};

/// A borrowed iterator over the elements of a [`Queue`], from front to back.
pub struct Iter<'a, T, P: AllocPolicy<T> = RawPolicy> {
    pub(crate) queue: &'a Queue<T, P>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<'a, T, P: AllocPolicy<T>> Iterator for Iter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            let value = self.queue.get(self.start);
            self.start += 1;
            value
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T, P: AllocPolicy<T>> DoubleEndedIterator for Iter<'_, T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            self.queue.get(self.end)
        } else {
            None
        }
    }
}

impl<T, P: AllocPolicy<T>> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P: AllocPolicy<T>> FusedIterator for Iter<'_, T, P> {}

impl<T, P: AllocPolicy<T>> Clone for Iter<'_, T, P> {
    fn clone(&self) -> Self {
        Iter {
            queue: self.queue,
            start: self.start,
            end: self.end,
        }
    }
}

/// An owned iterator over the elements of a [`Queue`], dequeuing from the front (or taking from
/// the back).
pub struct IntoIter<T, P: AllocPolicy<T> = RawPolicy> {
    pub(crate) queue: Queue<T, P>,
}

impl<T, P: AllocPolicy<T>> Iterator for IntoIter<T, P> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T, P: AllocPolicy<T>> DoubleEndedIterator for IntoIter<T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.queue.take_back()
    }
}

impl<T, P: AllocPolicy<T>> ExactSizeIterator for IntoIter<T, P> {}

impl<T, P: AllocPolicy<T>> FusedIterator for IntoIter<T, P> {}

impl<T, P: AllocPolicy<T>> IntoIterator for Queue<T, P> {
    type Item = T;

    type IntoIter = IntoIter<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            queue: self,
        }
    }
}

impl<'a, T, P: AllocPolicy<T>> IntoIterator for &'a Queue<T, P> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
