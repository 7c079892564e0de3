use std::iter::FusedIterator;

use super::{Buffer, Storage};
use crate::collections::alloc::{AllocPolicy, RawPolicy};

impl<T, P: AllocPolicy<T>> IntoIterator for Buffer<T, P> {
    type Item = T;

    type IntoIter = IntoIter<T, P>;

    fn into_iter(mut self) -> Self::IntoIter {
        let (storage, len) = self.take_storage();
        IntoIter {
            storage,
            start: 0,
            end: len,
        }
    }
}

/// An owned iterator over the elements of a [`Buffer`] (and [`Array`](super::super::Array)). Live
/// elements are those in `[start, end)`; every element taken from either end leaves a vacant slot
/// behind, so the Storage can be released once iteration stops.
pub struct IntoIter<T, P: AllocPolicy<T> = RawPolicy> {
    pub(crate) storage: Storage<T, P>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T, P: AllocPolicy<T>> Drop for IntoIter<T, P> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: All slots in [start, end) are live and in bounds.
            unsafe { P::destroy(self.storage.slot(i)); }
        }

        // Implicitly drop self.storage, deallocating the now vacant slots.
    }
}

impl<T, P: AllocPolicy<T>> Iterator for IntoIter<T, P> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The slot at start is live and in bounds. It is vacant once start moves past.
            let value = unsafe { P::take(self.storage.slot(self.start)) };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T, P: AllocPolicy<T>> DoubleEndedIterator for IntoIter<T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The slot at the newly decremented end is live and in bounds.
            Some(unsafe { P::take(self.storage.slot(self.end)) })
        } else {
            None
        }
    }
}

impl<T, P: AllocPolicy<T>> FusedIterator for IntoIter<T, P> {}

impl<T, P: AllocPolicy<T>> ExactSizeIterator for IntoIter<T, P> {}

impl<'a, T, P: AllocPolicy<T>> IntoIterator for &'a Buffer<T, P> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P: AllocPolicy<T>> IntoIterator for &'a mut Buffer<T, P> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
