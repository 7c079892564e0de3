use std::iter::{FusedIterator, Rev};
use std::slice;

use super::Stack;
use crate::collections::alloc::{AllocPolicy, RawPolicy};
use crate::collections::contiguous::buffer;

/// A borrowed iterator over the elements of a [`Stack`], from the top down.
pub struct Iter<'a, T> {
    pub(crate) inner: Rev<slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

/// An owned iterator over the elements of a [`Stack`], popping from the top down.
pub struct IntoIter<T, P: AllocPolicy<T> = RawPolicy> {
    pub(crate) inner: Rev<buffer::IntoIter<T, P>>,
}

impl<T, P: AllocPolicy<T>> Iterator for IntoIter<T, P> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P: AllocPolicy<T>> ExactSizeIterator for IntoIter<T, P> {}

impl<T, P: AllocPolicy<T>> FusedIterator for IntoIter<T, P> {}

impl<T, P: AllocPolicy<T>> IntoIterator for Stack<T, P> {
    type Item = T;

    type IntoIter = IntoIter<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.buf.into_iter().rev(),
        }
    }
}

impl<'a, T, P: AllocPolicy<T>> IntoIterator for &'a Stack<T, P> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
