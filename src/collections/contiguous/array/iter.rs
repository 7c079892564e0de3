use std::slice::{Iter, IterMut};

use super::Array;
use crate::collections::alloc::AllocPolicy;
#[doc(inline)]
pub use crate::collections::contiguous::buffer::IntoIter;

impl<T, P: AllocPolicy<T>> IntoIterator for Array<T, P> {
    type Item = T;

    type IntoIter = IntoIter<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T, P: AllocPolicy<T>> IntoIterator for &'a Array<T, P> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P: AllocPolicy<T>> IntoIterator for &'a mut Array<T, P> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Forward and reverse cursors are the iter and iter_mut definitions provided by
// Deref<Target = [T]>, reversed with .rev().
