use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice;

use super::{Entry, HashDictionary};
use crate::collections::alloc::{AllocPolicy, Position, RawPolicy};
use crate::collections::contiguous::buffer;

impl<K, V, P, B> IntoIterator for HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

/// An owned iterator over the entries of a [`HashDictionary`], in dense order.
pub struct IntoIter<K, V, P: AllocPolicy<Entry<K, V>> = RawPolicy> {
    pub(crate) inner: buffer::IntoIter<Entry<K, V>, P>,
}

impl<K, V, P: AllocPolicy<Entry<K, V>>> Iterator for IntoIter<K, V, P> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, P: AllocPolicy<Entry<K, V>>> ExactSizeIterator for IntoIter<K, V, P> {}

impl<K, V, P: AllocPolicy<Entry<K, V>>> FusedIterator for IntoIter<K, V, P> {}

impl<'a, K, V, P, B> IntoIterator for &'a HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the entries of a [`HashDictionary`], in dense order.
pub struct Iter<'a, K, V> {
    pub(crate) inner: slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V, P, B> IntoIterator for &'a mut HashDictionary<K, V, P, B>
where
    K: Hash + Eq,
    P: AllocPolicy<Entry<K, V>> + AllocPolicy<Position<P>>,
    B: BuildHasher,
{
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A borrowed iterator over the entries of a [`HashDictionary`] with mutable values, in dense
/// order.
pub struct IterMut<'a, K, V> {
    pub(crate) inner: slice::IterMut<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &mut e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

pub struct IntoKeys<K, V, P: AllocPolicy<Entry<K, V>> = RawPolicy>(
    pub(crate) IntoIter<K, V, P>
);

impl<K, V, P: AllocPolicy<Entry<K, V>>> Iterator for IntoKeys<K, V, P> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

pub struct IntoValues<K, V, P: AllocPolicy<Entry<K, V>> = RawPolicy>(
    pub(crate) IntoIter<K, V, P>
);

impl<K, V, P: AllocPolicy<Entry<K, V>>> Iterator for IntoValues<K, V, P> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}

pub struct ValuesMut<'a, K, V>(
    pub(crate) IterMut<'a, K, V>
);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}

pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}
