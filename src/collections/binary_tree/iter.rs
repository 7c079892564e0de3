use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::{BinarySearchTree, Node};
use crate::collections::contiguous::array;

/// An iterator over a snapshot of references to the values of a [`BinarySearchTree`], returned
/// by [`iter_ascending`](BinarySearchTree::iter_ascending) and
/// [`iter_descending`](BinarySearchTree::iter_descending).
pub type Iter<'a, T> = array::IntoIter<&'a T>;

/// A read-only handle to a node of a [`BinarySearchTree`], used to explore the subtree below it.
pub struct NodeRef<'a, T: Ord> {
    node: &'a Node<T>,
}

impl<'a, T: Ord> NodeRef<'a, T> {
    pub(crate) const fn new(node: &'a Node<T>) -> NodeRef<'a, T> {
        NodeRef {
            node,
        }
    }

    /// Returns the value held by this node.
    pub const fn value(&self) -> &'a T {
        &self.node.value
    }

    /// Returns the root of the left subtree, holding smaller values.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node.left.as_deref().map(NodeRef::new)
    }

    /// Returns the root of the right subtree, holding greater or equal values.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node.right.as_deref().map(NodeRef::new)
    }

    /// Returns the node holding the smallest value of this subtree.
    pub fn minimum(&self) -> NodeRef<'a, T> {
        NodeRef::new(self.node.minimum())
    }

    /// Returns the node holding the largest value of this subtree.
    pub fn maximum(&self) -> NodeRef<'a, T> {
        NodeRef::new(self.node.maximum())
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }
}

impl<T: Ord> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Ord> Copy for NodeRef<'_, T> {}

impl<T: Ord + Debug> Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.value()).finish()
    }
}

impl<T: Ord> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned iterator over the values of a [`BinarySearchTree`] in ascending order, taking the
/// minimum (or maximum, from the back) each time.
pub struct IntoIter<T: Ord>(pub(crate) BinarySearchTree<T>);

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // Each step descends from the root, which costs O(h) without parent links.
        self.0.take_minimum()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T: Ord> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.take_maximum()
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ascending()
    }
}
