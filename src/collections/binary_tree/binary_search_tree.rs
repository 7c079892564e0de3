use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter, NodeRef};
use crate::collections::contiguous::Array;
use crate::util::fmt::DebugWith;

/// An unbalanced binary search tree, where every node exclusively owns its two subtrees.
///
/// Values which compare equal to an existing value are inserted to its right, so a tree may hold
/// duplicates. There are no parent links: every operation descends from the root, and dropping a
/// node drops its whole subtree.
///
/// Borrowed iteration takes a snapshot: the values are collected into an [`Array`] of references
/// by an in-order traversal, which the borrow checker keeps from outliving the tree or observing
/// a mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the tree.
/// - `h`: The height of the tree, between `log n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `find` | `O(h)` |
/// | `erase` | `O(h)` |
/// | `minimum` | `O(h)` |
/// | `iter_ascending` | `O(n)` |
///
/// `insert`, `find`, `erase` and dropping the tree all recurse once per level, so their stack
/// usage is also `O(h)`. The tree is never rebalanced: inserting values in sorted order produces
/// a chain with `h = n`, and a long enough chain will overflow the stack.
///
/// # Examples
/// ```
/// # use policy_collections::collections::binary_tree::BinarySearchTree;
/// let mut tree: BinarySearchTree<u8> = [5, 2, 8, 1].into_iter().collect();
/// assert_eq!(tree.minimum(), Some(&1));
/// assert_eq!(tree.erase(&5), Some(5));
/// assert!(tree.iter_ascending().copied().eq([1, 2, 8]));
/// ```
#[derive(Clone)]
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new, empty tree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Inserts `value` into the tree. If an equal value is already present, the new one is placed
    /// in its right subtree.
    pub fn insert(&mut self, value: T) {
        self.len += 1;
        self.root.insert(value)
    }

    /// Returns a reference to a value equal to `value`, found by recursive descent.
    pub fn find<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.find(value).map(|node| &node.value)
    }

    /// Returns a reference to a value equal to `value`, found with a loop rather than recursion.
    pub fn find_non_recursive<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = &self.root;
        while let Some(node) = &current.0 {
            match value.cmp(node.value.borrow()) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Returns a handle to the node holding a value equal to `value`, from which its subtree can
    /// be explored.
    pub fn find_node<Q>(&self, value: &Q) -> Option<NodeRef<'_, T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.find(value).map(NodeRef::new)
    }

    /// Returns true if the tree contains a value equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_non_recursive(value).is_some()
    }

    /// Removes a value equal to `value` from the tree, returning it.
    ///
    /// If the removed node had two children, it is replaced by its in-order successor: the
    /// minimum of its right subtree.
    pub fn erase<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let result = self.root.erase(value);
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    /// Returns a handle to the root node.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_deref().map(NodeRef::new)
    }

    /// Returns the smallest value in the tree.
    pub fn minimum(&self) -> Option<&T> {
        self.root().map(|node| node.minimum().value())
    }

    /// Returns the largest value in the tree.
    pub fn maximum(&self) -> Option<&T> {
        self.root().map(|node| node.maximum().value())
    }

    /// Removes the smallest value from the tree and returns it.
    pub fn take_minimum(&mut self) -> Option<T> {
        let result = self.root.take_minimum();
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    /// Removes the largest value from the tree and returns it.
    pub fn take_maximum(&mut self) -> Option<T> {
        let result = self.root.take_maximum();
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Returns an iterator over a snapshot of the tree's values in ascending order.
    pub fn iter_ascending(&self) -> Iter<'_, T> {
        let mut snapshot = Array::with_cap(self.len);
        self.root.walk_ascending(&mut snapshot);
        snapshot.into_iter()
    }

    /// Returns an iterator over a snapshot of the tree's values in descending order.
    pub fn iter_descending(&self) -> Iter<'_, T> {
        let mut snapshot = Array::with_cap(self.len);
        self.root.walk_descending(&mut snapshot);
        snapshot.into_iter()
    }

    /// Returns an iterator over the values in ascending order, see
    /// [`iter_ascending`](BinarySearchTree::iter_ascending).
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_ascending()
    }

    /// Clones every value into an [`Array`], in ascending order. Unlike
    /// [`iter_ascending`](BinarySearchTree::iter_ascending), the result doesn't borrow the tree.
    pub fn to_array_ascending(&self) -> Array<T>
    where
        T: Clone,
    {
        self.iter_ascending().cloned().collect()
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> PartialEq for BinarySearchTree<T> {
    /// Trees are equal if they hold equal values, regardless of their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter_ascending().eq(other.iter_ascending())
    }
}

impl<T: Ord> Eq for BinarySearchTree<T> {}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &DebugWith(|f| write!(f, "\n{:?}\n", &self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Ord + Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_ascending()).finish()
    }
}
