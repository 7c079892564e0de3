use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::Array;
use crate::util::option::OptionExtension;

/// An owning link to a subtree, which is empty when None.
#[derive(Clone)]
pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

#[derive(Clone)]
pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Branch<T> {
    /// Inserts `value` below this Branch. Values equal to an existing one go to its right.
    pub fn insert(&mut self, value: T) {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater | Ordering::Equal => node.right.insert(value),
            },
            None => {
                self.0 = Some(Box::new(Node {
                    left: None.into(),
                    right: None.into(),
                    value,
                }));
            },
        }
    }

    pub fn find<Q>(&self, value: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.0 {
            Some(node) => match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.find(value),
                Ordering::Greater => node.right.find(value),
                Ordering::Equal => Some(node),
            },
            None => None,
        }
    }

    /// Removes the first node found holding a value equal to `value` and returns that value.
    ///
    /// A leaf is detached and a node with one child is replaced by that child. A node with two
    /// children keeps its place, but takes the value of its in-order successor, which is removed
    /// from the right subtree instead.
    pub fn erase<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &mut self.0 {
            Some(node) => match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.erase(value),
                Ordering::Greater => node.right.erase(value),
                Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                    // SAFETY: The right subtree isn't empty, so it has a minimum.
                    let successor = unsafe { node.right.take_minimum().unreachable() };
                    Some(mem::replace(&mut node.value, successor))
                },
                Ordering::Equal => {
                    // SAFETY: We've already matched self.0 as a Some, but we need the mutable
                    // reference here.
                    let Node { left, right, value } = *unsafe { self.0.take().unreachable() };
                    *self = if left.is_some() { left } else { right };
                    Some(value)
                },
            },
            None => None,
        }
    }

    /// Removes the leftmost node below this Branch, putting its right subtree in its place.
    pub fn take_minimum(&mut self) -> Option<T> {
        match &mut self.0 {
            Some(node) => match node.left.take_minimum() {
                Some(value) => Some(value),
                None => {
                    // SAFETY: We've already matched self.0 as a Some, but we need the mutable
                    // reference here.
                    let Node { right, value, .. } = *unsafe { self.0.take().unreachable() };
                    *self = right;
                    Some(value)
                },
            },
            None => None,
        }
    }

    /// Removes the rightmost node below this Branch, putting its left subtree in its place.
    pub fn take_maximum(&mut self) -> Option<T> {
        match &mut self.0 {
            Some(node) => match node.right.take_maximum() {
                Some(value) => Some(value),
                None => {
                    // SAFETY: We've already matched self.0 as a Some, but we need the mutable
                    // reference here.
                    let Node { left, value, .. } = *unsafe { self.0.take().unreachable() };
                    *self = left;
                    Some(value)
                },
            },
            None => None,
        }
    }

    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + cmp::max(node.left.height(), node.right.height()),
            None => 0,
        }
    }

    /// Pushes references to every value below this Branch onto `out`, in ascending order.
    pub fn walk_ascending<'a>(&'a self, out: &mut Array<&'a T>) {
        if let Some(node) = &self.0 {
            node.left.walk_ascending(out);
            out.push(&node.value);
            node.right.walk_ascending(out);
        }
    }

    /// Pushes references to every value below this Branch onto `out`, in descending order.
    pub fn walk_descending<'a>(&'a self, out: &mut Array<&'a T>) {
        if let Some(node) = &self.0 {
            node.right.walk_descending(out);
            out.push(&node.value);
            node.left.walk_descending(out);
        }
    }
}

impl<T: Ord> Node<T> {
    /// Follows left links from this node to the node holding the smallest value.
    pub fn minimum(&self) -> &Node<T> {
        let mut node = self;
        while let Some(left) = &node.left.0 {
            node = left;
        }
        node
    }

    /// Follows right links from this node to the node holding the largest value.
    pub fn maximum(&self) -> &Node<T> {
        let mut node = self;
        while let Some(right) = &node.right.0 {
            node = right;
        }
        node
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord> From<Option<Box<Node<T>>>> for Branch<T> {
    fn from(value: Option<Box<Node<T>>>) -> Self {
        Branch(value)
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Array<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Array<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
