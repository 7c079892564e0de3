#![cfg(test)]

use super::*;
use crate::collections::contiguous::Array;
use crate::util::alloc::CountedDrop;

const SCENARIO: [u32; 13] = [50, 30, 70, 20, 40, 60, 80, 32, 34, 36, 65, 75, 85];

fn scenario() -> BinarySearchTree<u32> {
    SCENARIO.into_iter().collect()
}

#[test]
fn test_erase_leaves_and_single_children() {
    let mut tree = scenario();
    assert_eq!(tree.len(), 13);

    for value in [36, 20, 65, 75, 85] {
        assert_eq!(tree.erase(&value), Some(value));
    }

    assert_eq!(tree.len(), 8);
    assert_eq!(*tree.to_array_ascending(), [30, 32, 34, 40, 50, 60, 70, 80]);
    assert_eq!(tree.erase(&36), None, "Erasing an absent value should do nothing.");
    assert_eq!(tree.len(), 8);
}

#[test]
fn test_erase_with_two_children() {
    let mut tree = scenario();
    assert_eq!(tree.erase(&50), Some(50));

    let root = tree.root().expect("tree isn't empty");
    assert_eq!(*root.value(), 60, "The in-order successor should replace the root.");
    assert_eq!(root.right().map(|n| *n.value()), Some(70));
    assert_eq!(
        root.right().and_then(|n| n.left()).map(|n| *n.value()),
        Some(65),
        "The successor's right child should take its place."
    );
    assert!(tree.iter_ascending().copied().eq(
        [20, 30, 32, 34, 36, 40, 60, 65, 70, 75, 80, 85]
    ));

    assert_eq!(tree.erase(&30), Some(30));
    assert_eq!(tree.root().and_then(|n| n.left()).map(|n| *n.value()), Some(32));
    assert!(tree.iter_ascending().copied().eq([20, 32, 34, 36, 40, 60, 65, 70, 75, 80, 85]));
}

#[test]
fn test_find() {
    let tree = scenario();
    for value in SCENARIO {
        assert_eq!(tree.find(&value), Some(&value));
        assert_eq!(tree.find_non_recursive(&value), Some(&value));
    }
    assert_eq!(tree.find(&33), None);
    assert_eq!(tree.find_non_recursive(&33), None);
    assert!(!tree.contains(&0));

    let words: BinarySearchTree<String> = ["pear", "apple", "fig"]
        .map(String::from)
        .into_iter()
        .collect();
    assert!(words.contains("fig"), "Lookups should work with borrowed forms.");
}

#[test]
fn test_extremes() {
    let tree = scenario();
    assert_eq!(tree.minimum(), Some(&20));
    assert_eq!(tree.maximum(), Some(&85));

    let subtree = tree.find_node(&30).expect("30 is in the tree");
    assert_eq!(*subtree.minimum().value(), 20);
    assert_eq!(*subtree.maximum().value(), 40, "Extremes should be relative to the subtree.");
    assert!(subtree.minimum().is_leaf());

    let empty: BinarySearchTree<u32> = BinarySearchTree::new();
    assert_eq!(empty.minimum(), None);
    assert!(empty.root().is_none());
    assert_eq!(empty.height(), 0);
}

#[test]
fn test_duplicates() {
    let mut tree: BinarySearchTree<u8> = [5, 5, 3, 5].into_iter().collect();
    assert_eq!(tree.len(), 4);
    assert!(tree.iter_ascending().copied().eq([3, 5, 5, 5]));
    assert_eq!(
        tree.root().and_then(|n| n.right()).map(|n| *n.value()), Some(5),
        "Duplicates should be inserted to the right."
    );

    assert_eq!(tree.erase(&5), Some(5));
    assert_eq!(tree.erase(&5), Some(5));
    assert!(tree.iter_ascending().copied().eq([3, 5]));
}

#[test]
fn test_sorted_chain() {
    let mut tree: BinarySearchTree<u32> = (0..2000).collect();
    assert_eq!(tree.height(), 2000, "Sorted inserts should never be rebalanced.");
    assert_eq!(tree.find(&1999), Some(&1999));
    assert_eq!(tree.find_non_recursive(&1999), Some(&1999));

    assert_eq!(tree.erase(&1000), Some(1000));
    assert_eq!(tree.take_maximum(), Some(1999));
    assert_eq!(tree.len(), 1998);
    assert!(tree.iter_descending().copied().eq((0..1999).rev().filter(|v| *v != 1000)));
}

#[test]
fn test_snapshots() {
    let mut tree = scenario();
    let mut descending: Array<u32> = Array::from(SCENARIO);
    descending.sort_by(|a, b| b.cmp(a));
    assert!(tree.iter_descending().eq(descending.iter()));
    assert_eq!(tree.iter_ascending().len(), 13);

    let owned = tree.to_array_ascending();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(owned.len(), 13, "An owned snapshot should survive mutation of the tree.");
    assert!(owned.is_sorted());
}

#[test]
fn test_owned_iteration() {
    let tree = scenario();
    let mut iter = tree.into_iter();
    assert_eq!(iter.len(), 13);
    assert_eq!(iter.next(), Some(20));
    assert_eq!(iter.next_back(), Some(85));
    assert_eq!(iter.next(), Some(30));
    assert_eq!(iter.len(), 10);

    let counter = CountedDrop::new();
    let tree: BinarySearchTree<Ordered> = (0..10).map(|i| Ordered(i, counter.clone())).collect();
    let mut iter = tree.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 10, "Dropping a tree should drop every node.");
}

#[test]
fn test_copies_are_independent() {
    let mut tree = scenario();
    let copy = tree.clone();
    assert_eq!(copy, tree);

    tree.erase(&50);
    tree.insert(1);
    assert_eq!(copy.len(), 13);
    assert_eq!(copy.root().map(|n| *n.value()), Some(50));
    assert_ne!(copy, tree);
    assert_eq!(copy.height(), 6);
}

#[test]
fn test_formatting() {
    let tree: BinarySearchTree<u8> = [2, 1, 3].into_iter().collect();
    assert_eq!(format!("{tree}"), "{1, 2, 3}");
    assert_eq!(
        format!("{tree:?}"),
        "BinarySearchTree { nodes: \n┌    ┌    -\n┌    (1)\n┌    └    -\n(2)\n└    ┌    -\n\
        └    (3)\n└    └    -\n, len: 3 }"
    );
}

/// Orders by the first field only, so that the drop counter can come along.
#[derive(Debug, Clone)]
struct Ordered(u32, CountedDrop);

impl PartialEq for Ordered {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Ordered {}

impl PartialOrd for Ordered {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ordered {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}
