//! A module containing [`BinarySearchTree`] and associated types.
//!
//! Alongside the tree itself, this includes [`NodeRef`] for read-only traversal of any subtree,
//! [`Iter`] for snapshot iteration and [`IntoIter`] for owned iteration.

mod binary_search_tree;
mod iter;
mod node;
mod tests;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
