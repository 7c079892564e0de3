//! Allocation policies and the collections built over them.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality. Sorting an
//! [`Array`](contiguous::Array) is just [`slice::sort`] for example.

pub mod alloc;
#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
pub mod error;
#[cfg(feature = "hash")]
pub mod hash;
