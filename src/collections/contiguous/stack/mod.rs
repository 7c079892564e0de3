//! A module containing [`Stack`] and its iterators.
//!
//! A Stack only exposes its top, so unlike [`Array`](super::Array) it doesn't deref to a slice.
//! [`Iter`] and [`IntoIter`] both yield elements from the top down.

mod iter;
mod stack;
mod tests;

pub use iter::*;
pub use stack::*;
