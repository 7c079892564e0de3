//! A module containing [`HashDictionary`] and associated types.
//!
//! Besides the dictionary itself, this includes [`Entry`], the element type of its dense array,
//! and types for owned and borrowed iteration over entries, keys or values. Iteration always
//! follows the dense array, so it visits entries in insertion order until the first erase.
//!
//! As with any hash-based collection, there is no mutable iterator over keys because mutating
//! them in place would cause a logic error.
//!
//! [`HashDictionary`] is also re-exported under the parent module.

mod entry;
mod hash_dictionary;
mod iter;

pub use entry::*;
pub use hash_dictionary::*;
pub use iter::*;
