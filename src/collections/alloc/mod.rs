//! Allocation policies, the strategies which own memory acquisition and element lifecycles for
//! every contiguous collection.
//!
//! A policy is a zero-sized type implementing [`Policy`] (its limit and size type) and
//! [`AllocPolicy<T>`] (the actual memory operations for elements of type `T`). Collections never
//! touch the allocator directly, they only go through these associated functions.
#![warn(missing_docs)]

mod default;
mod policy;
mod raw;
mod size;

pub use default::*;
pub use policy::*;
pub use raw::*;
pub use size::*;
