//! A small family of collections built over pluggable allocation policies.
//!
//! # Purpose
//! This crate provides the containers that sit underneath higher level types such as strings,
//! option parsers and loggers: a growable [`Array`](collections::contiguous::Array), a
//! [`Stack`](collections::contiguous::Stack), a circular
//! [`Queue`](collections::contiguous::Queue), an open-addressing
//! [`HashDictionary`](collections::hash::HashDictionary) and an unbalanced
//! [`BinarySearchTree`](collections::binary_tree::BinarySearchTree).
//!
//! # Allocation Policies
//! Every contiguous container is generic over an [`AllocPolicy`](collections::alloc::AllocPolicy),
//! a stateless strategy type that decides how memory is acquired and released and how individual
//! elements are constructed and destroyed. Policies also carry a hard element limit and the
//! unsigned size type used for positions, so that `RawPolicy<u16, 500>` describes containers that
//! never hold more than 500 elements and index their slots with `u16`s.
//!
//! Two policies are provided:
//! - [`RawPolicy`](collections::alloc::RawPolicy) constructs and destroys elements in place over
//!   raw memory from the global allocator. Spare capacity is left uninitialized.
//! - [`DefaultPolicy`](collections::alloc::DefaultPolicy) delegates to boxed slices and keeps
//!   spare capacity default-constructed, leaving all memory management to [`Box`].
//!
//! # Error Handling
//! Exceeding a policy's limit is the only recoverable failure in this crate and is reported as an
//! [`AllocationLimitExceeded`](collections::error::AllocationLimitExceeded) carrying the limit.
//! Methods which can grow a container come in pairs: `try_*` returns the error, while the plain
//! method panics with the error's message. Having to handle a capacity error on every push would
//! make the common case miserable, so the panicking version is the default spelling.
//!
//! Everything else (out of bounds indices, popping an exhausted iterator into a slot) is a
//! contract violation and panics, while "not found" is always represented by [`None`].
//!
//! # Logging
//! Reallocations, rehashes and dropped queue values are reported through the [`log`] facade. No
//! logger is installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
