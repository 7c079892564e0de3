//! Error types shared by all collections.

use derive_more::{Display, Error};

/// A request for more elements than an [`AllocPolicy`](super::alloc::AllocPolicy) permits. The
/// payload is the configured limit, not the requested amount, so callers can cap their request.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Allocation limit of {limit} elements exceeded!")]
pub struct AllocationLimitExceeded {
    pub limit: usize,
}

/// An index was used which doesn't refer to a live element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// The memory layout of an allocation would exceed [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

