//! A module containing [`Queue`], a circular FIFO collection, and its iterators.
//!
//! Both [`Iter`] and [`IntoIter`] walk the Queue in logical order, from front to back, mapping
//! each logical index onto its physical slot.

mod iter;
mod queue;
mod tests;

pub use iter::*;
pub use queue::*;
