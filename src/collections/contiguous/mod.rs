//! Sequential collections built over a [`Buffer`] of policy-allocated slots.
//!
//! - [`Array`]: random access with `O(1)` unordered removal.
//! - [`Stack`]: LIFO access to the top of a Buffer.
//! - [`Queue`]: a circular FIFO over a fixed run of slots.

pub mod array;
pub mod buffer;
pub mod queue;
pub mod stack;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use buffer::Buffer;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
