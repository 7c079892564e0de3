//! A module containing [`Buffer`], the growable core of every sequential collection, and its
//! owned [`IntoIter`].
//!
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`] are used
//! for borrowed iteration, through `Deref<Target = [T]>`.

mod buffer;
mod iter;
mod storage;
mod tests;

pub use buffer::*;
pub use iter::*;
pub(crate) use storage::*;
