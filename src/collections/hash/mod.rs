//! Hash-based collections.

pub mod dictionary;

#[doc(inline)]
pub use dictionary::HashDictionary;
