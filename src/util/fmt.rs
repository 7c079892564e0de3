use std::fmt::{self, Debug, Formatter};

/// Writes the contained string as is, without the quotes that [`String`]'s Debug adds.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Debug formats a value with the provided closure, so that a field of a
/// [`DebugStruct`](fmt::DebugStruct) can be rendered without a named type.
pub struct DebugWith<F: Fn(&mut Formatter<'_>) -> fmt::Result>(pub F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
