use std::fmt::Debug;
use std::hash::Hash;

/// An unsigned integer type used by a policy to store positions. The maximum value of the type,
/// [`NPOS`](SizeType::NPOS), is reserved as the "no position" sentinel and is never a valid
/// position itself.
pub trait SizeType: Copy + Eq + Ord + Hash + Debug + Default + Send + Sync + 'static {
    /// The reserved sentinel, equal to the maximum value of the type.
    const NPOS: Self;

    /// The largest position representable by this type that doesn't collide with
    /// [`NPOS`](SizeType::NPOS), saturated to [`usize::MAX`].
    const MAX_POSITION: usize;

    /// Converts a position to this type.
    ///
    /// It is a logic error to convert a value greater than
    /// [`MAX_POSITION`](SizeType::MAX_POSITION), checked only in debug builds.
    fn from_usize(value: usize) -> Self;

    /// Converts this value to a [`usize`]. [`NPOS`](SizeType::NPOS) may not survive the conversion
    /// on platforms where the type is wider than [`usize`], check with
    /// [`is_npos`](SizeType::is_npos) first.
    fn to_usize(self) -> usize;

    /// Returns true if this value is the sentinel.
    fn is_npos(self) -> bool {
        self == Self::NPOS
    }
}

macro_rules! impl_size_type {
    ($($t:ty),*) => {
        $(
            impl SizeType for $t {
                const NPOS: Self = <$t>::MAX;

                const MAX_POSITION: usize = {
                    let max = <$t>::MAX as u128 - 1;
                    if max > usize::MAX as u128 { usize::MAX } else { max as usize }
                };

                fn from_usize(value: usize) -> Self {
                    debug_assert!(value <= Self::MAX_POSITION, "Position {value} doesn't fit!");
                    value as $t
                }

                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_size_type!(u8, u16, u32, u64, usize);
