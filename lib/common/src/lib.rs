use std::ops::Shl;

use num_traits::{AsPrimitive, Bounded, NumCast, PrimInt, ToPrimitive};

/// Trait for types which can act as indices within an array (or an array-like structure), such as
/// the index buffer of a mesh.
pub trait ArrayIndex:
    PrimInt
    + AsPrimitive<usize>
    + AsPrimitive<u8>
    + Shl<Self, Output = Self>
    + std::fmt::Debug
    + 'static
{
    /// The largest value of this index type, as a `usize`.
    #[inline]
    fn max_index() -> usize {
        <Self as Bounded>::max_value().to_usize().unwrap_or(usize::MAX)
    }

    /// Convert a `usize` into this index type, or `None` if it's out of range.
    #[inline]
    fn from_index(value: usize) -> Option<Self> {
        <Self as NumCast>::from(value)
    }
}
impl<P> ArrayIndex for P where
    P: PrimInt
        + AsPrimitive<usize>
        + AsPrimitive<u8>
        + Shl<Self, Output = Self>
        + std::fmt::Debug
        + 'static
{
}
