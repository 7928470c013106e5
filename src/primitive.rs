//! Block intrinsics.
//!
//! Wraps the hardware count-leading-zeros, count-trailing-zeros and
//! popcount instructions behind a single trait so the rest of the crate
//! can be generic over the storage block width.

use std::fmt::Debug;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

// num_traits was just **TOO** hard to use with primitives here - all we need
// is leading/trailing zero counts and popcount, so a bespoke trait with
// exactly those operations keeps the bound list at call sites readable.
pub trait Block:
    Default
    + Copy
    + Eq
    + Ord
    + Debug
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + 'static
{
    /// Bit-width of the block. 8, 16, 32, 64 or 128.
    const BITS: u32;

    const ZERO: Self;
    const ONE: Self;

    /// Number of leading zero bits; `BITS` if `self == ZERO`.
    fn countl_zero(self) -> u32;

    /// Number of trailing zero bits; `BITS` if `self == ZERO`.
    fn countr_zero(self) -> u32;

    /// Number of one bits.
    fn count_ones(self) -> u32;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_block {
    ($t:ty) => {
        impl Block for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn countl_zero(self) -> u32 {
                self.leading_zeros()
            }

            #[inline]
            fn countr_zero(self) -> u32 {
                self.trailing_zeros()
            }

            #[inline]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }
        }
    };
}

impl_block!(u8);
impl_block!(u16);
impl_block!(u32);
impl_block!(u64);
impl_block!(u128);
impl_block!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countl_zero_of_zero_is_bits() {
        assert_eq!(Block::countl_zero(0u8), 8);
        assert_eq!(Block::countl_zero(0u64), 64);
    }

    #[test]
    fn countr_zero_of_zero_is_bits() {
        assert_eq!(Block::countr_zero(0u16), 16);
    }

    #[test]
    fn count_ones_matches_std() {
        assert_eq!(Block::count_ones(0b1011_0010u8), 4);
    }
}
