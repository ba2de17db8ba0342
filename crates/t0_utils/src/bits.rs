//! Bit-flag helpers over plain integers.
//!
//! A bit vector is an integer whose bits are independent flags. The helpers
//! do not validate masks; overlapping or undefined bits are the caller's
//! business.

use core::ops::{BitAnd, BitOr, Not};

// -----------------------------------------------------------------------------
// BitVector

/// A value usable as a set of bit flags.
///
/// Implemented for every primitive integer. Flag types generated by
/// `bitflags` or written by hand can implement it too:
///
/// ```
/// use t0_utils::bits::{self, BitVector};
///
/// #[derive(Clone, Copy, PartialEq, Eq)]
/// struct Dirty(u8);
///
/// impl core::ops::BitOr for Dirty {
///     type Output = Self;
///     fn bitor(self, rhs: Self) -> Self { Dirty(self.0 | rhs.0) }
/// }
/// impl core::ops::BitAnd for Dirty {
///     type Output = Self;
///     fn bitand(self, rhs: Self) -> Self { Dirty(self.0 & rhs.0) }
/// }
/// impl core::ops::Not for Dirty {
///     type Output = Self;
///     fn not(self) -> Self { Dirty(!self.0) }
/// }
/// impl BitVector for Dirty {
///     const EMPTY: Self = Dirty(0);
/// }
///
/// let mut state = Dirty::EMPTY;
/// bits::set_bits(&mut state, Dirty(0b10));
/// assert!(bits::test_bits(state, Dirty(0b10)));
/// ```
pub trait BitVector:
    Copy + Eq + BitOr<Output = Self> + BitAnd<Output = Self> + Not<Output = Self>
{
    /// The value with no flag set.
    const EMPTY: Self;
}

macro_rules! impl_bit_vector {
    ($($Int:ty),* $(,)?) => {$(
        impl BitVector for $Int {
            const EMPTY: Self = 0;
        }
    )*};
}

impl_bit_vector!(u8, u16, u32, u64, u128, usize);
impl_bit_vector!(i8, i16, i32, i64, i128, isize);

/// Sets every bit of `bits` in `vector`.
///
/// ```
/// use t0_utils::bits::set_bits;
///
/// let mut flags = 0b0001u8;
/// set_bits(&mut flags, 0b0110);
/// assert_eq!(flags, 0b0111);
/// ```
#[inline(always)]
pub fn set_bits<V: BitVector>(vector: &mut V, bits: V) {
    *vector = *vector | bits;
}

/// Clears every bit of `bits` in `vector`.
///
/// ```
/// use t0_utils::bits::clear_bits;
///
/// let mut flags = 0b0111u8;
/// clear_bits(&mut flags, 0b0101);
/// assert_eq!(flags, 0b0010);
/// ```
#[inline(always)]
pub fn clear_bits<V: BitVector>(vector: &mut V, bits: V) {
    *vector = *vector & !bits;
}

/// Returns `true` if `vector` has any bit of `bits` set.
///
/// ```
/// use t0_utils::bits::test_bits;
///
/// assert!(test_bits(0b0100u32, 0b0110));
/// assert!(!test_bits(0b0001u32, 0b0110));
/// assert!(!test_bits(0b1111u32, 0));
/// ```
#[inline(always)]
pub fn test_bits<V: BitVector>(vector: V, bits: V) -> bool {
    vector & bits != V::EMPTY
}

// -----------------------------------------------------------------------------
// PowerOfTwo

/// Integers that can report whether at most one bit is set.
pub trait PowerOfTwo: Copy {
    /// Returns `self & (self - 1) == 0`, with wrapping subtraction.
    fn at_most_one_bit(self) -> bool;
}

macro_rules! impl_power_of_two {
    ($($Int:ty),* $(,)?) => {$(
        impl PowerOfTwo for $Int {
            #[inline(always)]
            fn at_most_one_bit(self) -> bool {
                self & self.wrapping_sub(1) == 0
            }
        }
    )*};
}

impl_power_of_two!(u8, u16, u32, u64, u128, usize);
impl_power_of_two!(i8, i16, i32, i64, i128, isize);

/// Returns whether `value` is a power of two, by `value & (value - 1) == 0`.
///
/// The identity does not exclude zero, and this function keeps it that way:
/// `is_power_of_two(0)` is `true`. For signed types, `MIN` has a single bit set
/// and also returns `true`; other negative values return `false`. Use the
/// inherent `u32::is_power_of_two` and friends when zero must be rejected.
///
/// ```
/// use t0_utils::is_power_of_two;
///
/// assert!(is_power_of_two(64u32));
/// assert!(!is_power_of_two(96u32));
/// assert!(is_power_of_two(0u32));
/// ```
#[inline(always)]
pub fn is_power_of_two<V: PowerOfTwo>(value: V) -> bool {
    value.at_most_one_bit()
}
