use core::fmt::Debug;
use core::num::NonZeroUsize;

use crate::array::ArrayLen;
use crate::cfg;

// -----------------------------------------------------------------------------
// ArrayIndex

/// Integer types that [`clamp_index`] accepts.
///
/// Implemented for every primitive integer. Signed values below zero clamp to
/// `0`. When `len - 1` does not fit in the index type, the upper bound becomes
/// the type's `MAX`, which is still a valid position.
pub trait ArrayIndex: Copy + Ord + Debug {
    /// Clamps `self` into `[0, len - 1]`.
    fn clamp_to_len(self, len: NonZeroUsize) -> Self;
}

macro_rules! impl_signed_index {
    ($($Int:ty),* $(,)?) => {$(
        impl ArrayIndex for $Int {
            #[inline]
            fn clamp_to_len(self, len: NonZeroUsize) -> Self {
                let last = <$Int>::try_from(len.get() - 1).unwrap_or(<$Int>::MAX);
                self.clamp(0, last)
            }
        }
    )*};
}

macro_rules! impl_unsigned_index {
    ($($Int:ty),* $(,)?) => {$(
        impl ArrayIndex for $Int {
            #[inline]
            fn clamp_to_len(self, len: NonZeroUsize) -> Self {
                let last = <$Int>::try_from(len.get() - 1).unwrap_or(<$Int>::MAX);
                self.min(last)
            }
        }
    )*};
}

impl_signed_index!(i8, i16, i32, i64, i128, isize);
impl_unsigned_index!(u8, u16, u32, u64, u128, usize);

// -----------------------------------------------------------------------------
// Free functions

/// `N` as a [`NonZeroUsize`], failing the build when `N == 0`.
const fn nonzero_len<const N: usize>() -> NonZeroUsize {
    match NonZeroUsize::new(N) {
        Some(len) => len,
        None => panic!("clamped access requires a non-empty array"),
    }
}

/// Returns `index` clamped into `[0, N - 1]`.
///
/// Out-of-range input is not an error: values below zero become `0` and values
/// at or above `N` become `N - 1`. Callers that need to detect a bad index must
/// check it before calling.
///
/// ```
/// use t0_utils::clamp_index;
///
/// let levels = [10, 20, 30, 40, 50];
/// assert_eq!(clamp_index(&levels, -3), 0);
/// assert_eq!(clamp_index(&levels, 2), 2);
/// assert_eq!(clamp_index(&levels, 99), 4);
/// ```
///
/// An empty array has no position to clamp to and is rejected at build time:
///
/// ```compile_fail
/// use t0_utils::clamp_index;
///
/// let empty: [u8; 0] = [];
/// let _ = clamp_index(&empty, 0i32);
/// ```
#[inline]
pub fn clamp_index<I: ArrayIndex, T, const N: usize>(_array: &[T; N], index: I) -> I {
    let len = const { nonzero_len::<N>() };
    let clamped = index.clamp_to_len(len);

    cfg::debug! {
        if clamped != index {
            log::trace!("array index {index:?} clamped to {clamped:?} (len {N})");
        }
    }

    clamped
}

/// Returns a copy of the element at `index`, clamped to the last element.
///
/// The index is unsigned, so only the upper bound needs checking.
///
/// ```
/// use t0_utils::clamp_element;
///
/// let levels = [10, 20, 30, 40, 50];
/// assert_eq!(clamp_element(&levels, 1), 20);
/// assert_eq!(clamp_element(&levels, 99), 50);
/// ```
///
/// ```compile_fail
/// use t0_utils::clamp_element;
///
/// let empty: [u8; 0] = [];
/// let _ = clamp_element(&empty, 0);
/// ```
#[inline]
pub fn clamp_element<T: Copy, const N: usize>(array: &[T; N], index: usize) -> T {
    *clamp_element_ref(array, index)
}

/// Returns a reference to the element at `index`, clamped to the last element.
///
/// Same as [`clamp_element`] for element types that are not `Copy`.
#[inline]
pub fn clamp_element_ref<T, const N: usize>(array: &[T; N], index: usize) -> &T {
    let last = const { nonzero_len::<N>() }.get() - 1;
    if index > last {
        cfg::debug! {
            log::trace!("array element {index} clamped to {last} (len {N})");
        }
        return &array[last];
    }

    &array[index]
}

// -----------------------------------------------------------------------------
// ClampedArray

/// Method form of the clamped accessors for `[T; N]`.
///
/// ```
/// use t0_utils::ClampedArray;
///
/// let falloff = [1.0f32, 0.5, 0.25];
/// assert_eq!(*falloff.clamped(7), 0.25);
/// assert_eq!(falloff.clamped_index(-1i64), 0);
/// ```
pub trait ClampedArray: ArrayLen {
    /// See [`clamp_element_ref`].
    fn clamped(&self, index: usize) -> &Self::Item;

    /// See [`clamp_index`].
    fn clamped_index<I: ArrayIndex>(&self, index: I) -> I;
}

impl<T, const N: usize> ClampedArray for [T; N] {
    #[inline]
    fn clamped(&self, index: usize) -> &T {
        clamp_element_ref(self, index)
    }

    #[inline]
    fn clamped_index<I: ArrayIndex>(&self, index: I) -> I {
        clamp_index(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [i32; 5] = [10, 20, 30, 40, 50];

    #[test]
    fn scenario() {
        assert_eq!(clamp_index(&LEVELS, -3), 0);
        assert_eq!(clamp_index(&LEVELS, 2), 2);
        assert_eq!(clamp_index(&LEVELS, 99), 4);
        assert_eq!(clamp_element(&LEVELS, 99), 50);
    }

    #[test]
    fn signed_index_stays_in_bounds() {
        fn check<const N: usize>(array: &[u8; N]) {
            let n = N as i64;
            for i in -3 * n - 5..3 * n + 5 {
                let v = clamp_index(array, i);
                assert!((0..n).contains(&v), "N = {N}, i = {i}, v = {v}");
                if (0..n).contains(&i) {
                    assert_eq!(v, i);
                }
            }
            assert_eq!(clamp_index(array, i64::MIN), 0);
            assert_eq!(clamp_index(array, i64::MAX), n - 1);
        }

        check(&[0; 1]);
        check(&[0; 2]);
        check(&[0; 5]);
        check(&[0; 64]);
        check(&[0; 1000]);
    }

    #[test]
    fn every_signed_width() {
        let array = [0u8; 300];
        assert_eq!(clamp_index(&array, i8::MIN), 0);
        assert_eq!(clamp_index(&array, i8::MAX), i8::MAX);
        assert_eq!(clamp_index(&array, i16::MAX), 299);
        assert_eq!(clamp_index(&array, -1i32), 0);
        assert_eq!(clamp_index(&array, 1_000_000i32), 299);
        assert_eq!(clamp_index(&array, i128::MIN), 0);
        assert_eq!(clamp_index(&array, i128::MAX), 299);
        assert_eq!(clamp_index(&array, isize::MAX), 299);
    }

    #[test]
    fn upper_bound_saturates_to_index_type() {
        let array = [0u8; 1000];
        // 999 does not fit in i8/u8; the type's MAX is still in bounds.
        assert_eq!(clamp_index(&array, i8::MAX), 127);
        assert_eq!(clamp_index(&array, u8::MAX), 255);
        assert_eq!(clamp_index(&array, 5u8), 5);
    }

    #[test]
    fn clamp_to_len_directly() {
        let one = NonZeroUsize::MIN;
        assert_eq!(500u32.clamp_to_len(one), 0);
        assert_eq!((-7i16).clamp_to_len(one), 0);
        assert_eq!(usize::MAX.clamp_to_len(one), 0);

        let len = NonZeroUsize::new(10).unwrap();
        assert_eq!(3u8.clamp_to_len(len), 3);
        assert_eq!(200u8.clamp_to_len(len), 9);
        assert_eq!((-1i64).clamp_to_len(len), 0);

        assert_eq!(i8::MAX.clamp_to_len(NonZeroUsize::MAX), i8::MAX);
        assert_eq!(u128::MAX.clamp_to_len(NonZeroUsize::MAX), usize::MAX as u128 - 1);
    }

    #[test]
    fn unsigned_index() {
        assert_eq!(clamp_index(&LEVELS, 0u32), 0);
        assert_eq!(clamp_index(&LEVELS, 4u64), 4);
        assert_eq!(clamp_index(&LEVELS, 5usize), 4);
        assert_eq!(clamp_index(&LEVELS, u128::MAX), 4);
    }

    #[test]
    fn element_stays_in_bounds() {
        for i in 0..LEVELS.len() {
            assert_eq!(clamp_element(&LEVELS, i), LEVELS[i]);
        }
        for i in LEVELS.len()..LEVELS.len() * 4 {
            assert_eq!(clamp_element(&LEVELS, i), LEVELS[LEVELS.len() - 1]);
        }
        assert_eq!(clamp_element(&LEVELS, usize::MAX), 50);
    }

    #[test]
    fn single_element_array() {
        let one = ['x'];
        assert_eq!(clamp_index(&one, -1i32), 0);
        assert_eq!(clamp_index(&one, 1i32), 0);
        assert_eq!(clamp_element(&one, 0), 'x');
        assert_eq!(clamp_element(&one, 42), 'x');
    }

    #[test]
    fn reference_to_non_copy_element() {
        #[derive(Debug, PartialEq)]
        struct Named(&'static str);

        let names = [Named("low"), Named("mid"), Named("high")];
        assert_eq!(clamp_element_ref(&names, 1), &Named("mid"));
        assert_eq!(clamp_element_ref(&names, 10), &Named("high"));
        assert_eq!(names.clamped(3), &Named("high"));
    }

    #[test]
    fn method_form() {
        assert_eq!(LEVELS.clamped_index(-100i16), 0);
        assert_eq!(LEVELS.clamped_index(3i16), 3);
        assert_eq!(*LEVELS.clamped(0), 10);
        assert_eq!(*LEVELS.clamped(8), 50);
    }
}
