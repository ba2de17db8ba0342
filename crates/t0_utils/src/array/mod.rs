//! Element counts and clamped access for fixed-size arrays.
//!
//! Two ways to count elements are provided, and call sites pick one explicitly:
//!
//! - **Strict**: [`array_size!`](crate::array_size), [`array_size`] and
//!   [`ArrayLen::LEN`]. The length is read from the type `[T; N]`, so a slice,
//!   pointer or `Vec` is rejected by the compiler instead of producing a wrong
//!   count.
//! - **Loose**: [`array_size_loose!`](crate::array_size_loose). Divides the byte
//!   size of the value by the byte size of its first element. It accepts any
//!   indexable value and therefore also accepts the mistakes the strict form
//!   rejects.
//!
//! Prefer the strict form. The loose form exists for code that only has an
//! indexable value and accepts the risk.

mod clamp;

pub use clamp::{ArrayIndex, ClampedArray, clamp_element, clamp_element_ref, clamp_index};

// -----------------------------------------------------------------------------
// ArrayLen

/// Implemented only for fixed-size arrays `[T; N]`.
///
/// Use it as a bound to require "a real array" in generic code, or to read the
/// length of an array type without having a value.
///
/// ```
/// use t0_utils::ArrayLen;
///
/// type Palette = [u32; 16];
///
/// const COLORS: usize = <Palette as ArrayLen>::LEN;
/// assert_eq!(COLORS, 16);
///
/// fn bytes_needed<A: ArrayLen>() -> usize {
///     A::LEN * size_of::<A::Item>()
/// }
/// assert_eq!(bytes_needed::<Palette>(), 64);
/// ```
///
/// Slices have no compile-time length and do not implement the trait:
///
/// ```compile_fail
/// use t0_utils::ArrayLen;
///
/// let _ = <[u32] as ArrayLen>::LEN;
/// ```
///
/// The trait is sealed, so no other type can claim a length:
///
/// ```compile_fail
/// use t0_utils::ArrayLen;
///
/// struct Fake;
///
/// impl ArrayLen for Fake {
///     type Item = u8;
///     const LEN: usize = 4;
///     const SIGNED_LEN: isize = 4;
/// }
/// ```
pub trait ArrayLen: sealed::Sealed {
    /// Element type of the array.
    type Item;

    /// Number of elements, `N`.
    const LEN: usize;

    /// Number of elements as `isize`, saturating at `isize::MAX`.
    const SIGNED_LEN: isize;
}

mod sealed {
    pub trait Sealed {}

    impl<T, const N: usize> Sealed for [T; N] {}
}

impl<T, const N: usize> ArrayLen for [T; N] {
    type Item = T;

    const LEN: usize = N;

    const SIGNED_LEN: isize = saturating_isize(N);
}

// Only arrays of zero-sized elements can be longer than `isize::MAX`.
const fn saturating_isize(len: usize) -> isize {
    if len > isize::MAX as usize {
        isize::MAX
    } else {
        len as isize
    }
}

// -----------------------------------------------------------------------------
// Strict

/// Returns the number of elements of a fixed-size array.
///
/// The length comes from the type, so this is usable in `const` contexts.
/// Passing anything other than `&[T; N]` is a type error.
///
/// ```
/// use t0_utils::array::array_size;
///
/// const TABLE: [u16; 12] = [0; 12];
/// const ROWS: usize = array_size(&TABLE);
///
/// let scratch = [0u8; ROWS * 2];
/// assert_eq!(array_size(&scratch), 24);
/// ```
///
/// ```compile_fail
/// use t0_utils::array::array_size;
///
/// fn count(buffer: &[u8]) -> usize {
///     array_size(buffer)
/// }
/// ```
#[inline(always)]
pub const fn array_size<T, const N: usize>(_array: &[T; N]) -> usize {
    N
}

/// Returns the number of elements of a fixed-size array as `isize`.
///
/// Saturates at `isize::MAX`, which only arrays of zero-sized elements can
/// exceed.
///
/// ```
/// use t0_utils::array::signed_array_size;
///
/// let offsets = [-1i32, 0, 1];
/// let last = signed_array_size(&offsets) - 1;
/// assert_eq!(last, 2);
/// ```
#[inline(always)]
pub const fn signed_array_size<T, const N: usize>(_array: &[T; N]) -> isize {
    <[T; N] as ArrayLen>::SIGNED_LEN
}

/// Expands to the number of elements of a fixed-size array expression.
///
/// The expression is only borrowed, never moved or copied. The result is a
/// constant expression whenever the operand is.
///
/// ```
/// use t0_utils::array_size;
///
/// let weights = [0.25f32; 8];
/// assert_eq!(array_size!(weights), 8);
///
/// const LOOKUP: [u8; 256] = [0; 256];
/// const LOOKUP_LEN: usize = array_size!(LOOKUP);
/// assert_eq!(LOOKUP_LEN, 256);
/// ```
///
/// A value that lost its array type is rejected at compile time:
///
/// ```compile_fail
/// use t0_utils::array_size;
///
/// fn count(values: &[i32]) -> usize {
///     array_size!(values)
/// }
/// ```
///
/// ```compile_fail
/// use t0_utils::array_size;
///
/// let data = [1u32, 2, 3];
/// let ptr: *const u32 = data.as_ptr();
/// let _ = array_size!(ptr);
/// ```
#[macro_export]
macro_rules! array_size {
    ($array:expr) => {
        $crate::array::array_size(&$array)
    };
}

// -----------------------------------------------------------------------------
// Loose

/// Divides the byte size of `value` by the size of the element `_item` returns.
///
/// `_item` is never called; it only names the element type. Use it through
/// [`array_size_loose!`](crate::array_size_loose), which builds that closure.
///
/// Zero-sized element types yield `0`.
#[inline]
pub const fn loose_array_size<'a, V: ?Sized, T: 'a, F: FnOnce(usize) -> &'a T>(
    value: &V,
    _item: &F,
) -> usize {
    match size_of::<T>() {
        0 => 0,
        item_size => size_of_val(value) / item_size,
    }
}

/// Expands to `size_of_val(value) / size_of(value[0])`.
///
/// This works on anything that can be indexed with `[0]`, which is exactly why
/// it is riskier than [`array_size!`](crate::array_size): handed a slice
/// reference, a `Vec` or a pointer-like value it does not fail, it divides the
/// size of the *handle* by the element size and returns an unrelated number.
/// The element expression is never evaluated, so empty arrays yield `0` rather
/// than panicking. The result is a constant expression whenever the operand is.
///
/// ```
/// use t0_utils::array_size_loose;
///
/// let samples = [0i16; 48];
/// assert_eq!(array_size_loose!(samples), 48);
///
/// const GAINS: [f32; 6] = [1.0; 6];
/// const GAIN_COUNT: usize = array_size_loose!(GAINS);
/// assert_eq!(GAIN_COUNT, 6);
///
/// // Misuse compiles and silently measures the reference instead.
/// let view: &[u8] = &[1, 2, 3, 4, 5];
/// assert_eq!(array_size_loose!(view), size_of::<&[u8]>());
/// ```
#[macro_export]
macro_rules! array_size_loose {
    ($array:expr) => {{
        let value = &$array;
        $crate::array::loose_array_size(value, &|index| &value[index])
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_strict_sizes {
        ($($n:literal),* $(,)?) => {$(
            let array = [0u8; $n];
            assert_eq!(array_size(&array), $n);
            assert_eq!(array_size!(array), $n);
            assert_eq!(<[u8; $n] as ArrayLen>::LEN, $n);
        )*};
    }

    #[test]
    fn strict_size_matches_declared_length() {
        assert_strict_sizes!(1, 2, 3, 7, 16, 100, 255, 256, 1000, 4096, 9999, 10_000);
    }

    #[test]
    fn strict_size_on_references_and_element_types() {
        let names = ["a", "bb", "ccc"];
        let by_ref = &names;
        assert_eq!(array_size(by_ref), 3);

        #[derive(Clone, Copy)]
        struct Vertex {
            _pos: [f32; 3],
        }
        let mesh = [Vertex { _pos: [0.0; 3] }; 5];
        assert_eq!(array_size!(mesh), 5);

        let nested = [[0u64; 4]; 6];
        assert_eq!(array_size!(nested), 6);
        assert_eq!(array_size!(nested[0]), 4);
    }

    #[test]
    fn strict_size_in_const_context() {
        const SRC: [i32; 9] = [0; 9];
        const LEN: usize = array_size!(SRC);
        let dst = [1i32; LEN];
        assert_eq!(dst.len(), 9);
    }

    #[test]
    fn zero_length_array() {
        let empty: [u32; 0] = [];
        assert_eq!(array_size!(empty), 0);
        assert_eq!(signed_array_size(&empty), 0);
        assert_eq!(array_size_loose!(empty), 0);
    }

    #[test]
    fn signed_size() {
        assert_eq!(signed_array_size(&[0u8; 10]), 10);
        assert_eq!(<[(); usize::MAX] as ArrayLen>::SIGNED_LEN, isize::MAX);
        assert_eq!(<[(); 3] as ArrayLen>::SIGNED_LEN, 3);
    }

    #[test]
    fn loose_size_on_arrays() {
        let a = [0u64; 33];
        assert_eq!(array_size_loose!(a), 33);

        #[derive(Clone, Copy)]
        struct Pair(u8, u32);
        let pairs = [Pair(0, 0); 7];
        assert_eq!(array_size_loose!(pairs), 7);
    }

    #[test]
    fn loose_size_in_const_context() {
        const SRC: [u16; 6] = [0; 6];
        const LEN: usize = array_size_loose!(SRC);
        let dst = [0u8; LEN];
        assert_eq!(dst.len(), 6);

        const EMPTY: [u64; 0] = [];
        const NONE: usize = array_size_loose!(EMPTY);
        assert_eq!(NONE, 0);
    }

    #[test]
    fn loose_size_zero_sized_items() {
        let units = [(); 12];
        assert_eq!(array_size_loose!(units), 0);
    }

    #[test]
    fn loose_size_misuse_measures_handle() {
        let data = [7u16; 10];
        let slice: &[u16] = &data;
        assert_eq!(array_size_loose!(slice), size_of::<&[u16]>() / size_of::<u16>());
        assert_ne!(array_size_loose!(slice), data.len());
    }
}
