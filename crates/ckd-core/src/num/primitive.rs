// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Checked Primitive Trait
//!
//! `CheckedPrimitive` is the single trait every checked operation is generic
//! over. It carries what the overflow checks need to know about an operand
//! type: its bit width, its signedness, its bounds, and the next wider native
//! integer type that can hold the full product of two operands.
//!
//! The trait is implemented for exactly ten types: `i8`, `i16`, `i32`, `i64`,
//! `isize`, `u8`, `u16`, `u32`, `u64` and `usize`. The wide type of the
//! pointer-width integers follows `target_pointer_width`.

use num_traits::{AsPrimitive, PrimInt};

/// An integer type supported by the checked-arithmetic operations.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::num::primitive::CheckedPrimitive;
/// fn describe<T: CheckedPrimitive>() -> (u32, bool) {
///     (<T as CheckedPrimitive>::BITS, T::SIGNED)
/// }
///
/// assert_eq!(describe::<i16>(), (16, true));
/// assert_eq!(describe::<u64>(), (64, false));
/// assert_eq!(describe::<usize>(), (usize::BITS, false));
/// ```
pub trait CheckedPrimitive:
    PrimInt + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
    /// Width of the type in bits.
    const BITS: u32;

    /// Whether the type is signed.
    const SIGNED: bool;

    /// Smallest representable value.
    const MIN: Self;

    /// Largest representable value.
    const MAX: Self;

    /// The value 0.
    const ZERO: Self;

    /// The value 1.
    const ONE: Self;

    /// Whether `mul` goes through `Wide` rather than the division-based
    /// bound check.
    const WIDE_MUL: bool;

    /// The next wider native integer with the same signedness. The product of
    /// any two `Self` values is representable in it.
    type Wide: PrimInt + AsPrimitive<Self>;

    /// Losslessly widens `self` into `Self::Wide`.
    fn widen(self) -> Self::Wide;
}

macro_rules! impl_checked_primitive {
    ($t:ty, $wide:ty, $signed:expr) => {
        impl CheckedPrimitive for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const WIDE_MUL: bool = cfg!(feature = "i128-mul") || <$wide>::BITS <= 64;

            type Wide = $wide;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }
        }
    };
}

impl_checked_primitive!(i8, i16, true);
impl_checked_primitive!(i16, i32, true);
impl_checked_primitive!(i32, i64, true);
impl_checked_primitive!(i64, i128, true);

impl_checked_primitive!(u8, u16, false);
impl_checked_primitive!(u16, u32, false);
impl_checked_primitive!(u32, u64, false);
impl_checked_primitive!(u64, u128, false);

#[cfg(target_pointer_width = "64")]
mod pointer_width {
    use super::CheckedPrimitive;

    impl_checked_primitive!(isize, i128, true);
    impl_checked_primitive!(usize, u128, false);
}

#[cfg(target_pointer_width = "32")]
mod pointer_width {
    use super::CheckedPrimitive;

    impl_checked_primitive!(isize, i64, true);
    impl_checked_primitive!(usize, u64, false);
}

#[cfg(target_pointer_width = "16")]
mod pointer_width {
    use super::CheckedPrimitive;

    impl_checked_primitive!(isize, i32, true);
    impl_checked_primitive!(usize, u32, false);
}
