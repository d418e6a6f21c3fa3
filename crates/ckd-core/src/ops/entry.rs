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

//! # Named Entry Points
//!
//! One function per (operation, type) pair, named `checked_<op>_<type>`.
//! Each is the generic operation from `checked_arithmetic` instantiated at a
//! concrete type, so a code generator can emit a call by name without
//! knowing about generics.
//!
//! # Examples
//!
//! ```rust
//! # use ckd_core::ops::entry::{checked_add_i8, checked_rem_i8, checked_sub_u8};
//! assert!(checked_add_i8(127, 1).1);
//! assert_eq!(checked_rem_i8(-128, -1), (0, false));
//! assert!(checked_sub_u8(5, 10).1);
//! ```

use crate::ops::checked_arithmetic::{add, div, mul, rem, sub};

macro_rules! entry_points {
    ($($t:ty => $add:ident, $sub:ident, $mul:ident, $div:ident, $rem:ident;)*) => {
        $(
            #[doc = concat!("Checked addition of two `", stringify!($t), "` values.")]
            #[inline]
            pub fn $add(x: $t, y: $t) -> ($t, bool) {
                add(x, y)
            }

            #[doc = concat!("Checked subtraction of two `", stringify!($t), "` values.")]
            #[inline]
            pub fn $sub(x: $t, y: $t) -> ($t, bool) {
                sub(x, y)
            }

            #[doc = concat!("Checked multiplication of two `", stringify!($t), "` values.")]
            #[inline]
            pub fn $mul(x: $t, y: $t) -> ($t, bool) {
                mul(x, y)
            }

            #[doc = concat!("Checked truncating division of two `", stringify!($t), "` values.")]
            #[inline]
            pub fn $div(x: $t, y: $t) -> ($t, bool) {
                div(x, y)
            }

            #[doc = concat!("Checked remainder of two `", stringify!($t), "` values.")]
            #[inline]
            pub fn $rem(x: $t, y: $t) -> ($t, bool) {
                rem(x, y)
            }
        )*
    };
}

entry_points! {
    i8 => checked_add_i8, checked_sub_i8, checked_mul_i8, checked_div_i8, checked_rem_i8;
    i16 => checked_add_i16, checked_sub_i16, checked_mul_i16, checked_div_i16, checked_rem_i16;
    i32 => checked_add_i32, checked_sub_i32, checked_mul_i32, checked_div_i32, checked_rem_i32;
    i64 => checked_add_i64, checked_sub_i64, checked_mul_i64, checked_div_i64, checked_rem_i64;
    isize => checked_add_isize, checked_sub_isize, checked_mul_isize, checked_div_isize, checked_rem_isize;
    u8 => checked_add_u8, checked_sub_u8, checked_mul_u8, checked_div_u8, checked_rem_u8;
    u16 => checked_add_u16, checked_sub_u16, checked_mul_u16, checked_div_u16, checked_rem_u16;
    u32 => checked_add_u32, checked_sub_u32, checked_mul_u32, checked_div_u32, checked_rem_u32;
    u64 => checked_add_u64, checked_sub_u64, checked_mul_u64, checked_div_u64, checked_rem_u64;
    usize => checked_add_usize, checked_sub_usize, checked_mul_usize, checked_div_usize, checked_rem_usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_entries_at_bounds() {
        assert_eq!(checked_add_i16(i16::MAX - 1, 1), (i16::MAX, false));
        assert!(checked_add_i16(i16::MAX, 1).1);
        assert!(checked_sub_i32(i32::MIN, 1).1);
        assert_eq!(checked_sub_i32(-1, i32::MAX), (i32::MIN, false));
        assert!(checked_mul_i64(i64::MAX, 2).1);
        assert_eq!(checked_mul_i64(i64::MIN, 1), (i64::MIN, false));
        assert!(checked_div_isize(isize::MIN, -1).1);
        assert_eq!(checked_rem_isize(isize::MIN, -1), (0, false));
    }

    #[test]
    fn test_unsigned_entries_at_bounds() {
        assert_eq!(checked_add_u16(u16::MAX, 0), (u16::MAX, false));
        assert!(checked_add_u32(u32::MAX, 1).1);
        assert!(checked_sub_u64(0, 1).1);
        assert!(!checked_mul_u64(u32::MAX as u64, u32::MAX as u64).1);
        assert!(checked_mul_usize(usize::MAX, 2).1);
        assert!(checked_div_usize(1, 0).1);
        assert!(checked_rem_u8(1, 0).1);
    }

    #[test]
    fn test_mul_by_zero_on_every_type() {
        assert_eq!(checked_mul_i8(0, i8::MIN), (0, false));
        assert_eq!(checked_mul_i16(i16::MIN, 0), (0, false));
        assert_eq!(checked_mul_i32(0, i32::MAX), (0, false));
        assert_eq!(checked_mul_i64(0, i64::MIN), (0, false));
        assert_eq!(checked_mul_isize(isize::MAX, 0), (0, false));
        assert_eq!(checked_mul_u8(0, u8::MAX), (0, false));
        assert_eq!(checked_mul_u16(u16::MAX, 0), (0, false));
        assert_eq!(checked_mul_u32(0, u32::MAX), (0, false));
        assert_eq!(checked_mul_u64(0, u64::MAX), (0, false));
        assert_eq!(checked_mul_usize(usize::MAX, 0), (0, false));
    }

    #[test]
    fn test_entries_match_std_overflowing_ops_where_defined() {
        for x in [i32::MIN, -7, -1, 0, 1, 7, i32::MAX] {
            for y in [i32::MIN, -7, -1, 0, 1, 7, i32::MAX] {
                let (v, o) = x.overflowing_add(y);
                assert_eq!(checked_add_i32(x, y).1, o);
                if !o {
                    assert_eq!(checked_add_i32(x, y).0, v);
                }
                let (v, o) = x.overflowing_sub(y);
                assert_eq!(checked_sub_i32(x, y).1, o);
                if !o {
                    assert_eq!(checked_sub_i32(x, y).0, v);
                }
                let (v, o) = x.overflowing_mul(y);
                assert_eq!(checked_mul_i32(x, y).1, o);
                if !o {
                    assert_eq!(checked_mul_i32(x, y).0, v);
                }
                assert_eq!(checked_div_i32(x, y).1, x.checked_div(y).is_none());
            }
        }
    }
}
