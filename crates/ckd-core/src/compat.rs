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

//! # Compatibility Helpers
//!
//! Older generated code calls two narrower helpers that predate the full
//! entry point catalogue:
//!
//! - `utos_*`: reinterpret an unsigned bit pattern as the signed integer of
//!   the same width (two's complement).
//! - `legacy_checked_add_i32` / `legacy_checked_sub_i32`: 32-bit add/sub that
//!   detect overflow by computing in 64 bits and comparing against the 32-bit
//!   range.
//!
//! Both legacy helpers agree with `checked_add_i32` / `checked_sub_i32` on
//! the overflow flag and on every non-overflowing result. Unlike the entry
//! points they return the wrapped value on overflow.

macro_rules! utos {
    ($name:ident, $u:ty, $s:ty) => {
        #[doc = concat!(
            "Reinterprets a `", stringify!($u), "` bit pattern as `", stringify!($s), "`."
        )]
        ///
        /// Values up to the signed maximum are unchanged; larger values are
        /// moved down by `MAX + 1` in the unsigned domain and then offset
        /// from the signed minimum.
        #[inline]
        pub fn $name(v: $u) -> $s {
            const SIGNED_MAX: $u = <$s>::MAX as $u;
            if v <= SIGNED_MAX {
                v as $s
            } else {
                ((v - SIGNED_MAX - 1) as $s) + <$s>::MIN
            }
        }
    };
}

utos!(utos_i8, u8, i8);
utos!(utos_i16, u16, i16);
utos!(utos_i32, u32, i32);
utos!(utos_i64, u64, i64);
utos!(utos_isize, usize, isize);

/// 32-bit checked addition through a 64-bit intermediate.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::compat::legacy_checked_add_i32;
/// assert_eq!(legacy_checked_add_i32(1, 2), (3, false));
/// assert_eq!(legacy_checked_add_i32(i32::MAX, 1), (i32::MIN, true));
/// ```
#[inline]
pub fn legacy_checked_add_i32(x: i32, y: i32) -> (i32, bool) {
    let sum = i64::from(x) + i64::from(y);
    (sum as i32, sum < i64::from(i32::MIN) || sum > i64::from(i32::MAX))
}

/// 32-bit checked subtraction through a 64-bit intermediate.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::compat::legacy_checked_sub_i32;
/// assert_eq!(legacy_checked_sub_i32(1, 2), (-1, false));
/// assert_eq!(legacy_checked_sub_i32(i32::MIN, 1), (i32::MAX, true));
/// ```
#[inline]
pub fn legacy_checked_sub_i32(x: i32, y: i32) -> (i32, bool) {
    let diff = i64::from(x) - i64::from(y);
    (diff as i32, diff < i64::from(i32::MIN) || diff > i64::from(i32::MAX))
}
