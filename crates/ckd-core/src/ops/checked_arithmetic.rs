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

//! # Checked Arithmetic
//!
//! Generic overflow-checked operations over `CheckedPrimitive`. Every
//! operation returns `(result, overflowed)`. When `overflowed` is `true` the
//! result carries no meaning; these functions return zero in that case, but
//! callers must not rely on it.
//!
//! None of the checks can overflow themselves: each bound is compared
//! before the operation is carried out, and the operation only runs on the
//! branch where it is known to fit. No function here panics.
//!
//! | Op    | Signed overflow                   | Unsigned overflow      |
//! |-------|-----------------------------------|------------------------|
//! | `add` | sum escapes `[MIN, MAX]`          | `y > MAX - x`          |
//! | `sub` | difference escapes `[MIN, MAX]`   | `x < y`                |
//! | `mul` | product escapes `[MIN, MAX]`      | product escapes `[0, MAX]` |
//! | `div` | `y == 0` or `x == MIN && y == -1` | `y == 0`               |
//! | `rem` | `y == 0`                          | `y == 0`               |

use crate::catalogue::OverflowOp;
use crate::num::primitive::CheckedPrimitive;
use num_traits::AsPrimitive;

#[inline(always)]
fn overflowed<T: CheckedPrimitive>() -> (T, bool) {
    (T::ZERO, true)
}

/// Returns `true` if `v` is -1. Only meaningful for signed types, where the
/// all-ones bit pattern is -1.
#[inline(always)]
fn is_minus_one<T: CheckedPrimitive>(v: T) -> bool {
    T::SIGNED && v == !T::ZERO
}

/// Checked addition.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::ops::checked_arithmetic::add;
/// assert_eq!(add(100i8, 27i8), (127, false));
/// assert!(add(127i8, 1i8).1);
/// assert!(add(255u8, 1u8).1);
/// ```
#[inline]
pub fn add<T: CheckedPrimitive>(x: T, y: T) -> (T, bool) {
    let overflow = if T::SIGNED {
        (x > T::ZERO && y > T::MAX - x) || (x < T::ZERO && y < T::MIN - x)
    } else {
        y > T::MAX - x
    };

    if overflow {
        return overflowed();
    }
    (x + y, false)
}

/// Checked subtraction.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::ops::checked_arithmetic::sub;
/// assert!(sub(-128i8, 1i8).1);
/// assert!(sub(5u8, 10u8).1);
/// assert_eq!(sub(10u8, 5u8), (5, false));
/// ```
#[inline]
pub fn sub<T: CheckedPrimitive>(x: T, y: T) -> (T, bool) {
    let overflow = if T::SIGNED {
        (y < T::ZERO && x > T::MAX + y) || (y > T::ZERO && x < T::MIN + y)
    } else {
        x < y
    };

    if overflow {
        return overflowed();
    }
    (x - y, false)
}

/// Checked multiplication.
///
/// Goes through `T::Wide` when `T::WIDE_MUL` is set and through
/// [`bounded_mul`] otherwise. Both give the same answer.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::ops::checked_arithmetic::mul;
/// assert!(mul(64i8, 2i8).1);
/// assert!(mul(16u8, 16u8).1);
/// assert_eq!(mul(-8i8, 16i8), (-128, false));
/// assert_eq!(mul(0u64, u64::MAX), (0, false));
/// ```
#[inline]
pub fn mul<T: CheckedPrimitive>(x: T, y: T) -> (T, bool) {
    if T::WIDE_MUL {
        widening_mul(x, y)
    } else {
        bounded_mul(x, y)
    }
}

/// Checked multiplication through the wide type: the full product is
/// computed in `T::Wide` and compared against `[MIN, MAX]`.
#[inline]
pub fn widening_mul<T: CheckedPrimitive>(x: T, y: T) -> (T, bool) {
    let product = x.widen() * y.widen();
    if product > T::MAX.widen() || product < T::MIN.widen() {
        return overflowed();
    }
    (AsPrimitive::<T>::as_(product), false)
}

/// Checked multiplication by division-based bounds, without a wider type.
///
/// For signed operands the bound depends on the sign of both factors, so the
/// check branches four ways and divides `MAX` or `MIN` by whichever factor
/// keeps the quotient in range. The branches are deliberately asymmetric:
/// `MIN / -1` would itself overflow, so no branch ever divides by a negative
/// factor when the dividend is `MIN`. For unsigned operands a zero `x` is a
/// zero product, otherwise the product fits iff `y <= MAX / x`.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::ops::checked_arithmetic::bounded_mul;
/// assert_eq!(bounded_mul(i64::MIN, 1), (i64::MIN, false));
/// assert!(bounded_mul(i64::MIN, -1).1);
/// assert!(bounded_mul(u64::MAX, 2).1);
/// ```
#[inline]
pub fn bounded_mul<T: CheckedPrimitive>(x: T, y: T) -> (T, bool) {
    if T::SIGNED {
        if x > T::ZERO {
            if y > T::ZERO && x > T::MAX / y {
                return overflowed();
            }
            if y < T::ZERO && y < T::MIN / x {
                return overflowed();
            }
        }
        if x < T::ZERO {
            if y > T::ZERO && x < T::MIN / y {
                return overflowed();
            }
            if y < T::ZERO && x < T::MAX / y {
                return overflowed();
            }
        }
    } else {
        if x == T::ZERO {
            return (T::ZERO, false);
        }
        if y > T::MAX / x {
            return overflowed();
        }
    }
    (x * y, false)
}

/// Checked truncating division.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::ops::checked_arithmetic::div;
/// assert_eq!(div(-7i32, 2i32), (-3, false));
/// assert!(div(10i8, 0i8).1);
/// assert!(div(-128i8, -1i8).1);
/// ```
#[inline]
pub fn div<T: CheckedPrimitive>(x: T, y: T) -> (T, bool) {
    if y == T::ZERO || (x == T::MIN && is_minus_one(y)) {
        return overflowed();
    }
    (x / y, false)
}

/// Checked remainder. The sign of a non-zero result follows the dividend.
///
/// Only a zero divisor overflows: `MIN % -1` is exactly `0`.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::ops::checked_arithmetic::rem;
/// assert_eq!(rem(-7i32, 2i32), (-1, false));
/// assert_eq!(rem(-128i8, -1i8), (0, false));
/// assert!(rem(10u8, 0u8).1);
/// ```
#[inline]
pub fn rem<T: CheckedPrimitive>(x: T, y: T) -> (T, bool) {
    if y == T::ZERO {
        return overflowed();
    }
    // x % -1 is always 0; the native operator traps on MIN % -1.
    if is_minus_one(y) {
        return (T::ZERO, false);
    }
    (x % y, false)
}

/// Applies the checked operation `op`.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::catalogue::OverflowOp;
/// # use ckd_core::ops::checked_arithmetic::checked_binop;
/// assert_eq!(checked_binop(OverflowOp::Sub, 3u16, 1u16), (2, false));
/// assert!(checked_binop(OverflowOp::Div, 3u16, 0u16).1);
/// ```
#[inline]
pub fn checked_binop<T: CheckedPrimitive>(op: OverflowOp, x: T, y: T) -> (T, bool) {
    match op {
        OverflowOp::Add => add(x, y),
        OverflowOp::Sub => sub(x, y),
        OverflowOp::Mul => mul(x, y),
        OverflowOp::Div => div(x, y),
        OverflowOp::Rem => rem(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn exact<T: CheckedPrimitive>(v: T) -> i128 {
        v.to_i128().unwrap()
    }

    fn fits<T: CheckedPrimitive>(v: i128) -> bool {
        v >= exact(T::MIN) && v <= exact(T::MAX)
    }

    /// The exact result of `op`, or `None` where it is undefined.
    fn reference(op: OverflowOp, x: i128, y: i128) -> Option<i128> {
        match op {
            OverflowOp::Add => Some(x + y),
            OverflowOp::Sub => Some(x - y),
            // Only `None` when the product exceeds i128, far outside every T.
            OverflowOp::Mul => x.checked_mul(y),
            OverflowOp::Div => (y != 0).then(|| x / y),
            OverflowOp::Rem => (y != 0).then(|| x % y),
        }
    }

    fn check_pair<T: CheckedPrimitive>(x: T, y: T) {
        for op in OverflowOp::ALL {
            let (value, overflow) = checked_binop(op, x, y);
            match reference(op, exact(x), exact(y)) {
                Some(expected) if fits::<T>(expected) => {
                    assert!(!overflow, "{}({}, {}) reported overflow", op, x, y);
                    assert_eq!(exact(value), expected, "{}({}, {})", op, x, y);
                }
                _ => assert!(overflow, "{}({}, {}) missed overflow", op, x, y),
            }
        }
    }

    fn boundary_values<T: CheckedPrimitive>() -> Vec<T> {
        let mut values = vec![
            T::MIN,
            T::MIN + T::ONE,
            T::ZERO,
            T::ONE,
            T::ONE + T::ONE,
            T::MAX - T::ONE,
            T::MAX,
            T::MAX >> 1,
            (T::MAX >> 1) + T::ONE,
        ];
        if T::SIGNED {
            values.push(!T::ZERO);
            values.push(T::MIN / (T::ONE + T::ONE));
        }
        values
    }

    fn check_boundaries_and_random<T: CheckedPrimitive>(
        seed: u64,
        samples: usize,
        sample: impl Fn(&mut StdRng) -> T,
    ) {
        let bounds = boundary_values::<T>();
        for &x in &bounds {
            for &y in &bounds {
                check_pair(x, y);
            }
        }

        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..samples {
            let x = sample(&mut rng);
            let y = sample(&mut rng);
            check_pair(x, y);
            // Small divisors and factors hit the interesting branches far more
            // often than uniform ones.
            let small: T = <T as num_traits::NumCast>::from(rng.random_range(0u8..8)).unwrap();
            check_pair(x, small);
            check_pair(small, x);
        }
    }

    #[test]
    fn test_i8_boundary_scenarios() {
        assert!(add(127i8, 1i8).1);
        assert_eq!(add(100i8, 27i8), (127, false));
        assert!(sub(-128i8, 1i8).1);
        assert!(mul(64i8, 2i8).1);
        assert!(div(-128i8, -1i8).1);
        assert!(div(10i8, 0i8).1);
        assert!(rem(10i8, 0i8).1);
        assert_eq!(rem(-128i8, -1i8), (0, false));
    }

    #[test]
    fn test_u8_boundary_scenarios() {
        assert!(sub(5u8, 10u8).1);
        assert_eq!(add(255u8, 0u8), (255, false));
        assert!(add(255u8, 1u8).1);
        assert!(mul(16u8, 16u8).1);
    }

    #[test]
    fn test_exhaustive_i8() {
        for x in i8::MIN..=i8::MAX {
            for y in i8::MIN..=i8::MAX {
                check_pair(x, y);
            }
        }
    }

    #[test]
    fn test_exhaustive_u8() {
        for x in u8::MIN..=u8::MAX {
            for y in u8::MIN..=u8::MAX {
                check_pair(x, y);
            }
        }
    }

    #[test]
    fn test_wider_types_against_exact_arithmetic() {
        check_boundaries_and_random(0x16, 2_000, |rng| rng.random::<i16>());
        check_boundaries_and_random(0x17, 2_000, |rng| rng.random::<u16>());
        check_boundaries_and_random(0x32, 2_000, |rng| rng.random::<i32>());
        check_boundaries_and_random(0x33, 2_000, |rng| rng.random::<u32>());
        check_boundaries_and_random(0x64, 2_000, |rng| rng.random::<i64>());
        check_boundaries_and_random(0x65, 2_000, |rng| rng.random::<u64>());
    }

    #[test]
    fn test_pointer_width_types_against_exact_arithmetic() {
        // `rand` has no portable distribution for isize/usize; truncating a
        // 64-bit draw covers every bit pattern on 16/32/64-bit targets.
        check_boundaries_and_random(0x70, 2_000, |rng| rng.random::<i64>() as isize);
        check_boundaries_and_random(0x71, 2_000, |rng| rng.random::<u64>() as usize);

        assert!(add(isize::MAX, 1).1);
        assert!(sub(isize::MIN, 1).1);
        assert!(mul(isize::MIN, -1).1);
        assert!(div(isize::MIN, -1).1);
        assert_eq!(rem(isize::MIN, -1), (0, false));
        assert!(add(usize::MAX, 1).1);
        assert!(sub(0usize, 1).1);
        assert!(mul(usize::MAX, 2).1);
        assert_eq!(mul(usize::MAX, 1), (usize::MAX, false));
    }

    #[test]
    fn test_add_is_commutative() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let (x, y): (i32, i32) = (rng.random(), rng.random());
            assert_eq!(add(x, y), add(y, x));
            let (x, y): (u64, u64) = (rng.random(), rng.random());
            assert_eq!(add(x, y), add(y, x));
        }
        for x in i8::MIN..=i8::MAX {
            for y in i8::MIN..=i8::MAX {
                assert_eq!(add(x, y), add(y, x));
            }
        }
    }

    #[test]
    fn test_mul_by_zero_never_overflows() {
        fn check<T: CheckedPrimitive>() {
            for y in boundary_values::<T>() {
                assert_eq!(mul(T::ZERO, y), (T::ZERO, false));
                assert_eq!(mul(y, T::ZERO), (T::ZERO, false));
                assert_eq!(bounded_mul(T::ZERO, y), (T::ZERO, false));
                assert_eq!(bounded_mul(y, T::ZERO), (T::ZERO, false));
            }
        }
        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<isize>();
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<u64>();
        check::<usize>();
    }

    #[test]
    fn test_bounded_and_widening_mul_agree() {
        for x in i8::MIN..=i8::MAX {
            for y in i8::MIN..=i8::MAX {
                assert_eq!(bounded_mul(x, y), widening_mul(x, y), "{} * {}", x, y);
            }
        }
        for x in u8::MIN..=u8::MAX {
            for y in u8::MIN..=u8::MAX {
                assert_eq!(bounded_mul(x, y), widening_mul(x, y), "{} * {}", x, y);
            }
        }

        let mut rng = StdRng::seed_from_u64(0xb0b);
        for _ in 0..20_000 {
            let (x, y): (i64, i64) = (rng.random(), rng.random_range(-4..=4));
            assert_eq!(bounded_mul(x, y), widening_mul(x, y), "{} * {}", x, y);
            let (x, y): (i64, i64) = (rng.random_range(-(1 << 32)..(1 << 32)), rng.random());
            assert_eq!(bounded_mul(x, y), widening_mul(x, y), "{} * {}", x, y);
            let (x, y): (u64, u64) = (rng.random(), rng.random_range(0..=u32::MAX as u64));
            assert_eq!(bounded_mul(x, y), widening_mul(x, y), "{} * {}", x, y);
        }
    }

    #[test]
    fn test_bounded_mul_sign_branches() {
        // x > 0, y < 0: bound taken from MIN / x.
        assert_eq!(bounded_mul(2i64, i64::MIN / 2), (i64::MIN, false));
        assert!(bounded_mul(2i64, i64::MIN / 2 - 1).1);
        // x < 0, y > 0: bound taken from MIN / y.
        assert_eq!(bounded_mul(i64::MIN / 2, 2i64), (i64::MIN, false));
        assert!(bounded_mul(i64::MIN / 2 - 1, 2i64).1);
        // x < 0, y < 0: positive product bounded by MAX / y.
        assert_eq!(bounded_mul(-1i64, -i64::MAX), (i64::MAX, false));
        assert!(bounded_mul(-1i64, i64::MIN).1);
        assert!(bounded_mul(i64::MIN, i64::MIN).1);
        // x > 0, y > 0.
        assert!(!bounded_mul(3_037_000_499i64, 3_037_000_499i64).1);
        assert!(bounded_mul(3_037_000_500i64, 3_037_000_500i64).1);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(div(7i16, 2i16), (3, false));
        assert_eq!(div(-7i16, 2i16), (-3, false));
        assert_eq!(div(7i16, -2i16), (-3, false));
        assert_eq!(div(-7i16, -2i16), (3, false));
        assert_eq!(rem(7i16, -2i16), (1, false));
        assert_eq!(rem(-7i16, -2i16), (-1, false));
    }

    #[test]
    fn test_signed_min_by_minus_one() {
        assert!(div(i64::MIN, -1).1);
        assert_eq!(rem(i64::MIN, -1), (0, false));
        assert!(div(isize::MIN, -1).1);
        assert_eq!(rem(isize::MIN, -1), (0, false));
        assert_eq!(div(i64::MIN, 1), (i64::MIN, false));
        // The all-ones divisor is MAX, not -1, for unsigned types.
        assert_eq!(div(u64::MAX, u64::MAX), (1, false));
        assert_eq!(rem(u64::MAX - 1, u64::MAX), (u64::MAX - 1, false));
    }
}
