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

//! # Tagged Scalars
//!
//! A code generator folding constants knows the operand type only at run
//! time. `Scalar` pairs a value with its `IntTy` and dispatches a checked
//! operation to the matching generic instantiation, so folding produces
//! exactly the `(result, overflowed)` pair the emitted call would.

use crate::catalogue::{IntTy, OverflowOp};
use crate::ops::checked_arithmetic::checked_binop;

/// An integer value of one of the ten operand types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

/// Error returned when the operands of a checked operation differ in type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandMismatch {
    pub lhs: IntTy,
    pub rhs: IntTy,
}

impl std::fmt::Display for OperandMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "checked operation on different operand types: `{}` and `{}`",
            self.lhs, self.rhs
        )
    }
}

impl std::error::Error for OperandMismatch {}

macro_rules! dispatch {
    ($op:expr, $lhs:expr, $rhs:expr; $($variant:ident),*) => {
        match ($lhs, $rhs) {
            $(
                (Scalar::$variant(x), Scalar::$variant(y)) => {
                    let (value, overflowed) = checked_binop($op, x, y);
                    Ok((Scalar::$variant(value), overflowed))
                }
            )*
            (lhs, rhs) => Err(OperandMismatch {
                lhs: lhs.ty(),
                rhs: rhs.ty(),
            }),
        }
    };
}

impl Scalar {
    /// Returns the type of the value.
    #[inline]
    pub fn ty(&self) -> IntTy {
        match self {
            Scalar::I8(_) => IntTy::I8,
            Scalar::I16(_) => IntTy::I16,
            Scalar::I32(_) => IntTy::I32,
            Scalar::I64(_) => IntTy::I64,
            Scalar::Isize(_) => IntTy::Isize,
            Scalar::U8(_) => IntTy::U8,
            Scalar::U16(_) => IntTy::U16,
            Scalar::U32(_) => IntTy::U32,
            Scalar::U64(_) => IntTy::U64,
            Scalar::Usize(_) => IntTy::Usize,
        }
    }

    /// Applies `op` to two values of the same type.
    ///
    /// Returns the result and the overflow flag, exactly as the entry point
    /// for `(op, lhs.ty())` would.
    ///
    /// # Errors
    ///
    /// Returns `OperandMismatch` if `lhs` and `rhs` have different types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ckd_core::catalogue::{IntTy, OverflowOp};
    /// # use ckd_core::scalar::Scalar;
    /// let (value, overflowed) =
    ///     Scalar::checked_binop(OverflowOp::Add, Scalar::I8(100), Scalar::I8(27)).unwrap();
    /// assert_eq!(value, Scalar::I8(127));
    /// assert!(!overflowed);
    ///
    /// let err = Scalar::checked_binop(OverflowOp::Add, Scalar::I8(1), Scalar::U8(1)).unwrap_err();
    /// assert_eq!((err.lhs, err.rhs), (IntTy::I8, IntTy::U8));
    /// ```
    pub fn checked_binop(
        op: OverflowOp,
        lhs: Scalar,
        rhs: Scalar,
    ) -> Result<(Scalar, bool), OperandMismatch> {
        dispatch!(op, lhs, rhs; I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::I8(v) => write!(f, "{}i8", v),
            Scalar::I16(v) => write!(f, "{}i16", v),
            Scalar::I32(v) => write!(f, "{}i32", v),
            Scalar::I64(v) => write!(f, "{}i64", v),
            Scalar::Isize(v) => write!(f, "{}isize", v),
            Scalar::U8(v) => write!(f, "{}u8", v),
            Scalar::U16(v) => write!(f, "{}u16", v),
            Scalar::U32(v) => write!(f, "{}u32", v),
            Scalar::U64(v) => write!(f, "{}u64", v),
            Scalar::Usize(v) => write!(f, "{}usize", v),
        }
    }
}

macro_rules! impl_from_for_scalar {
    ($t:ty, $variant:ident) => {
        impl From<$t> for Scalar {
            #[inline]
            fn from(v: $t) -> Self {
                Scalar::$variant(v)
            }
        }
    };
}

impl_from_for_scalar!(i8, I8);
impl_from_for_scalar!(i16, I16);
impl_from_for_scalar!(i32, I32);
impl_from_for_scalar!(i64, I64);
impl_from_for_scalar!(isize, Isize);
impl_from_for_scalar!(u8, U8);
impl_from_for_scalar!(u16, U16);
impl_from_for_scalar!(u32, U32);
impl_from_for_scalar!(u64, U64);
impl_from_for_scalar!(usize, Usize);
