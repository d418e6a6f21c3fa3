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

//! # ckd Core
//!
//! Overflow-checked integer arithmetic for code generators. Every operation
//! computes a result and separately reports whether the mathematically exact
//! result does not fit the operand type, so generated code can reproduce
//! checked-arithmetic semantics on targets that lack them.
//!
//! The catalogue is fixed: `add`, `sub`, `mul`, `div` and `rem` over `i8`,
//! `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`, `u64` and `usize`, 50
//! entry points named `checked_<op>_<type>`.
//!
//! ## Modules
//!
//! - `num`: The `CheckedPrimitive` trait keying every operation on bit
//!   width, signedness, bounds and a wider multiplication type.
//! - `ops`: The generic checked operations and the 50 named entry points.
//! - `catalogue`: `OverflowOp`, `IntTy` and `EntryPoint`, naming every entry
//!   point in Rust and in the C ABI.
//! - `scalar`: `Scalar`, a type-tagged value for run-time dispatch, e.g. when
//!   a backend folds constants.
//! - `compat`: Unsigned-to-signed reinterpretation and the 64-bit
//!   intermediate 32-bit add/sub still called by older generated code.
//!
//! ## Guarantees
//!
//! All functions are pure: no allocation, no shared state, no panics, no
//! logging. They are safe to call from any thread. When the overflow flag is
//! set the accompanying result is unspecified and must not be used.
//!
//! ```rust
//! use ckd_core::{checked_add_i8, checked_div_i8, checked_mul_u8};
//!
//! assert_eq!(checked_add_i8(100, 27), (127, false));
//! assert!(checked_add_i8(127, 1).1);
//! assert!(checked_div_i8(-128, -1).1);
//! assert!(checked_mul_u8(16, 16).1);
//! ```

pub mod catalogue;
pub mod compat;
pub mod num;
pub mod ops;
pub mod scalar;

pub use catalogue::{entry_points, EntryPoint, IntTy, OverflowOp};
pub use num::primitive::CheckedPrimitive;
pub use ops::entry::*;
pub use scalar::{OperandMismatch, Scalar};
