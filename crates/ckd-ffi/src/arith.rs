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

//! # Checked Arithmetic Exports
//!
//! C ABI versions of the 50 entry points. Each export has the shape
//!
//! ```c
//! bool ckd_<op>_<ctype>(T x, T y, T *result);
//! ```
//!
//! and returns the overflow flag. `*result` is written only when the flag is
//! `false`; on overflow the slot is left untouched. Pointer-width operands
//! use `intptr_t` / `uintptr_t`, which share their ABI with `isize` /
//! `usize`.
//!
//! ## Safety
//!
//! `result` must be valid for a write of `T`. Passing `NULL` panics, which
//! aborts the process at the FFI boundary.

use ckd_core::ops::entry::*;

macro_rules! export_checked {
    ($($name:ident($t:ty) => $entry:ident;)*) => {
        $(
            #[doc = concat!("C ABI export of [`", stringify!($entry), "`].")]
            ///
            /// Returns `true` on overflow. Writes the result through `result`
            /// only when no overflow occurred.
            ///
            /// # Safety
            ///
            /// This function is unsafe because it dereferences a raw pointer.
            /// The caller must ensure that `result` is non-null, aligned and
            /// valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn $name(x: $t, y: $t, result: *mut $t) -> bool {
                assert!(
                    !result.is_null(),
                    concat!("called `", stringify!($name), "` with null pointer")
                );

                let (value, overflowed) = $entry(x, y);
                if !overflowed {
                    *result = value;
                }
                overflowed
            }
        )*
    };
}

export_checked! {
    ckd_add_i8(i8) => checked_add_i8;
    ckd_add_i16(i16) => checked_add_i16;
    ckd_add_i32(i32) => checked_add_i32;
    ckd_add_i64(i64) => checked_add_i64;
    ckd_add_intptr(isize) => checked_add_isize;
    ckd_add_u8(u8) => checked_add_u8;
    ckd_add_u16(u16) => checked_add_u16;
    ckd_add_u32(u32) => checked_add_u32;
    ckd_add_u64(u64) => checked_add_u64;
    ckd_add_uintptr(usize) => checked_add_usize;

    ckd_sub_i8(i8) => checked_sub_i8;
    ckd_sub_i16(i16) => checked_sub_i16;
    ckd_sub_i32(i32) => checked_sub_i32;
    ckd_sub_i64(i64) => checked_sub_i64;
    ckd_sub_intptr(isize) => checked_sub_isize;
    ckd_sub_u8(u8) => checked_sub_u8;
    ckd_sub_u16(u16) => checked_sub_u16;
    ckd_sub_u32(u32) => checked_sub_u32;
    ckd_sub_u64(u64) => checked_sub_u64;
    ckd_sub_uintptr(usize) => checked_sub_usize;

    ckd_mul_i8(i8) => checked_mul_i8;
    ckd_mul_i16(i16) => checked_mul_i16;
    ckd_mul_i32(i32) => checked_mul_i32;
    ckd_mul_i64(i64) => checked_mul_i64;
    ckd_mul_intptr(isize) => checked_mul_isize;
    ckd_mul_u8(u8) => checked_mul_u8;
    ckd_mul_u16(u16) => checked_mul_u16;
    ckd_mul_u32(u32) => checked_mul_u32;
    ckd_mul_u64(u64) => checked_mul_u64;
    ckd_mul_uintptr(usize) => checked_mul_usize;

    ckd_div_i8(i8) => checked_div_i8;
    ckd_div_i16(i16) => checked_div_i16;
    ckd_div_i32(i32) => checked_div_i32;
    ckd_div_i64(i64) => checked_div_i64;
    ckd_div_intptr(isize) => checked_div_isize;
    ckd_div_u8(u8) => checked_div_u8;
    ckd_div_u16(u16) => checked_div_u16;
    ckd_div_u32(u32) => checked_div_u32;
    ckd_div_u64(u64) => checked_div_u64;
    ckd_div_uintptr(usize) => checked_div_usize;

    ckd_rem_i8(i8) => checked_rem_i8;
    ckd_rem_i16(i16) => checked_rem_i16;
    ckd_rem_i32(i32) => checked_rem_i32;
    ckd_rem_i64(i64) => checked_rem_i64;
    ckd_rem_intptr(isize) => checked_rem_isize;
    ckd_rem_u8(u8) => checked_rem_u8;
    ckd_rem_u16(u16) => checked_rem_u16;
    ckd_rem_u32(u32) => checked_rem_u32;
    ckd_rem_u64(u64) => checked_rem_u64;
    ckd_rem_uintptr(usize) => checked_rem_usize;
}
