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

//! # Compatibility Exports
//!
//! C ABI versions of the helpers in `ckd_core::compat`:
//!
//! * `ckd_utos_i8` … `ckd_utos_intptr`: unsigned-to-signed reinterpretation.
//! * `ckd_legacy_add_i32` / `ckd_legacy_sub_i32`: 32-bit add/sub returning
//!   the (possibly wrapped) value and reporting overflow through a pointer.

use ckd_core::compat;

macro_rules! export_utos {
    ($($name:ident($u:ty) -> $s:ty => $f:ident;)*) => {
        $(
            #[doc = concat!("C ABI export of `ckd_core::compat::", stringify!($f), "`.")]
            #[no_mangle]
            pub extern "C" fn $name(v: $u) -> $s {
                compat::$f(v)
            }
        )*
    };
}

export_utos! {
    ckd_utos_i8(u8) -> i8 => utos_i8;
    ckd_utos_i16(u16) -> i16 => utos_i16;
    ckd_utos_i32(u32) -> i32 => utos_i32;
    ckd_utos_i64(u64) -> i64 => utos_i64;
    ckd_utos_intptr(usize) -> isize => utos_isize;
}

/// 32-bit checked addition. Returns the wrapped sum and stores the overflow
/// flag in `*overflow`.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `overflow` is non-null and valid for writes.
#[no_mangle]
pub unsafe extern "C" fn ckd_legacy_add_i32(x: i32, y: i32, overflow: *mut bool) -> i32 {
    assert!(
        !overflow.is_null(),
        "called `ckd_legacy_add_i32` with null pointer"
    );

    let (sum, overflowed) = compat::legacy_checked_add_i32(x, y);
    *overflow = overflowed;
    sum
}

/// 32-bit checked subtraction. Returns the wrapped difference and stores the
/// overflow flag in `*overflow`.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `overflow` is non-null and valid for writes.
#[no_mangle]
pub unsafe extern "C" fn ckd_legacy_sub_i32(x: i32, y: i32, overflow: *mut bool) -> i32 {
    assert!(
        !overflow.is_null(),
        "called `ckd_legacy_sub_i32` with null pointer"
    );

    let (diff, overflowed) = compat::legacy_checked_sub_i32(x, y);
    *overflow = overflowed;
    diff
}
