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

//! # ckd FFI
//!
//! **C-Compatible Exports of the ckd Checked-Arithmetic Primitives.**
//!
//! Code generators targeting C (or any language that links against a C ABI)
//! emit calls to these symbols to reproduce checked-arithmetic semantics.
//! Every export is a plain function over machine integers: no handles, no
//! allocation, no global state.
//!
//! ## Conventions
//!
//! 1.  **Naming**: `ckd_<op>_<ctype>` with `op` in `add`, `sub`, `mul`, `div`,
//!     `rem` and `ctype` in `i8` … `i64`, `intptr`, `u8` … `u64`, `uintptr`.
//!     `ckd_core::catalogue::EntryPoint::symbol` produces these names.
//! 2.  **Out-Parameter**: The overflow flag is the return value. The result
//!     is written through the last argument only when the flag is `false`.
//! 3.  **Fail-Fast Safety**: Passing `NULL` for the out-parameter is a caller
//!     bug and results in an immediate process abort (panic) rather than
//!     undefined behavior.
//!
//! ## Modules
//!
//! - `arith`: The 50 checked-arithmetic exports.
//! - `compat`: Unsigned-to-signed reinterpretation and legacy 32-bit add/sub.
//! - `header`: Renders the matching C header; the `ckd-header` binary writes
//!   it to disk.

pub mod arith;
pub mod compat;
pub mod header;
