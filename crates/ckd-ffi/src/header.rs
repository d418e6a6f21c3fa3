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

//! # C Header Generation
//!
//! Renders the C header declaring every export of this crate. The
//! prototypes are produced from `ckd_core::catalogue`, the same table the
//! exports are named after, so a code generator that `#include`s the header
//! and emits `EntryPoint::symbol()` names always links.
//!
//! ```rust
//! # use ckd_ffi::header::{render, HeaderOptions};
//! let text = render(&HeaderOptions::default());
//! assert!(text.contains("bool ckd_mul_uintptr(uintptr_t x, uintptr_t y, uintptr_t *result);"));
//! ```

use ckd_core::catalogue::{entry_points, EntryPoint, IntTy};
use tracing::debug;

/// Include guard used when none is given.
pub const DEFAULT_GUARD: &str = "CKD_CHECKED_H";

/// Error returned for an include guard that is not a C identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGuard {
    guard: String,
}

impl InvalidGuard {
    /// Returns the rejected guard.
    #[inline]
    pub fn guard(&self) -> &str {
        &self.guard
    }
}

impl std::fmt::Display for InvalidGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid include guard `{}`: expected a C identifier",
            self.guard
        )
    }
}

impl std::error::Error for InvalidGuard {}

/// What to put in the rendered header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    guard: String,
    include_compat: bool,
}

impl HeaderOptions {
    /// Creates header options with the given include guard.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGuard` if `guard` is not a valid C identifier.
    pub fn new(guard: impl Into<String>, include_compat: bool) -> Result<Self, InvalidGuard> {
        let guard = guard.into();
        if !is_c_identifier(&guard) {
            return Err(InvalidGuard { guard });
        }
        Ok(Self {
            guard,
            include_compat,
        })
    }

    /// Returns the include guard.
    #[inline]
    pub fn guard(&self) -> &str {
        &self.guard
    }

    /// Returns whether the compatibility helpers are declared.
    #[inline]
    pub fn include_compat(&self) -> bool {
        self.include_compat
    }
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            guard: DEFAULT_GUARD.to_string(),
            include_compat: true,
        }
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The C prototype of an entry point's export.
fn prototype(entry: &EntryPoint) -> String {
    let ty = entry.ty().c_type();
    format!("bool {}({ty} x, {ty} y, {ty} *result);", entry.symbol())
}

struct Header<'a> {
    options: &'a HeaderOptions,
}

impl std::fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.options.guard();

        writeln!(f, "/* Generated by ckd-header. Do not edit. */")?;
        writeln!(f, "#ifndef {}", guard)?;
        writeln!(f, "#define {}", guard)?;
        writeln!(f)?;
        writeln!(f, "#include <stdbool.h>")?;
        writeln!(f, "#include <stdint.h>")?;
        writeln!(f)?;
        writeln!(f, "#ifdef __cplusplus")?;
        writeln!(f, "extern \"C\" {{")?;
        writeln!(f, "#endif")?;

        // One block per operation; the result slot is written only when the
        // function returns false.
        let mut current_op = None;
        for entry in entry_points() {
            if current_op != Some(entry.op()) {
                writeln!(f)?;
                current_op = Some(entry.op());
            }
            writeln!(f, "{}", prototype(&entry))?;
        }

        if self.options.include_compat() {
            writeln!(f)?;
            for ty in IntTy::ALL.into_iter().filter(IntTy::is_signed) {
                writeln!(
                    f,
                    "{} ckd_utos_{}({} v);",
                    ty.c_type(),
                    ty.c_name(),
                    ty.to_unsigned().c_type()
                )?;
            }
            writeln!(f, "int32_t ckd_legacy_add_i32(int32_t x, int32_t y, bool *overflow);")?;
            writeln!(f, "int32_t ckd_legacy_sub_i32(int32_t x, int32_t y, bool *overflow);")?;
        }

        writeln!(f)?;
        writeln!(f, "#ifdef __cplusplus")?;
        writeln!(f, "}}")?;
        writeln!(f, "#endif")?;
        writeln!(f)?;
        writeln!(f, "#endif /* {} */", guard)
    }
}

/// Renders the C header for the given options.
pub fn render(options: &HeaderOptions) -> String {
    debug!(
        guard = options.guard(),
        include_compat = options.include_compat(),
        entries = entry_points().count(),
        "rendering C header"
    );
    Header { options }.to_string()
}
