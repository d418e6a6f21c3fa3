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

//! # Entry Point Catalogue
//!
//! Names every (operation, type) combination a code generator can emit a
//! call to. A backend lowering a checked binary operation looks up its
//! `OverflowOp` and the operand `IntTy`, and asks the resulting `EntryPoint`
//! for the Rust name (`checked_<op>_<type>`) or the C ABI symbol
//! (`ckd_<op>_<ctype>`).
//!
//! The catalogue is closed: five operations times ten types, 50 entries.

/// A checked binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OverflowOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl OverflowOp {
    /// All operations, in catalogue order.
    pub const ALL: [OverflowOp; 5] = [
        OverflowOp::Add,
        OverflowOp::Sub,
        OverflowOp::Mul,
        OverflowOp::Div,
        OverflowOp::Rem,
    ];

    /// Returns the short name used in entry point names.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowOp::Add => "add",
            OverflowOp::Sub => "sub",
            OverflowOp::Mul => "mul",
            OverflowOp::Div => "div",
            OverflowOp::Rem => "rem",
        }
    }
}

impl std::fmt::Display for OverflowOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operand type of the checked operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntTy {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl IntTy {
    /// All operand types, signed first, in catalogue order.
    pub const ALL: [IntTy; 10] = [
        IntTy::I8,
        IntTy::I16,
        IntTy::I32,
        IntTy::I64,
        IntTy::Isize,
        IntTy::U8,
        IntTy::U16,
        IntTy::U32,
        IntTy::U64,
        IntTy::Usize,
    ];

    /// Returns the Rust spelling of the type.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            IntTy::I8 => "i8",
            IntTy::I16 => "i16",
            IntTy::I32 => "i32",
            IntTy::I64 => "i64",
            IntTy::Isize => "isize",
            IntTy::U8 => "u8",
            IntTy::U16 => "u16",
            IntTy::U32 => "u32",
            IntTy::U64 => "u64",
            IntTy::Usize => "usize",
        }
    }

    /// Returns the suffix used in C ABI symbol names. Pointer-width types are
    /// spelled after `intptr_t` / `uintptr_t`.
    #[inline]
    pub fn c_name(&self) -> &'static str {
        match self {
            IntTy::Isize => "intptr",
            IntTy::Usize => "uintptr",
            other => other.as_str(),
        }
    }

    /// Returns the `<stdint.h>` type matching this type.
    #[inline]
    pub fn c_type(&self) -> &'static str {
        match self {
            IntTy::I8 => "int8_t",
            IntTy::I16 => "int16_t",
            IntTy::I32 => "int32_t",
            IntTy::I64 => "int64_t",
            IntTy::Isize => "intptr_t",
            IntTy::U8 => "uint8_t",
            IntTy::U16 => "uint16_t",
            IntTy::U32 => "uint32_t",
            IntTy::U64 => "uint64_t",
            IntTy::Usize => "uintptr_t",
        }
    }

    /// Returns the width in bits. Pointer-width types report the width of the
    /// target the crate was compiled for.
    #[inline]
    pub fn bits(&self) -> u32 {
        match self {
            IntTy::I8 | IntTy::U8 => 8,
            IntTy::I16 | IntTy::U16 => 16,
            IntTy::I32 | IntTy::U32 => 32,
            IntTy::I64 | IntTy::U64 => 64,
            IntTy::Isize | IntTy::Usize => usize::BITS,
        }
    }

    /// Returns `true` for the signed types.
    #[inline]
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            IntTy::I8 | IntTy::I16 | IntTy::I32 | IntTy::I64 | IntTy::Isize
        )
    }

    /// Returns the unsigned type of the same width.
    #[inline]
    pub fn to_unsigned(&self) -> IntTy {
        match self {
            IntTy::I8 => IntTy::U8,
            IntTy::I16 => IntTy::U16,
            IntTy::I32 => IntTy::U32,
            IntTy::I64 => IntTy::U64,
            IntTy::Isize => IntTy::Usize,
            unsigned => *unsigned,
        }
    }
}

impl std::fmt::Display for IntTy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One (operation, type) combination of the catalogue.
///
/// # Examples
///
/// ```rust
/// # use ckd_core::catalogue::{EntryPoint, IntTy, OverflowOp};
/// let entry = EntryPoint::new(OverflowOp::Mul, IntTy::Usize);
/// assert_eq!(entry.rust_name(), "checked_mul_usize");
/// assert_eq!(entry.symbol(), "ckd_mul_uintptr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryPoint {
    op: OverflowOp,
    ty: IntTy,
}

impl EntryPoint {
    /// Creates a new `EntryPoint`.
    #[inline]
    pub const fn new(op: OverflowOp, ty: IntTy) -> Self {
        Self { op, ty }
    }

    /// Returns the operation.
    #[inline]
    pub fn op(&self) -> OverflowOp {
        self.op
    }

    /// Returns the operand type.
    #[inline]
    pub fn ty(&self) -> IntTy {
        self.ty
    }

    /// Returns the name of the Rust function implementing this entry.
    pub fn rust_name(&self) -> String {
        format!("checked_{}_{}", self.op.as_str(), self.ty.as_str())
    }

    /// Returns the name of the C ABI export implementing this entry.
    pub fn symbol(&self) -> String {
        format!("ckd_{}_{}", self.op.as_str(), self.ty.c_name())
    }
}

impl std::fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "checked_{}_{}", self.op, self.ty)
    }
}

/// Iterates over all 50 entry points, grouped by operation.
pub fn entry_points() -> impl Iterator<Item = EntryPoint> {
    OverflowOp::ALL
        .into_iter()
        .flat_map(|op| IntTy::ALL.into_iter().map(move |ty| EntryPoint::new(op, ty)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_has_fifty_unique_entries() {
        let entries: Vec<EntryPoint> = entry_points().collect();
        assert_eq!(entries.len(), 50);

        let rust_names: HashSet<String> = entries.iter().map(EntryPoint::rust_name).collect();
        let symbols: HashSet<String> = entries.iter().map(EntryPoint::symbol).collect();
        assert_eq!(rust_names.len(), 50);
        assert_eq!(symbols.len(), 50);
    }

    #[test]
    fn test_entry_points_are_grouped_by_operation() {
        let first: Vec<EntryPoint> = entry_points().take(10).collect();
        assert!(first.iter().all(|e| e.op() == OverflowOp::Add));
        assert_eq!(first[0].ty(), IntTy::I8);
        assert_eq!(first[9].ty(), IntTy::Usize);
        assert_eq!(entry_points().last(), Some(EntryPoint::new(OverflowOp::Rem, IntTy::Usize)));
    }

    #[test]
    fn test_names() {
        let e = EntryPoint::new(OverflowOp::Add, IntTy::I8);
        assert_eq!(e.rust_name(), "checked_add_i8");
        assert_eq!(e.symbol(), "ckd_add_i8");
        assert_eq!(format!("{}", e), "checked_add_i8");

        let e = EntryPoint::new(OverflowOp::Rem, IntTy::Isize);
        assert_eq!(e.rust_name(), "checked_rem_isize");
        assert_eq!(e.symbol(), "ckd_rem_intptr");
    }

    #[test]
    fn test_int_ty_properties() {
        assert_eq!(IntTy::I8.bits(), 8);
        assert_eq!(IntTy::U64.bits(), 64);
        assert_eq!(IntTy::Isize.bits(), isize::BITS);
        assert_eq!(IntTy::Usize.c_type(), "uintptr_t");
        assert_eq!(IntTy::I32.c_type(), "int32_t");

        let signed = IntTy::ALL.iter().filter(|t| t.is_signed()).count();
        assert_eq!(signed, 5);
    }

    #[test]
    fn test_to_unsigned_keeps_width() {
        for ty in IntTy::ALL {
            let unsigned = ty.to_unsigned();
            assert!(!unsigned.is_signed());
            assert_eq!(unsigned.bits(), ty.bits());
            if !ty.is_signed() {
                assert_eq!(unsigned, ty);
            }
        }
        assert_eq!(IntTy::Isize.to_unsigned(), IntTy::Usize);
    }
}
