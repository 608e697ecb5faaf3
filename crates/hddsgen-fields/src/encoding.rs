// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire-encoding width table for primitive, enum, and string kinds.
//!
//!
//! Maps a resolved type to the number of bytes one element occupies in
//! the CDR stream, the role it plays there, and the C++ spelling the
//! generated casts use. Nested types (structures, unions, collections)
//! have no entry; their marshaling is delegated to their own generated
//! type support.

use crate::ast::{PrimitiveKind, TypeKind, TypeNode};
use crate::classify::{classify, Classification};
use crate::errors::{FieldError, FieldResult};
use crate::mapping::Convention;

/// Role a value plays in the serialized stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireTag {
    Integer,
    Float,
    Char,
    Boolean,
    Byte,
    Str,
}

/// Element representation: wire width, stream role, and C++ spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireRepr {
    /// Bytes one element occupies in the serialized form. For strings
    /// this is the width of the length prefix, not of the payload.
    pub width: u32,
    pub tag: WireTag,
    /// Type expression used by generated casts.
    pub cxx: String,
}

impl WireRepr {
    fn of(width: u32, tag: WireTag, cxx: &str) -> Self {
        Self {
            width,
            tag,
            cxx: cxx.to_string(),
        }
    }
}

/// C++ string spelling per representation convention.
#[must_use]
pub fn string_type(cls: Classification, convention: Convention) -> &'static str {
    let wide = cls.contains(Classification::WIDE);
    match convention {
        Convention::Modern => {
            if wide {
                "std::wstring"
            } else {
                "std::string"
            }
        }
        Convention::Legacy => {
            if wide {
                "cdr::WStringVar"
            } else {
                "cdr::StringVar"
            }
        }
    }
}

/// Resolve the wire representation of a primitive, enum, or string type.
///
/// Returns `Ok(None)` for every other classification. Width and tag are
/// convention-independent; only the C++ spelling of strings varies with
/// the convention.
///
/// # Errors
///
/// [`FieldError::UnsupportedPrimitive`] for predefined kinds with no
/// wire mapping; fatal for the field being processed.
pub fn wire_repr(ty: &TypeNode, convention: Convention) -> FieldResult<Option<WireRepr>> {
    let act = ty.actual();
    let cls = classify(act);

    if cls.contains(Classification::ENUM) {
        // enums marshal as 32-bit regardless of their declared size
        return Ok(Some(WireRepr::of(4, WireTag::Integer, "uint32_t")));
    }
    if cls.contains(Classification::STRING) {
        // 4-byte length prefix; the character width does not matter here
        return Ok(Some(WireRepr::of(4, WireTag::Str, string_type(cls, convention))));
    }
    if cls.contains(Classification::PRIMITIVE) {
        let kind = match &act.kind {
            TypeKind::Primitive(p) => *p,
            _ => return Ok(None),
        };
        return primitive_repr(kind).map(Some);
    }
    Ok(None)
}

// @audit-ok: Simple pattern matching (cyclo 15, cogni 1) - kind to wire-repr dispatch table
fn primitive_repr(kind: PrimitiveKind) -> FieldResult<WireRepr> {
    let repr = match kind {
        PrimitiveKind::Int32 => WireRepr::of(4, WireTag::Integer, "int32_t"),
        PrimitiveKind::UInt32 => WireRepr::of(4, WireTag::Integer, "uint32_t"),
        PrimitiveKind::Int64 => WireRepr::of(8, WireTag::Integer, "int64_t"),
        PrimitiveKind::UInt64 => WireRepr::of(8, WireTag::Integer, "uint64_t"),
        PrimitiveKind::Int16 => WireRepr::of(2, WireTag::Integer, "int16_t"),
        PrimitiveKind::UInt16 => WireRepr::of(2, WireTag::Integer, "uint16_t"),
        PrimitiveKind::Float32 => WireRepr::of(4, WireTag::Float, "float"),
        PrimitiveKind::Float64 => WireRepr::of(8, WireTag::Float, "double"),
        PrimitiveKind::Float128 => WireRepr::of(16, WireTag::Float, "long double"),
        PrimitiveKind::Char8 => WireRepr::of(1, WireTag::Char, "char"),
        // wchar values carry a 1-byte length prefix on the wire, narrower
        // than the character's own storage
        PrimitiveKind::Char16 => WireRepr::of(1, WireTag::Char, "wchar_t"),
        PrimitiveKind::Boolean => WireRepr::of(1, WireTag::Boolean, "bool"),
        PrimitiveKind::Octet => WireRepr::of(1, WireTag::Byte, "uint8_t"),
        PrimitiveKind::Void | PrimitiveKind::Any => {
            return Err(FieldError::UnsupportedPrimitive { kind })
        }
    };
    Ok(repr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prim(kind: PrimitiveKind, name: &str) -> TypeNode {
        TypeNode::new(vec![name.to_string()], TypeKind::Primitive(kind))
    }

    #[test]
    fn test_int32_width_both_conventions() {
        for convention in [Convention::Legacy, Convention::Modern] {
            let repr = wire_repr(&prim(PrimitiveKind::Int32, "int32"), convention)
                .expect("in table")
                .expect("primitive");
            assert_eq!(repr.width, 4);
            assert_eq!(repr.tag, WireTag::Integer);
            assert_eq!(repr.cxx, "int32_t");
        }
    }

    #[test]
    fn test_wchar_narrow_length_prefix() {
        let repr = wire_repr(&prim(PrimitiveKind::Char16, "wchar"), Convention::Legacy)
            .expect("in table")
            .expect("primitive");
        assert_eq!(repr.width, 1);
        assert_eq!(repr.tag, WireTag::Char);
    }

    #[test]
    fn test_enum_marshals_as_uint32() {
        let ty = TypeNode::new(vec!["Color".to_string()], TypeKind::Enum);
        let repr = wire_repr(&ty, Convention::Legacy)
            .expect("in table")
            .expect("enum");
        assert_eq!((repr.width, repr.tag), (4, WireTag::Integer));
        assert_eq!(repr.cxx, "uint32_t");
    }

    #[test]
    fn test_string_spelling_follows_convention() {
        let wide = TypeNode::new(vec!["wstring".to_string()], TypeKind::String { wide: true });
        let legacy = wire_repr(&wide, Convention::Legacy).unwrap().unwrap();
        let modern = wire_repr(&wide, Convention::Modern).unwrap().unwrap();
        assert_eq!(legacy.width, 4);
        assert_eq!(modern.width, 4);
        assert_eq!(legacy.cxx, "cdr::WStringVar");
        assert_eq!(modern.cxx, "std::wstring");
    }

    #[test]
    fn test_nested_type_has_no_entry() {
        let st = TypeNode::new(vec!["Inner".to_string()], TypeKind::Structure);
        assert!(wire_repr(&st, Convention::Legacy).expect("no error").is_none());
    }

    #[test]
    fn test_void_is_unsupported() {
        let err = wire_repr(&prim(PrimitiveKind::Void, "void"), Convention::Legacy)
            .expect_err("no wire mapping");
        assert!(matches!(
            err,
            FieldError::UnsupportedPrimitive {
                kind: PrimitiveKind::Void
            }
        ));
    }
}
