// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Orthogonal classification flags over resolved types.
//!
//!
//! [`classify`] resolves a type through its aliases and reduces it to a
//! flat capability set the emitter dispatches on. User-defined
//! structures and unions map to the empty set: the emitter delegates
//! them to their own generated type support.

use crate::ast::{PrimitiveKind, TypeKind, TypeNode};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Flat capability set describing what a resolved type is to the emitter.
///
/// `WIDE` only composes with `STRING` or a character-like `PRIMITIVE`;
/// composition is checked where flags are combined, not left to
/// convention.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification(u8);

impl Classification {
    /// Empty set: user-defined structure/union, delegated to its own
    /// marshaling.
    pub const UNKNOWN: Self = Self(0);
    pub const PRIMITIVE: Self = Self(1 << 0);
    pub const STRING: Self = Self(1 << 1);
    pub const ENUM: Self = Self(1 << 2);
    pub const WIDE: Self = Self(1 << 3);
    pub const ARRAY: Self = Self(1 << 4);
    pub const SEQUENCE: Self = Self(1 << 5);

    /// Whether every flag of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any flag of `other` is set in `self`.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }

    /// `WIDE` must ride on `STRING` or `PRIMITIVE`.
    #[must_use]
    pub const fn is_coherent(self) -> bool {
        !self.contains(Self::WIDE) || self.intersects(Self(Self::STRING.0 | Self::PRIMITIVE.0))
    }

    fn compose(a: Self, b: Self) -> Self {
        let combined = Self(a.0 | b.0);
        debug_assert!(combined.is_coherent(), "incoherent flags: {combined:?}");
        combined
    }
}

impl BitOr for Classification {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::compose(self, rhs)
    }
}

impl BitOrAssign for Classification {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = Self::compose(*self, rhs);
    }
}

impl fmt::Debug for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return f.write_str("UNKNOWN");
        }
        let mut first = true;
        for (flag, label) in [
            (Self::PRIMITIVE, "PRIMITIVE"),
            (Self::STRING, "STRING"),
            (Self::ENUM, "ENUM"),
            (Self::WIDE, "WIDE"),
            (Self::ARRAY, "ARRAY"),
            (Self::SEQUENCE, "SEQUENCE"),
        ] {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(label)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Classify a type after resolving it through aliases.
///
/// Pure and total: kinds outside the closed set map to
/// [`Classification::UNKNOWN`], never to an error.
#[must_use]
pub fn classify(ty: &TypeNode) -> Classification {
    match &ty.actual().kind {
        TypeKind::Primitive(PrimitiveKind::Char16) => {
            Classification::PRIMITIVE | Classification::WIDE
        }
        TypeKind::Primitive(_) => Classification::PRIMITIVE,
        TypeKind::Enum => Classification::ENUM,
        TypeKind::String { wide: true } => Classification::STRING | Classification::WIDE,
        TypeKind::String { wide: false } => Classification::STRING,
        TypeKind::Array(_) => Classification::ARRAY,
        TypeKind::Sequence(_) => Classification::SEQUENCE,
        // `actual` never yields an alias; structures and unions are
        // nested types handled by their own generated support.
        TypeKind::Structure | TypeKind::Union | TypeKind::Alias(_) => Classification::UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SequenceType;

    fn prim(kind: PrimitiveKind, name: &str) -> TypeNode {
        TypeNode::new(vec![name.to_string()], TypeKind::Primitive(kind))
    }

    #[test]
    fn test_classify_primitives() {
        assert_eq!(
            classify(&prim(PrimitiveKind::Int32, "int32")),
            Classification::PRIMITIVE
        );
        assert_eq!(
            classify(&prim(PrimitiveKind::Boolean, "boolean")),
            Classification::PRIMITIVE
        );
        assert_eq!(
            classify(&prim(PrimitiveKind::Char16, "wchar")),
            Classification::PRIMITIVE | Classification::WIDE
        );
    }

    #[test]
    fn test_classify_strings() {
        let narrow = TypeNode::new(vec!["string".to_string()], TypeKind::String { wide: false });
        let wide = TypeNode::new(vec!["wstring".to_string()], TypeKind::String { wide: true });
        assert_eq!(classify(&narrow), Classification::STRING);
        assert_eq!(
            classify(&wide),
            Classification::STRING | Classification::WIDE
        );
    }

    #[test]
    fn test_classify_resolves_aliases() {
        let seq = TypeNode::new(
            vec!["Mod".to_string(), "Values".to_string()],
            TypeKind::Sequence(SequenceType::new(prim(PrimitiveKind::Float64, "float64"), None)),
        );
        let alias = TypeNode::new(
            vec!["Mod".to_string(), "ValuesAlias".to_string()],
            TypeKind::Alias(Box::new(seq)),
        );
        assert_eq!(classify(&alias), Classification::SEQUENCE);
    }

    #[test]
    fn test_classify_nested_is_unknown() {
        let st = TypeNode::new(vec!["Mod".to_string(), "Inner".to_string()], TypeKind::Structure);
        let un = TypeNode::new(vec!["Mod".to_string(), "Choice".to_string()], TypeKind::Union);
        assert!(classify(&st).is_unknown());
        assert!(classify(&un).is_unknown());
    }

    #[test]
    fn test_wide_composition_is_coherent() {
        assert!((Classification::STRING | Classification::WIDE).is_coherent());
        assert!((Classification::PRIMITIVE | Classification::WIDE).is_coherent());
        assert!(!Classification::WIDE.is_coherent());
        assert!(Classification::SEQUENCE.is_coherent());
    }
}
