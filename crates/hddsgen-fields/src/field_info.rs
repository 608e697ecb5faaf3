// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-field metadata derivation.
//!
//!
//! One [`FieldInfo`] per generated field (or per standalone named type),
//! fully computed at construction and immutable afterwards. The emission
//! templates consume its string and integer members verbatim; nothing
//! here outlives a single generation run.

use crate::ast::{ArrayType, Field, SequenceType, TypeKind, TypeNode};
use crate::classify::{classify, Classification};
use crate::encoding::{wire_repr, WireRepr};
use crate::errors::FieldResult;
use crate::mapping::{self, Convention};
use crate::names::{self, SCOPE_OP};

/// Dedup key for per-element-type/length helper declarations.
///
/// Ordered by canonical element name, then element count, so the
/// ordering is stable across runs and process boundaries and two fields
/// sharing both never emit duplicate helper symbols.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct EleLen {
    pub elem: String,
    pub len: u64,
}

impl EleLen {
    #[must_use]
    pub fn new(af: &FieldInfo<'_>) -> Self {
        Self {
            elem: af.scoped_elem.clone(),
            len: af.n_elems,
        }
    }
}

/// Everything the emitter needs to know about one field.
///
/// Borrows the type graph like every other pass of the generator; the
/// graph outlives the generation run.
#[derive(Clone, Debug)]
pub struct FieldInfo<'a> {
    /// Declared type of the field, possibly an alias.
    pub ty: &'a TypeNode,
    /// Container-relative field name; empty for a standalone named type.
    pub name: String,
    /// Alias-resolved type.
    pub act: &'a TypeNode,
    /// Classification of the resolved type.
    pub cls: Classification,
    /// Array descriptor, when the resolved type is an array.
    pub arr: Option<&'a ArrayType>,
    /// Sequence descriptor, when the resolved type is a sequence.
    pub seq: Option<&'a SequenceType>,
    /// Element base type for arrays and sequences.
    pub elem: Option<&'a TypeNode>,
    /// Alias-resolved element type.
    pub elem_act: Option<&'a TypeNode>,
    /// Classification of the element type; `UNKNOWN` for non-collections.
    pub elem_cls: Classification,
    /// Qualified element type name; empty for non-collections.
    pub scoped_elem: String,
    /// Mangled element type name.
    pub underscored_elem: String,
    /// Wrapper reference expression for the element type.
    pub elem_ref: Option<String>,
    /// Const wrapper reference expression for the element type.
    pub elem_const_ref: Option<String>,
    /// Wrapper tag distinguishing the element type.
    pub elem_tag: Option<String>,
    /// Qualified name of the enclosing structure; anonymous types only.
    pub struct_name: Option<String>,
    /// Local type name consumed by declarations in generated headers.
    pub type_name: String,
    /// Fully qualified type name.
    pub scoped_type: String,
    /// Mangled variant of the qualified type name.
    pub underscored: String,
    /// Stable FNV-1a id of the qualified type name.
    pub type_id: u32,
    /// Wire representation of the element, or of the field itself when
    /// it is a primitive/enum/string.
    pub elem_repr: Option<WireRepr>,
    /// Static element count: product of array extents, declared sequence
    /// bound, or 0 for an unbounded sequence.
    pub n_elems: u64,
    /// Element-count literal for arrays, length-field name for sequences.
    pub length: Option<String>,
    /// Argument-binding name in generated signatures.
    pub arg: &'static str,
    /// Mutable reference expression.
    pub ref_expr: String,
    /// Const reference expression.
    pub const_ref_expr: String,
    /// Pointer expression; arrays use the for-any form.
    pub ptr_expr: String,
    /// Unwrap binding; modern convention, collections only.
    pub unwrap_expr: Option<String>,
    /// Const unwrap binding; modern convention, collections only.
    pub const_unwrap_expr: Option<String>,
    /// Set when the standalone-anonymous fallback picked the type name
    /// from the type's own scope path; callers should audit these.
    pub ambiguous_name: bool,
}

impl<'a> FieldInfo<'a> {
    /// Build metadata for a structure member.
    ///
    /// # Errors
    ///
    /// Fails when the field (or its element) is a primitive kind with no
    /// wire encoding; the partial descriptor is discarded.
    pub fn from_field(field: &'a Field, convention: Convention) -> FieldResult<Self> {
        Self::build(&field.ty, field.name.clone(), None, convention)
    }

    /// Build metadata for a standalone named type with an explicit base,
    /// outside any owning field.
    ///
    /// # Errors
    ///
    /// Same failure mode as [`FieldInfo::from_field`].
    pub fn from_named(
        scope: &[String],
        base: &'a TypeNode,
        convention: Convention,
    ) -> FieldResult<Self> {
        Self::build(base, String::new(), Some(names::scoped(scope)), convention)
    }

    fn build(
        ty: &'a TypeNode,
        name: String,
        preset_scoped: Option<String>,
        convention: Convention,
    ) -> FieldResult<Self> {
        // 1. resolve and classify
        let act = ty.actual();
        let cls = classify(act);

        // 2. collection element, classified the same way
        let (arr, seq) = match &act.kind {
            TypeKind::Array(a) => (Some(a), None),
            TypeKind::Sequence(s) => (None, Some(s)),
            _ => (None, None),
        };
        let elem: Option<&'a TypeNode> = arr
            .map(|a| a.element.as_ref())
            .or_else(|| seq.map(|s| s.element.as_ref()));
        let elem_act = elem.map(TypeNode::actual);
        let elem_cls = elem_act.map_or(Classification::UNKNOWN, classify);
        let scoped_elem = elem.map_or_else(String::new, TypeNode::scoped_name);
        let underscored_elem = names::underscore(&scoped_elem);
        let (elem_ref, elem_const_ref, elem_tag) = if scoped_elem.is_empty() {
            (None, None, None)
        } else {
            (
                Some(mapping::distinct(&scoped_elem, &underscored_elem, false)),
                Some(mapping::distinct(&scoped_elem, &underscored_elem, true)),
                Some(format!("{underscored_elem}_tag")),
            )
        };

        // 3. own qualified name; anonymous collections are named after
        //    their field, under the enclosing structure
        let mut scoped_type = preset_scoped.unwrap_or_default();
        let mut struct_name = None;
        let mut ambiguous_name = false;
        let type_name;
        if ty.anonymous && elem.is_some() {
            scoped_type = ty.scoped_name();
            let enclosing = scoped_type
                .rfind(SCOPE_OP)
                .map_or("", |i| &scoped_type[..i])
                .to_string();
            if !name.is_empty() {
                let mut local = format!("_{name}");
                if seq.is_some() {
                    // keeps an array and a sequence of the same field
                    // name from colliding
                    local.push_str("_seq");
                }
                scoped_type = if enclosing.is_empty() {
                    local.clone()
                } else {
                    format!("{enclosing}{SCOPE_OP}{local}")
                };
                type_name = local;
            } else {
                // Standalone anonymous declaration with no owning field:
                // best effort, take the last segment of the synthesized
                // scope path.
                type_name = scoped_type
                    .rfind(SCOPE_OP)
                    .map_or_else(|| scoped_type.clone(), |i| {
                        scoped_type[i + SCOPE_OP.len()..].to_string()
                    });
                ambiguous_name = true;
                tracing::warn!(
                    scoped_type = %scoped_type,
                    "standalone anonymous type has no owning field; using its last scope segment"
                );
            }
            if !enclosing.is_empty() {
                struct_name = Some(enclosing);
            }
        } else {
            if scoped_type.is_empty() {
                scoped_type = ty.scoped_name();
            }
            type_name = scoped_type.clone();
        }
        let underscored = names::underscore(&scoped_type);
        let type_id = names::type_id(&scoped_type);

        // 4. wire representation of the element, or of the field itself
        let elem_repr = match elem {
            Some(e) => wire_repr(e, convention)?,
            None => wire_repr(ty, convention)?,
        };

        // 5. element count and binding names
        let mut n_elems: u64 = 1;
        let mut length = None;
        let mut arg = "";
        if let Some(a) = arr {
            n_elems = a.total_elems();
            length = Some(n_elems.to_string());
            arg = "arr";
        } else if let Some(s) = seq {
            n_elems = u64::from(s.bound.unwrap_or(0));
            length = Some("length".to_string());
            arg = "seq";
        }

        // 6. reference, pointer, and wrapper expressions
        let is_array = arr.is_some();
        let ptr_expr = mapping::pointer(&scoped_type, is_array);
        let (ref_expr, const_ref_expr, unwrap_expr, const_unwrap_expr, arg) = match convention {
            Convention::Modern => {
                let unwrap =
                    (!arg.is_empty()).then(|| mapping::unwrap_binding(&scoped_type, arg, false));
                let const_unwrap =
                    (!arg.is_empty()).then(|| mapping::unwrap_binding(&scoped_type, arg, true));
                (
                    mapping::distinct(&scoped_type, &underscored, false),
                    mapping::distinct(&scoped_type, &underscored, true),
                    unwrap,
                    const_unwrap,
                    "wrap",
                )
            }
            Convention::Legacy => {
                let mut_ref = mapping::legacy_ref(&scoped_type, is_array);
                let const_ref = format!("const {mut_ref}");
                (mut_ref, const_ref, None, None, arg)
            }
        };

        tracing::debug!(
            field = %name,
            scoped_type = %scoped_type,
            cls = ?cls,
            n_elems,
            "derived field metadata"
        );

        Ok(Self {
            ty,
            name,
            act,
            cls,
            arr,
            seq,
            elem,
            elem_act,
            elem_cls,
            scoped_elem,
            underscored_elem,
            elem_ref,
            elem_const_ref,
            elem_tag,
            struct_name,
            type_name,
            scoped_type,
            underscored,
            type_id,
            elem_repr,
            n_elems,
            length,
            arg,
            ref_expr,
            const_ref_expr,
            ptr_expr,
            unwrap_expr,
            const_unwrap_expr,
            ambiguous_name,
        })
    }

    /// Whether the resolved type is an array or a sequence.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.arr.is_some() || self.seq.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(elem: &str, len: u64) -> EleLen {
        EleLen {
            elem: elem.to_string(),
            len,
        }
    }

    #[test]
    fn test_ele_len_is_irreflexive() {
        for k in [key("int16", 5), key("", 0), key("Mod::Inner", 12)] {
            assert!(!(k < k));
        }
    }

    #[test]
    fn test_ele_len_is_transitive() {
        let keys = [
            key("float64", 0),
            key("float64", 5),
            key("int16", 0),
            key("int16", 5),
            key("int16", 9),
            key("int32", 1),
        ];
        for a in &keys {
            for b in &keys {
                for c in &keys {
                    if a < b && b < c {
                        assert!(a < c, "{a:?} < {b:?} < {c:?} but not {a:?} < {c:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_ele_len_dedup_collapses_equal_pairs() {
        let mut keys = vec![
            key("int16", 5),
            key("int32", 5),
            key("int16", 5),
            key("int16", 8),
        ];
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 3);
    }
}
