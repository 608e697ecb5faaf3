// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Representation conventions for generated C++ signatures.
//!
//!
//! Pure formatting helpers: given a qualified type name and its mangled
//! variant, produce the reference, pointer, and wrapper expressions the
//! emission templates splice into generated type support. Same inputs
//! always yield the same strings.

use serde::{Deserialize, Serialize};

/// Which C++ mapping the generated type support targets.
///
/// `Legacy` is the classic mapping (`_var`/`_forany` style), `Modern` is
/// the C++11 mapping (std types plus distinct wrappers). Selected once in
/// the generator config and threaded into every construction call; there
/// is no process-global.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    #[default]
    Legacy,
    Modern,
}

/// Distinct-wrapper expression binding a type to its tag.
///
/// The tag keeps two structurally identical generated types
/// distinguishable in overload resolution.
pub(crate) fn distinct(scoped_t: &str, underscored_t: &str, is_const: bool) -> String {
    let const_s = if is_const { "const " } else { "" };
    format!("cdr::Distinct<{const_s}{scoped_t}, {underscored_t}_tag>")
}

/// Mutable reference expression under the classic mapping. Arrays use the
/// for-any form.
pub(crate) fn legacy_ref(scoped_t: &str, is_array: bool) -> String {
    let suffix = if is_array { "_forany&" } else { "&" };
    format!("{scoped_t}{suffix}")
}

/// Pointer expression; convention-independent. Arrays use the for-any
/// form instead of a raw pointer.
pub(crate) fn pointer(scoped_t: &str, is_array: bool) -> String {
    let suffix = if is_array { "_forany*" } else { "*" };
    format!("{scoped_t}{suffix}")
}

/// Unwrap binding under the C++11 mapping: aliases the wrapped argument
/// to a local name and silences the unused-variable diagnostic when the
/// generated body never touches it.
pub(crate) fn unwrap_binding(scoped_t: &str, arg: &str, is_const: bool) -> String {
    let const_s = if is_const { "const " } else { "" };
    format!("  {const_s}{scoped_t}& {arg} = wrap;\n  static_cast<void>({arg});\n")
}
