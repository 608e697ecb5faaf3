// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scoped-name resolution and mangling.

/// Scope separator used in generated qualified names.
pub const SCOPE_OP: &str = "::";

/// Join a scope path into a fully qualified name.
#[must_use]
pub fn scoped(path: &[String]) -> String {
    path.join(SCOPE_OP)
}

/// Mangle a qualified name: every scope separator becomes one underscore.
#[must_use]
pub fn underscore(scoped_type: &str) -> String {
    scoped_type.replace(SCOPE_OP, "_")
}

/// Compute the 32-bit FNV-1a hash of a fully qualified type name.
///
/// Deterministic across runs and hosts; emitters register generated type
/// support under this id.
#[must_use]
pub fn type_id(fqn: &str) -> u32 {
    const FNV_PRIME: u32 = 16_777_619;
    const FNV_OFFSET: u32 = 2_166_136_261;

    fqn.as_bytes()
        .iter()
        .fold(FNV_OFFSET, |hash, byte| {
            (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
        })
}
