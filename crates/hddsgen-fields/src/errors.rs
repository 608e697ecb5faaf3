// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for field-metadata derivation.
//!
//!
//! Defines `FieldError` for fatal conditions while deriving per-field
//! metadata. The ambiguous-anonymous-name condition is deliberately not an
//! error: it takes a documented best-effort fallback and is surfaced as a
//! flag on the descriptor instead (see `FieldInfo::ambiguous_name`).

use crate::ast::PrimitiveKind;
use std::fmt;

/// Result type for field-metadata operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Failures while deriving field metadata.
#[derive(Debug)]
pub enum FieldError {
    /// A primitive kind with no entry in the wire-encoding table.
    ///
    /// Fatal for the offending field: no partial descriptor is produced,
    /// the driver decides whether to continue with other fields.
    UnsupportedPrimitive {
        /// The offending kind.
        kind: PrimitiveKind,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPrimitive { kind } => {
                write!(f, "primitive kind {:?} has no wire encoding", kind)
            }
        }
    }
}

impl std::error::Error for FieldError {}
