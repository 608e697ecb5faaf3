// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # hddsgen-fields - Field metadata for IDL type support
//!
//! Core of the `hddsgen` C++ backend: for every field of a structured
//! type, derive the metadata the code-emission templates need to produce
//! correct marshal/unmarshal logic - semantic classification,
//! wire-encoding width, qualified and mangled names, and the
//! reference/pointer/wrapper expressions of the selected representation
//! convention.
//!
//! The front end (parser, type-graph builder), the emission templates,
//! and the driver CLI live elsewhere in the generator; this crate turns
//! an arbitrarily aliased and possibly anonymous type graph into flat,
//! deterministic strings and integers those templates consume verbatim.
//!
//! ## Pipeline
//!
//! ```text
//! TypeNode/Field --> classify --> names --> encoding --> mapping --> FieldInfo
//!    (front end)     category    scoped/    element      ref/ptr/    immutable
//!                    flags       mangled    width+tag    wrapper     descriptor
//! ```
//!
//! Data flows one way; every descriptor is computed once, in
//! construction order, and never mutated afterwards. Construction is
//! side-effect-free, so fields may be processed in any order.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TypeNode`] | Entry in the consumed type graph (scope, kind, anonymity) |
//! | [`Classification`] | Flat capability flags over a resolved type |
//! | [`WireRepr`] | Element wire width, stream role, and C++ spelling |
//! | [`Convention`] | Legacy (classic) vs modern (C++11) mapping |
//! | [`FieldInfo`] | The per-field descriptor handed to the emitter |
//! | [`EleLen`] | Dedup key for per-element-type/length helpers |
//!
//! ## Example
//!
//! ```rust
//! use hddsgen_fields::{
//!     Convention, Field, FieldInfo, PrimitiveKind, SequenceType, TypeKind, TypeNode,
//! };
//!
//! // struct Telemetry { sequence<int16, 5> bar; };
//! let int16 = TypeNode::new(
//!     vec!["int16".to_string()],
//!     TypeKind::Primitive(PrimitiveKind::Int16),
//! );
//! let field = Field::new(
//!     "bar",
//!     TypeNode::anonymous(
//!         vec!["Telemetry".to_string(), "bar".to_string()],
//!         TypeKind::Sequence(SequenceType::new(int16, Some(5))),
//!     ),
//! );
//!
//! let info = FieldInfo::from_field(&field, Convention::Legacy).unwrap();
//! assert_eq!(info.scoped_type, "Telemetry::_bar_seq");
//! assert_eq!(info.n_elems, 5);
//! ```
//!
//! ## See Also
//!
//! - [OMG IDL 4.2](https://www.omg.org/spec/IDL/4.2/)
//! - [IDL to C++11 Mapping](https://www.omg.org/spec/CPP11/)
//! - [DDS XTypes](https://www.omg.org/spec/DDS-XTypes/1.3/) (CDR rules)

pub mod ast;
pub mod classify;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod field_info;
pub mod mapping;
pub mod names;

pub use ast::{ArrayType, Field, PrimitiveKind, SequenceType, TypeKind, TypeNode};
pub use classify::{classify, Classification};
pub use config::GenConfig;
pub use encoding::{string_type, wire_repr, WireRepr, WireTag};
pub use errors::{FieldError, FieldResult};
pub use field_info::{EleLen, FieldInfo};
pub use mapping::Convention;
pub use names::{scoped, type_id, underscore, SCOPE_OP};
