// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generator configuration.
//!
//!
//! The driver loads a YAML config once before generation; the values are
//! read-only for the whole run and threaded into every construction
//! call.

use crate::mapping::Convention;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Generation settings consumed by the field-metadata core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Target C++ representation convention.
    pub convention: Convention,
    /// Register generated type support under stable FNV-1a type ids.
    pub emit_type_ids: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            convention: Convention::Legacy,
            emit_type_ids: true,
        }
    }
}

impl GenConfig {
    /// Parse a YAML config document.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw).context("Failed to parse generator config")
    }

    /// Load the config from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        Self::from_yaml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GenConfig::default();
        assert_eq!(config.convention, Convention::Legacy);
        assert!(config.emit_type_ids);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = GenConfig::from_yaml_str("convention: modern").expect("parse");
        assert_eq!(config.convention, Convention::Modern);
        assert!(config.emit_type_ids);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "convention: modern\nemit_type_ids: false").expect("write");

        let config = GenConfig::from_file(file.path()).expect("load");
        assert_eq!(config.convention, Convention::Modern);
        assert!(!config.emit_type_ids);
    }

    #[test]
    fn test_bad_yaml_is_an_error() {
        assert!(GenConfig::from_yaml_str("convention: [not, a, convention]").is_err());
    }
}
