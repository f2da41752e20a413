// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Encoder configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Version;

/// How integer members inside a collection are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionIntegerEncoding {
    /// Value-length 4 followed by the 4-byte big-endian integer.
    #[default]
    FourByte,
    /// Value-length 4 followed by only 2 bytes of value.  Reproduces the
    /// framing some older clients put on the wire; only values in `i16`
    /// range are accepted.
    LegacyTwoByte,
}

/// Persistent encoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Protocol version used when a request does not set one.
    pub default_version: Version,
    /// Integer framing inside collections.
    pub collection_integers: CollectionIntegerEncoding,
    /// Fail instead of skipping attributes whose tag cannot be resolved.
    pub strict: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            default_version: Version::V2_0,
            collection_integers: CollectionIntegerEncoding::FourByte,
            strict: false,
        }
    }
}

impl EncoderConfig {
    /// Load settings from a JSON file.  Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let cfg = EncoderConfig::default();
        assert_eq!(cfg.default_version, Version::new(2, 0));
        assert_eq!(cfg.collection_integers, CollectionIntegerEncoding::FourByte);
        assert!(!cfg.strict);
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"collection_integers": "legacy-two-byte"}}"#).expect("write");

        let cfg = EncoderConfig::load(file.path()).expect("load");
        assert_eq!(cfg.collection_integers, CollectionIntegerEncoding::LegacyTwoByte);
        assert_eq!(cfg.default_version, Version::V2_0);
        assert!(!cfg.strict);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = EncoderConfig::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(crate::error::EncodeError::Io(_))));
    }
}
