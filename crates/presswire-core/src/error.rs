// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Presswire.

use thiserror::Error;

use crate::tags::AttributeTag;

/// Top-level error type for all Presswire operations.
///
/// Every value-level variant names the attribute it was raised for, so a
/// caller can point at the offending entry in the request.
#[derive(Debug, Error)]
pub enum EncodeError {
    // -- Value errors --
    #[error("attribute '{attribute}': {found} value cannot be encoded as {tag}")]
    TypeMismatch {
        attribute: String,
        tag: AttributeTag,
        found: &'static str,
    },

    #[error("attribute '{attribute}': {value} does not fit the {tag} wire range")]
    IntegerOutOfRange {
        attribute: String,
        tag: AttributeTag,
        value: i64,
    },

    #[error("attribute '{attribute}': {tag} is not a value tag")]
    InvalidValueTag {
        attribute: String,
        tag: AttributeTag,
    },

    // -- Length limits (2-byte length fields) --
    #[error("attribute name '{attribute}' is {len} bytes (max 65535)")]
    NameTooLong { attribute: String, len: usize },

    #[error("attribute '{attribute}': value is {len} bytes (max 65535)")]
    ValueTooLong { attribute: String, len: usize },

    // -- Tag resolution --
    #[error("attribute '{attribute}' has no explicit tag and is not in the tag map")]
    UnresolvedTag { attribute: String },

    // -- Request id --
    #[error("system random source unavailable")]
    RandomSource,

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, EncodeError>;
