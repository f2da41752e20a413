// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Presswire: core types, tag tables and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod tags;
pub mod types;

pub use config::{CollectionIntegerEncoding, EncoderConfig};
pub use error::{EncodeError, Result};
pub use tags::{AttributeTag, AttributeTagMap};
pub use types::*;
