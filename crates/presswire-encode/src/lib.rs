// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Presswire Encode: turns a `Request` into the exact byte layout of an IPP
// request message (RFC 8010).  Pure and synchronous: no I/O, no shared
// mutable state.  Transport and response decoding live elsewhere.

pub mod attribute;
pub mod collection;
pub mod diagnostics;
pub mod message;
pub mod request_id;
pub mod value;
pub mod wire;

pub use attribute::{AttributeOutcome, encode_attribute, resolve_tag};
pub use collection::encode_collection;
pub use diagnostics::{Diagnostics, SkippedAttribute};
pub use message::{EncodedRequest, MessageEncoder, encode_request};
pub use request_id::generate_request_id;
pub use value::encode_value;
pub use wire::WireWriter;
