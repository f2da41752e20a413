// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Value encoder: one scalar -> value-length + value bytes.

use presswire_core::error::{EncodeError, Result};
use presswire_core::tags::AttributeTag;
use presswire_core::types::Scalar;

use crate::wire::WireWriter;

/// Write the length-prefixed wire form of `value` under `tag`.
///
/// * integer / enum: length 4, 4-byte big-endian signed integer
/// * boolean: length 1, `0x01` or `0x00`
/// * date-time, resolution, rangeOfInteger: rejected, no scalar has their
///   fixed binary layout
/// * every other value tag: length of the UTF-8 bytes, then the bytes
///
/// A value whose kind does not match the tag fails with
/// [`EncodeError::TypeMismatch`] naming `attribute`.
pub fn encode_value(
    out: &mut WireWriter,
    attribute: &str,
    tag: AttributeTag,
    value: &Scalar,
) -> Result<()> {
    if tag.is_delimiter() || tag.is_collection_boundary() {
        return Err(EncodeError::InvalidValueTag {
            attribute: attribute.to_owned(),
            tag,
        });
    }

    match (tag, value) {
        (AttributeTag::Integer | AttributeTag::Enum, Scalar::Integer(v)) => {
            let v = i32::try_from(*v).map_err(|_| EncodeError::IntegerOutOfRange {
                attribute: attribute.to_owned(),
                tag,
                value: *v,
            })?;
            out.length(4).i32(v);
        }
        (AttributeTag::Boolean, Scalar::Boolean(b)) => {
            out.length(1).u8(u8::from(*b));
        }
        (t, Scalar::Text(s)) if !t.is_integer() && !t.is_fixed_width() => {
            out.value(attribute, s.as_bytes())?;
        }
        (tag, other) => {
            return Err(EncodeError::TypeMismatch {
                attribute: attribute.to_owned(),
                tag,
                found: other.kind(),
            });
        }
    }
    Ok(())
}
