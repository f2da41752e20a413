// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Attribute encoder: tag resolution plus tag + name + value triples.
//
// A `1setOf` value is written as one triple per element.  Only the first
// element carries the attribute name; the rest carry a zero name-length
// (RFC 8010 SS3.1.4), which is how a decoder groups them back together.

use presswire_core::error::{EncodeError, Result};
use presswire_core::tags::{AttributeTag, AttributeTagMap};
use presswire_core::types::{Attribute, AttributeValue};
use tracing::trace;

use crate::value::encode_value;
use crate::wire::WireWriter;

/// What happened to one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOutcome {
    /// Written; `values` is the number of tag+value pairs emitted.
    Encoded { tag: AttributeTag, values: usize },
    /// No explicit tag and no tag-map entry.  Nothing was written.
    Unresolved,
}

/// Explicit tag if given, otherwise the tag-map entry for `name`.
pub fn resolve_tag(
    name: &str,
    explicit: Option<AttributeTag>,
    tags: &AttributeTagMap,
) -> Option<AttributeTag> {
    explicit.or_else(|| tags.get(name))
}

/// Write the full encoding of one attribute.
pub fn encode_attribute(
    out: &mut WireWriter,
    name: &str,
    attribute: &Attribute,
    tags: &AttributeTagMap,
) -> Result<AttributeOutcome> {
    let Some(tag) = resolve_tag(name, attribute.tag, tags) else {
        return Ok(AttributeOutcome::Unresolved);
    };

    let values = match &attribute.value {
        AttributeValue::Scalar(value) => {
            out.tag(tag).name(name)?;
            encode_value(out, name, tag, value)?;
            1
        }
        AttributeValue::Repeated(values) => {
            for (index, value) in values.iter().enumerate() {
                out.tag(tag);
                if index == 0 {
                    out.name(name)?;
                } else {
                    out.empty_name();
                }
                encode_value(out, name, tag, value)?;
            }
            values.len()
        }
        AttributeValue::Collection(_) => {
            return Err(EncodeError::TypeMismatch {
                attribute: name.to_owned(),
                tag,
                found: "collection",
            });
        }
    };

    trace!(attribute = name, tag = tag.as_str(), values, "attribute encoded");
    Ok(AttributeOutcome::Encoded { tag, values })
}
