// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Message encoder: a complete `Request` -> IPP request body.
//
// ```text
// version-number:   2 bytes (major, minor)
// operation-id:     2 bytes (big-endian)
// request-id:       4 bytes (big-endian, signed)
// operation-attributes-tag, attributes...
// [job-attributes-tag, attributes / collections...]
// [printer-attributes-tag, attributes...]
// end-of-attributes-tag
// [document data, unprefixed, to end of frame]
// ```
//
// The result is what a transport posts as an `application/ipp` body.

use presswire_core::config::EncoderConfig;
use presswire_core::error::{EncodeError, Result};
use presswire_core::tags::{AttributeTag, AttributeTagMap};
use presswire_core::types::{AttributeGroup, AttributeValue, GroupKind, Request, Version};
use tracing::{debug, instrument};

use crate::attribute::{AttributeOutcome, encode_attribute};
use crate::collection::encode_collection;
use crate::diagnostics::{Diagnostics, SkippedAttribute};
use crate::request_id::generate_request_id;
use crate::wire::WireWriter;

/// Fixed header: version (2) + operation-id (2) + request-id (4).
pub const HEADER_LEN: usize = 8;

/// An encoded request message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    /// The complete message bytes.
    pub bytes: Vec<u8>,
    /// The request-id written into the header (generated if the request
    /// had none).
    pub request_id: i32,
    /// The version written into the header.
    pub version: Version,
    /// Attributes dropped because their tag could not be resolved.
    pub skipped: Vec<SkippedAttribute>,
}

impl EncodedRequest {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Encodes requests against a tag map and configuration.
///
/// Holds no mutable state; one encoder can be shared across threads.
#[derive(Debug, Clone)]
pub struct MessageEncoder<'a> {
    tags: &'a AttributeTagMap,
    config: EncoderConfig,
}

impl MessageEncoder<'static> {
    /// Encoder using the standard tag map.
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            tags: AttributeTagMap::standard(),
            config,
        }
    }
}

impl Default for MessageEncoder<'static> {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

impl<'a> MessageEncoder<'a> {
    /// Encoder using a caller-supplied tag map.
    pub fn with_tag_map(tags: &'a AttributeTagMap, config: EncoderConfig) -> Self {
        Self { tags, config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode `request` into a complete IPP request message.
    #[instrument(skip_all, fields(operation = ?request.operation))]
    pub fn encode(&self, request: &Request) -> Result<EncodedRequest> {
        let version = request.version.unwrap_or(self.config.default_version);
        let request_id = match request.request_id {
            Some(id) => id,
            None => generate_request_id()?,
        };

        let data_len = request.data.as_ref().map_or(0, Vec::len);
        let mut out = WireWriter::with_capacity(256 + data_len);
        let mut diag = Diagnostics::new();

        out.u8(version.major)
            .u8(version.minor)
            .u16(request.operation.code())
            .i32(request_id);

        out.tag(AttributeTag::OperationAttributes);
        self.write_group(&mut out, &mut diag, GroupKind::Operation, &request.operation_attributes)?;

        if let Some(job) = &request.job_attributes {
            out.tag(AttributeTag::JobAttributes);
            self.write_group(&mut out, &mut diag, GroupKind::Job, job)?;
        }

        if let Some(printer) = &request.printer_attributes {
            out.tag(AttributeTag::PrinterAttributes);
            self.write_group(&mut out, &mut diag, GroupKind::Printer, printer)?;
        }

        out.tag(AttributeTag::EndOfAttributes);

        if let Some(data) = &request.data {
            out.raw(data);
        }

        debug!(
            request_id,
            %version,
            bytes = out.len(),
            document_bytes = data_len,
            skipped = diag.skipped().len(),
            "request encoded"
        );

        Ok(EncodedRequest {
            bytes: out.into_bytes(),
            request_id,
            version,
            skipped: diag.into_skipped(),
        })
    }

    fn write_group(
        &self,
        out: &mut WireWriter,
        diag: &mut Diagnostics,
        group: GroupKind,
        attributes: &AttributeGroup,
    ) -> Result<()> {
        for (name, attribute) in attributes {
            // Only the job group carries collection values as collections.
            if let (GroupKind::Job, AttributeValue::Collection(members)) = (group, &attribute.value) {
                match attribute.tag {
                    None | Some(AttributeTag::BeginCollection) => {}
                    Some(tag) => {
                        return Err(EncodeError::TypeMismatch {
                            attribute: name.clone(),
                            tag,
                            found: "collection",
                        });
                    }
                }
                encode_collection(out, name, members, self.config.collection_integers)?;
                continue;
            }

            match encode_attribute(out, name, attribute, self.tags)? {
                AttributeOutcome::Encoded { .. } => {}
                AttributeOutcome::Unresolved if self.config.strict => {
                    return Err(EncodeError::UnresolvedTag {
                        attribute: name.clone(),
                    });
                }
                AttributeOutcome::Unresolved => diag.skip(group, name),
            }
        }
        debug!(group = group.as_str(), attributes = attributes.len(), "group encoded");
        Ok(())
    }
}

/// Encode with the standard tag map and default configuration.
pub fn encode_request(request: &Request) -> Result<EncodedRequest> {
    MessageEncoder::default().encode(request)
}
