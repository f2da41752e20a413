// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Byte-level writer for the IPP message layout (RFC 8010 SS3.1).
//
// Every field written through here is big-endian.  Names and values are
// prefixed with a 2-byte length; anything that does not fit in a u16 is
// rejected rather than truncated.

use presswire_core::error::{EncodeError, Result};
use presswire_core::tags::AttributeTag;

/// Accumulates the bytes of one IPP message.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Write a single tag byte.
    pub fn tag(&mut self, tag: AttributeTag) -> &mut Self {
        self.buf.push(tag.code());
        self
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn u16(&mut self, value: u16) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn i16(&mut self, value: i16) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn i32(&mut self, value: i32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Write a bare 2-byte length field.
    pub fn length(&mut self, len: u16) -> &mut Self {
        self.u16(len)
    }

    /// Write a length-prefixed attribute name.
    pub fn name(&mut self, name: &str) -> Result<&mut Self> {
        let bytes = name.as_bytes();
        let len = u16::try_from(bytes.len()).map_err(|_| EncodeError::NameTooLong {
            attribute: name.to_owned(),
            len: bytes.len(),
        })?;
        self.u16(len);
        self.buf.extend_from_slice(bytes);
        Ok(self)
    }

    /// Write a zero name-length, as used by additional values of a
    /// `1setOf` and by collection members.
    pub fn empty_name(&mut self) -> &mut Self {
        self.u16(0)
    }

    /// Write a length-prefixed value.  `attribute` is only used to label
    /// the error.
    pub fn value(&mut self, attribute: &str, value: &[u8]) -> Result<&mut Self> {
        let len = u16::try_from(value.len()).map_err(|_| EncodeError::ValueTooLong {
            attribute: attribute.to_owned(),
            len: value.len(),
        })?;
        self.u16(len);
        self.buf.extend_from_slice(value);
        Ok(self)
    }

    /// Append bytes without any prefix.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_length_prefixed() {
        let mut w = WireWriter::new();
        w.tag(AttributeTag::Keyword).name("sides").expect("name");
        assert_eq!(w.as_bytes(), b"\x44\x00\x05sides");
    }

    #[test]
    fn utf8_name_length_counts_bytes() {
        let mut w = WireWriter::new();
        w.name("café").expect("name");
        assert_eq!(&w.as_bytes()[..2], &[0x00, 0x05]);
    }

    #[test]
    fn value_longer_than_u16_is_rejected() {
        let mut w = WireWriter::new();
        let big = vec![b'a'; 70_000];
        let err = w.value("job-name", &big).expect_err("too long");
        assert!(matches!(err, EncodeError::ValueTooLong { len: 70_000, .. }));
        assert!(w.is_empty(), "nothing written on failure");
    }

    #[test]
    fn name_longer_than_u16_is_rejected() {
        let mut w = WireWriter::new();
        let long = "n".repeat(65_536);
        assert!(matches!(w.name(&long), Err(EncodeError::NameTooLong { len: 65_536, .. })));
    }

    #[test]
    fn integers_are_big_endian() {
        let mut w = WireWriter::with_capacity(8);
        w.u16(0x0102).i32(-2).i16(0x0304);
        assert_eq!(w.into_bytes(), vec![0x01, 0x02, 0xFF, 0xFF, 0xFF, 0xFE, 0x03, 0x04]);
    }
}
