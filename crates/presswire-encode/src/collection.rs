// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Collection encoder (RFC 8010 SS3.1.6).
//
// Layout written for `name = { member: value, ... }`:
//
// ```text
// begCollection  name-len  name          value-len=0
//   memberAttrName  name-len=0  value-len  member-name
//   <value-tag>     name-len=0  value-len  value
//   ...
//   begCollection   name-len    nested-name  value-len=0   (nested member)
//   ...
// endCollection  name-len=0  value-len=0
// ```
//
// Nested collections are opened under the member's name.  Member value tags
// follow the value kind: integer, boolean, or keyword for text.

use presswire_core::config::CollectionIntegerEncoding;
use presswire_core::error::{EncodeError, Result};
use presswire_core::tags::AttributeTag;
use presswire_core::types::{AttributeValue, Collection, Scalar};

use crate::value::encode_value;
use crate::wire::WireWriter;

/// Write a named collection and all of its members, recursively.
pub fn encode_collection(
    out: &mut WireWriter,
    name: &str,
    members: &Collection,
    integers: CollectionIntegerEncoding,
) -> Result<()> {
    write_collection(out, name, name, members, integers)
}

/// `path` is the dotted member path used to label errors
/// (`media-col.media-size.x-dimension`).
fn write_collection(
    out: &mut WireWriter,
    name: &str,
    path: &str,
    members: &Collection,
    integers: CollectionIntegerEncoding,
) -> Result<()> {
    out.tag(AttributeTag::BeginCollection).name(name)?.length(0);

    for (member, value) in members {
        let member_path = format!("{path}.{member}");
        match value {
            AttributeValue::Collection(nested) => {
                write_collection(out, member, &member_path, nested, integers)?;
            }
            AttributeValue::Scalar(scalar) => {
                write_member_name(out, member, &member_path)?;
                write_member_value(out, &member_path, scalar, integers)?;
            }
            AttributeValue::Repeated(scalars) => {
                write_member_name(out, member, &member_path)?;
                for scalar in scalars {
                    write_member_value(out, &member_path, scalar, integers)?;
                }
            }
        }
    }

    out.tag(AttributeTag::EndCollection).empty_name().length(0);
    Ok(())
}

fn write_member_name(out: &mut WireWriter, member: &str, path: &str) -> Result<()> {
    out.tag(AttributeTag::MemberAttrName)
        .empty_name()
        .value(path, member.as_bytes())?;
    Ok(())
}

fn member_tag(value: &Scalar) -> AttributeTag {
    match value {
        Scalar::Integer(_) => AttributeTag::Integer,
        Scalar::Boolean(_) => AttributeTag::Boolean,
        Scalar::Text(_) => AttributeTag::Keyword,
    }
}

fn write_member_value(
    out: &mut WireWriter,
    path: &str,
    value: &Scalar,
    integers: CollectionIntegerEncoding,
) -> Result<()> {
    let tag = member_tag(value);
    out.tag(tag).empty_name();

    match (value, integers) {
        (Scalar::Integer(v), CollectionIntegerEncoding::LegacyTwoByte) => {
            let short = i16::try_from(*v).map_err(|_| EncodeError::IntegerOutOfRange {
                attribute: path.to_owned(),
                tag,
                value: *v,
            })?;
            // declared length stays 4 even though only two bytes follow
            out.length(4).i16(short);
            Ok(())
        }
        _ => encode_value(out, path, tag, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(entries: &[(&str, AttributeValue)]) -> Collection {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    fn encode(name: &str, members: &Collection, integers: CollectionIntegerEncoding) -> Result<Vec<u8>> {
        let mut w = WireWriter::new();
        encode_collection(&mut w, name, members, integers)?;
        Ok(w.into_bytes())
    }

    #[test]
    fn single_keyword_member() {
        let members = collection(&[("media-source", "tray-2".into())]);
        let bytes = encode("media-col", &members, CollectionIntegerEncoding::FourByte).expect("encode");

        let mut expected = vec![0x34, 0x00, 0x09];
        expected.extend_from_slice(b"media-col");
        expected.extend_from_slice(&[0x00, 0x00]);
        expected.extend_from_slice(&[0x4A, 0x00, 0x00, 0x00, 0x0C]);
        expected.extend_from_slice(b"media-source");
        expected.extend_from_slice(&[0x44, 0x00, 0x00, 0x00, 0x06]);
        expected.extend_from_slice(b"tray-2");
        expected.extend_from_slice(&[0x37, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn empty_collection_is_begin_and_end_only() {
        let bytes = encode("media-col", &Collection::new(), CollectionIntegerEncoding::FourByte)
            .expect("encode");
        let mut expected = vec![0x34, 0x00, 0x09];
        expected.extend_from_slice(b"media-col");
        expected.extend_from_slice(&[0x00, 0x00, 0x37, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn integer_member_uses_full_four_bytes() {
        let members = collection(&[("x-dimension", 21_000.into())]);
        let bytes = encode("media-size", &members, CollectionIntegerEncoding::FourByte).expect("encode");

        // begin(1+2+10+2) + member-name(1+2+2+11) = 31
        let value = &bytes[31..31 + 9];
        assert_eq!(value, &[0x21, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x52, 0x08]);
        assert_eq!(&bytes[40..], &[0x37, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn legacy_mode_writes_two_byte_integer_under_length_four() {
        let members = collection(&[("x-dimension", 21_000.into())]);
        let bytes =
            encode("media-size", &members, CollectionIntegerEncoding::LegacyTwoByte).expect("encode");
        let value = &bytes[31..31 + 7];
        assert_eq!(value, &[0x21, 0x00, 0x00, 0x00, 0x04, 0x52, 0x08]);
        assert_eq!(bytes.len(), 31 + 7 + 5);
    }

    #[test]
    fn legacy_mode_rejects_values_beyond_i16() {
        let members = collection(&[("x-dimension", 70_000.into())]);
        let err = encode("media-size", &members, CollectionIntegerEncoding::LegacyTwoByte)
            .expect_err("out of range");
        match err {
            EncodeError::IntegerOutOfRange { attribute, value, .. } => {
                assert_eq!(attribute, "media-size.x-dimension");
                assert_eq!(value, 70_000);
            }
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn boolean_member_is_single_byte() {
        let members = collection(&[("x-duplex", true.into())]);
        let bytes = encode("c", &members, CollectionIntegerEncoding::FourByte).expect("encode");
        // begin(1+2+1+2) + member-name(1+2+2+8) = 19
        assert_eq!(&bytes[19..25], &[0x22, 0x00, 0x00, 0x00, 0x01, 0x01]);
    }

    #[test]
    fn nested_collection_opens_under_member_name() {
        let size = collection(&[("x-dimension", 21_000.into()), ("y-dimension", 29_700.into())]);
        let members = collection(&[
            ("media-size", AttributeValue::Collection(size)),
            ("media-source", "main".into()),
        ]);
        let bytes = encode("media-col", &members, CollectionIntegerEncoding::FourByte).expect("encode");

        let begins = bytes.iter().filter(|&&b| b == 0x34).count();
        let ends = bytes.iter().filter(|&&b| b == 0x37).count();
        assert_eq!((begins, ends), (2, 2));

        // outer begin is 14 bytes; the nested begin follows immediately
        let mut nested_begin = vec![0x34, 0x00, 0x0A];
        nested_begin.extend_from_slice(b"media-size");
        nested_begin.extend_from_slice(&[0x00, 0x00]);
        assert_eq!(&bytes[14..14 + nested_begin.len()], nested_begin.as_slice());

        // outer collection closes last
        assert_eq!(&bytes[bytes.len() - 5..], &[0x37, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn repeated_member_writes_one_name_then_each_value() {
        let members = collection(&[(
            "media-type-supported",
            AttributeValue::Repeated(vec![
                Scalar::Text("stationery".into()),
                Scalar::Text("photographic".into()),
            ]),
        )]);
        let bytes = encode("c", &members, CollectionIntegerEncoding::FourByte).expect("encode");

        let member_names = bytes.iter().filter(|&&b| b == 0x4A).count();
        assert_eq!(member_names, 1);

        // begin(6) + member-name(1+2+2+20) = 31
        let mut expected = vec![0x44, 0x00, 0x00, 0x00, 0x0A];
        expected.extend_from_slice(b"stationery");
        expected.extend_from_slice(&[0x44, 0x00, 0x00, 0x00, 0x0C]);
        expected.extend_from_slice(b"photographic");
        assert_eq!(&bytes[31..31 + expected.len()], expected.as_slice());
    }

    #[test]
    fn members_follow_insertion_order() {
        let members = collection(&[("zeta", "1".into()), ("alpha", "2".into())]);
        let bytes = encode("c", &members, CollectionIntegerEncoding::FourByte).expect("encode");
        let text = String::from_utf8_lossy(&bytes);
        let zeta = text.find("zeta").expect("zeta");
        let alpha = text.find("alpha").expect("alpha");
        assert!(zeta < alpha);
    }
}
