// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Presswire request encoder.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tags::AttributeTag;

/// IPP protocol version, `major.minor`.
///
/// Serialised as a two-element array, e.g. `[2, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u8, u8)", into = "(u8, u8)")]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub const V1_0: Version = Version::new(1, 0);
    pub const V1_1: Version = Version::new(1, 1);
    pub const V2_0: Version = Version::new(2, 0);

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::V2_0
    }
}

impl From<(u8, u8)> for Version {
    fn from((major, minor): (u8, u8)) -> Self {
        Self { major, minor }
    }
}

impl From<Version> for (u8, u8) {
    fn from(v: Version) -> Self {
        (v.major, v.minor)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// IPP operations (RFC 8011 SS4 and the CUPS vendor range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u16)]
pub enum Operation {
    PrintJob = 0x0002,
    PrintUri = 0x0003,
    ValidateJob = 0x0004,
    CreateJob = 0x0005,
    SendDocument = 0x0006,
    SendUri = 0x0007,
    CancelJob = 0x0008,
    GetJobAttributes = 0x0009,
    GetJobs = 0x000A,
    GetPrinterAttributes = 0x000B,
    HoldJob = 0x000C,
    ReleaseJob = 0x000D,
    RestartJob = 0x000E,
    PausePrinter = 0x0010,
    ResumePrinter = 0x0011,
    PurgeJobs = 0x0012,
    CupsGetDefault = 0x4001,
    CupsGetPrinters = 0x4002,
    CupsAddModifyPrinter = 0x4003,
    CupsDeletePrinter = 0x4004,
    CupsGetClasses = 0x4005,
    CupsAddModifyClass = 0x4006,
    CupsDeleteClass = 0x4007,
    CupsAcceptJobs = 0x4008,
    CupsRejectJobs = 0x4009,
    CupsSetDefault = 0x400A,
    CupsGetDevices = 0x400B,
    CupsGetPpds = 0x400C,
    CupsMoveJob = 0x400D,
    CupsAuthenticateJob = 0x400E,
    CupsGetPpd = 0x400F,
    CupsGetDocument = 0x4027,
}

impl Operation {
    /// The 16-bit operation-id written into the message header.
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// A single typed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Boolean(bool),
    /// Held wide; range-checked against the wire width at encode time.
    Integer(i64),
    Text(String),
}

impl Scalar {
    /// Short kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }
}

/// Nested member map of a collection value.  Iteration order is insertion
/// order and is the order members go on the wire.
pub type Collection = IndexMap<String, AttributeValue>;

/// The value side of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Scalar(Scalar),
    /// A `1setOf` value.  Elements are encoded in sequence order.
    Repeated(Vec<Scalar>),
    Collection(Collection),
}

impl AttributeValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(s) => s.kind(),
            Self::Repeated(_) => "repeated",
            Self::Collection(_) => "collection",
        }
    }
}

impl From<Scalar> for AttributeValue {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Scalar(Scalar::Boolean(v))
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        Self::Scalar(Scalar::Integer(v.into()))
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Scalar(Scalar::Integer(v))
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::Scalar(Scalar::Text(v.to_owned()))
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        Self::Scalar(Scalar::Text(v))
    }
}

impl From<Vec<Scalar>> for AttributeValue {
    fn from(v: Vec<Scalar>) -> Self {
        Self::Repeated(v)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(v: Vec<&str>) -> Self {
        Self::Repeated(v.into_iter().map(|s| Scalar::Text(s.to_owned())).collect())
    }
}

impl From<Collection> for AttributeValue {
    fn from(v: Collection) -> Self {
        Self::Collection(v)
    }
}

/// An attribute value plus an optional explicit wire tag.
///
/// When `tag` is `None` the encoder resolves the tag from the
/// [`AttributeTagMap`](crate::tags::AttributeTagMap) by attribute name.
///
/// JSON form: either a bare value, or `{"value-tag": "<tag>", "value": <value>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AttributeRepr", into = "AttributeRepr")]
pub struct Attribute {
    pub tag: Option<AttributeTag>,
    pub value: AttributeValue,
}

impl Attribute {
    pub fn new(value: impl Into<AttributeValue>) -> Self {
        Self {
            tag: None,
            value: value.into(),
        }
    }

    pub fn tagged(tag: AttributeTag, value: impl Into<AttributeValue>) -> Self {
        Self {
            tag: Some(tag),
            value: value.into(),
        }
    }
}

macro_rules! attribute_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Attribute {
                fn from(v: $t) -> Self {
                    Self::new(v)
                }
            }
        )*
    };
}

attribute_from!(
    AttributeValue,
    Scalar,
    bool,
    i32,
    i64,
    &str,
    String,
    Vec<Scalar>,
    Vec<&str>,
    Collection,
);

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AttributeRepr {
    Tagged {
        #[serde(rename = "value-tag")]
        tag: AttributeTag,
        value: AttributeValue,
    },
    Plain(AttributeValue),
}

impl From<AttributeRepr> for Attribute {
    fn from(repr: AttributeRepr) -> Self {
        match repr {
            AttributeRepr::Tagged { tag, value } => Self {
                tag: Some(tag),
                value,
            },
            AttributeRepr::Plain(value) => Self { tag: None, value },
        }
    }
}

impl From<Attribute> for AttributeRepr {
    fn from(attr: Attribute) -> Self {
        match attr.tag {
            Some(tag) => Self::Tagged {
                tag,
                value: attr.value,
            },
            None => Self::Plain(attr.value),
        }
    }
}

/// Ordered name -> attribute map for one attribute group.
pub type AttributeGroup = IndexMap<String, Attribute>;

/// Which top-level group an attribute belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    Operation,
    Job,
    Printer,
}

impl GroupKind {
    /// Delimiter tag that introduces this group on the wire.
    pub fn delimiter(self) -> AttributeTag {
        match self {
            Self::Operation => AttributeTag::OperationAttributes,
            Self::Job => AttributeTag::JobAttributes,
            Self::Printer => AttributeTag::PrinterAttributes,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Operation => "operation",
            Self::Job => "job",
            Self::Printer => "printer",
        }
    }
}

/// A complete IPP request, ready to encode.
///
/// The field names in JSON follow the configuration keys accepted by the
/// encoder (`operation-attributes-tag`, `job-attributes-tag`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Falls back to the encoder's configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    pub operation: Operation,
    /// Drawn from `[10000, 99999]` when absent.
    #[serde(rename = "request-id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i32>,
    #[serde(rename = "operation-attributes-tag", default)]
    pub operation_attributes: AttributeGroup,
    #[serde(rename = "job-attributes-tag", default, skip_serializing_if = "Option::is_none")]
    pub job_attributes: Option<AttributeGroup>,
    #[serde(rename = "printer-attributes-tag", default, skip_serializing_if = "Option::is_none")]
    pub printer_attributes: Option<AttributeGroup>,
    /// Document body appended verbatim after end-of-attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u8>>,
}

impl Request {
    pub fn new(operation: Operation) -> Self {
        Self {
            version: None,
            operation,
            request_id: None,
            operation_attributes: AttributeGroup::new(),
            job_attributes: None,
            printer_attributes: None,
            data: None,
        }
    }

    /// A request pre-populated with the operation attributes every IPP
    /// request starts with (RFC 8011 SS4.1.4): charset, natural language and
    /// target printer URI, in that order.
    pub fn standard(operation: Operation, printer_uri: &str) -> Self {
        Self::new(operation)
            .operation_attribute("attributes-charset", "utf-8")
            .operation_attribute("attributes-natural-language", "en")
            .operation_attribute("printer-uri", printer_uri)
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    pub fn request_id(mut self, id: i32) -> Self {
        self.request_id = Some(id);
        self
    }

    pub fn operation_attribute(mut self, name: &str, attr: impl Into<Attribute>) -> Self {
        self.operation_attributes.insert(name.to_owned(), attr.into());
        self
    }

    /// Adds to the job group, creating it if needed.
    pub fn job_attribute(mut self, name: &str, attr: impl Into<Attribute>) -> Self {
        self.job_attributes
            .get_or_insert_with(AttributeGroup::new)
            .insert(name.to_owned(), attr.into());
        self
    }

    /// Adds to the printer group, creating it if needed.
    pub fn printer_attribute(mut self, name: &str, attr: impl Into<Attribute>) -> Self {
        self.printer_attributes
            .get_or_insert_with(AttributeGroup::new)
            .insert(name.to_owned(), attr.into());
        self
    }

    pub fn document(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Parse a request from its JSON configuration form.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
