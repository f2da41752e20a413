// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// IPP tag space (RFC 8010 SS3.5) and the default attribute-name -> tag table.
//
// Delimiter tags (0x01..=0x0F) mark attribute groups and the end of the
// attribute section.  Value tags (0x10..=0x4A) describe the wire type of a
// single attribute value.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A one-byte IPP tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum AttributeTag {
    // -- Delimiter tags (RFC 8010 SS3.5.1) --
    OperationAttributes = 0x01,
    JobAttributes = 0x02,
    EndOfAttributes = 0x03,
    PrinterAttributes = 0x04,
    UnsupportedAttributes = 0x05,

    // -- Out-of-band value tags --
    Unsupported = 0x10,
    Default = 0x11,
    Unknown = 0x12,
    NoValue = 0x13,
    NotSettable = 0x15,
    DeleteAttribute = 0x16,
    AdminDefine = 0x17,

    // -- Integer family --
    Integer = 0x21,
    Boolean = 0x22,
    Enum = 0x23,

    // -- Octet-string family --
    OctetString = 0x30,
    DateTime = 0x31,
    Resolution = 0x32,
    RangeOfInteger = 0x33,
    BeginCollection = 0x34,
    TextWithLanguage = 0x35,
    NameWithLanguage = 0x36,
    EndCollection = 0x37,

    // -- Character-string family --
    #[serde(alias = "text-without-language")]
    Text = 0x41,
    #[serde(alias = "name-without-language")]
    Name = 0x42,
    Keyword = 0x44,
    Uri = 0x45,
    UriScheme = 0x46,
    Charset = 0x47,
    NaturalLanguage = 0x48,
    MimeMediaType = 0x49,
    MemberAttrName = 0x4A,
}

impl AttributeTag {
    /// The wire byte for this tag.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Group delimiter or end-of-attributes marker.
    pub fn is_delimiter(self) -> bool {
        self.code() <= 0x0F
    }

    /// Out-of-band tags (unsupported, unknown, no-value, ...).
    pub fn is_out_of_band(self) -> bool {
        (0x10..=0x1F).contains(&self.code())
    }

    /// Tags that open or close a collection and never carry a plain value.
    pub fn is_collection_boundary(self) -> bool {
        matches!(self, Self::BeginCollection | Self::EndCollection)
    }

    /// Tags whose values go on the wire as a 4-byte big-endian integer.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer | Self::Enum)
    }

    /// Tags whose value has a fixed binary width (boolean, date-time,
    /// resolution, rangeOfInteger) and so never carries free text.
    pub fn is_fixed_width(self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::DateTime | Self::Resolution | Self::RangeOfInteger
        )
    }

    /// Look a tag up by its wire byte.
    pub fn from_code(code: u8) -> Option<Self> {
        ALL_TAGS.iter().copied().find(|t| t.code() == code)
    }

    /// Keyword used in logs, errors and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OperationAttributes => "operation-attributes",
            Self::JobAttributes => "job-attributes",
            Self::EndOfAttributes => "end-of-attributes",
            Self::PrinterAttributes => "printer-attributes",
            Self::UnsupportedAttributes => "unsupported-attributes",
            Self::Unsupported => "unsupported",
            Self::Default => "default",
            Self::Unknown => "unknown",
            Self::NoValue => "no-value",
            Self::NotSettable => "not-settable",
            Self::DeleteAttribute => "delete-attribute",
            Self::AdminDefine => "admin-define",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::OctetString => "octet-string",
            Self::DateTime => "date-time",
            Self::Resolution => "resolution",
            Self::RangeOfInteger => "range-of-integer",
            Self::BeginCollection => "begin-collection",
            Self::TextWithLanguage => "text-with-language",
            Self::NameWithLanguage => "name-with-language",
            Self::EndCollection => "end-collection",
            Self::Text => "text",
            Self::Name => "name",
            Self::Keyword => "keyword",
            Self::Uri => "uri",
            Self::UriScheme => "uri-scheme",
            Self::Charset => "charset",
            Self::NaturalLanguage => "natural-language",
            Self::MimeMediaType => "mime-media-type",
            Self::MemberAttrName => "member-attr-name",
        }
    }
}

impl fmt::Display for AttributeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x})", self.as_str(), self.code())
    }
}

const ALL_TAGS: &[AttributeTag] = &[
    AttributeTag::OperationAttributes,
    AttributeTag::JobAttributes,
    AttributeTag::EndOfAttributes,
    AttributeTag::PrinterAttributes,
    AttributeTag::UnsupportedAttributes,
    AttributeTag::Unsupported,
    AttributeTag::Default,
    AttributeTag::Unknown,
    AttributeTag::NoValue,
    AttributeTag::NotSettable,
    AttributeTag::DeleteAttribute,
    AttributeTag::AdminDefine,
    AttributeTag::Integer,
    AttributeTag::Boolean,
    AttributeTag::Enum,
    AttributeTag::OctetString,
    AttributeTag::DateTime,
    AttributeTag::Resolution,
    AttributeTag::RangeOfInteger,
    AttributeTag::BeginCollection,
    AttributeTag::TextWithLanguage,
    AttributeTag::NameWithLanguage,
    AttributeTag::EndCollection,
    AttributeTag::Text,
    AttributeTag::Name,
    AttributeTag::Keyword,
    AttributeTag::Uri,
    AttributeTag::UriScheme,
    AttributeTag::Charset,
    AttributeTag::NaturalLanguage,
    AttributeTag::MimeMediaType,
    AttributeTag::MemberAttrName,
];

// ---------------------------------------------------------------------------
// Attribute name -> default tag
// ---------------------------------------------------------------------------

/// Default tags for the attributes a client commonly sends
/// (RFC 8011 SS4-5, PWG 5100.3/5100.7, CUPS extensions).
const STANDARD_ENTRIES: &[(&str, AttributeTag)] = &[
    // Operation attributes
    ("attributes-charset", AttributeTag::Charset),
    ("attributes-natural-language", AttributeTag::NaturalLanguage),
    ("printer-uri", AttributeTag::Uri),
    ("job-uri", AttributeTag::Uri),
    ("job-id", AttributeTag::Integer),
    ("requesting-user-name", AttributeTag::Name),
    ("job-name", AttributeTag::Name),
    ("document-name", AttributeTag::Name),
    ("document-format", AttributeTag::MimeMediaType),
    ("document-number", AttributeTag::Integer),
    ("document-uri", AttributeTag::Uri),
    ("compression", AttributeTag::Keyword),
    ("ipp-attribute-fidelity", AttributeTag::Boolean),
    ("last-document", AttributeTag::Boolean),
    ("requested-attributes", AttributeTag::Keyword),
    ("which-jobs", AttributeTag::Keyword),
    ("my-jobs", AttributeTag::Boolean),
    ("limit", AttributeTag::Integer),
    ("purge-jobs", AttributeTag::Boolean),
    ("message", AttributeTag::Text),
    ("first-index", AttributeTag::Integer),
    // Job template attributes
    ("copies", AttributeTag::Integer),
    ("finishings", AttributeTag::Enum),
    ("job-hold-until", AttributeTag::Keyword),
    ("job-priority", AttributeTag::Integer),
    ("job-sheets", AttributeTag::Keyword),
    ("media", AttributeTag::Keyword),
    ("media-col", AttributeTag::BeginCollection),
    ("media-source", AttributeTag::Keyword),
    ("media-type", AttributeTag::Keyword),
    ("multiple-document-handling", AttributeTag::Keyword),
    ("number-up", AttributeTag::Integer),
    ("orientation-requested", AttributeTag::Enum),
    ("output-bin", AttributeTag::Keyword),
    ("page-ranges", AttributeTag::RangeOfInteger),
    ("print-color-mode", AttributeTag::Keyword),
    ("print-quality", AttributeTag::Enum),
    ("print-scaling", AttributeTag::Keyword),
    ("printer-resolution", AttributeTag::Resolution),
    ("sides", AttributeTag::Keyword),
    // Job description / status
    ("job-state", AttributeTag::Enum),
    ("job-state-reasons", AttributeTag::Keyword),
    ("job-state-message", AttributeTag::Text),
    ("job-printer-state-message", AttributeTag::Text),
    // Printer description (CUPS-Add-Modify-Printer and friends)
    ("device-uri", AttributeTag::Uri),
    ("member-uris", AttributeTag::Uri),
    ("operations-supported", AttributeTag::Enum),
    ("ppd-name", AttributeTag::Name),
    ("printer-error-policy", AttributeTag::Name),
    ("printer-info", AttributeTag::Text),
    ("printer-is-accepting-jobs", AttributeTag::Boolean),
    ("printer-is-shared", AttributeTag::Boolean),
    ("printer-location", AttributeTag::Text),
    ("printer-make-and-model", AttributeTag::Text),
    ("printer-op-policy", AttributeTag::Name),
    ("printer-state", AttributeTag::Enum),
    ("printer-state-message", AttributeTag::Text),
    ("printer-state-reasons", AttributeTag::Keyword),
    ("printer-up-time", AttributeTag::Integer),
    ("port-monitor", AttributeTag::Name),
];

/// Read-only lookup from attribute name to its default [`AttributeTag`].
///
/// Consulted only when an attribute carries no explicit tag.  The standard
/// table is built once and shared; custom tables are plain values.
#[derive(Debug, Clone, Default)]
pub struct AttributeTagMap {
    entries: HashMap<String, AttributeTag>,
}

static STANDARD: LazyLock<AttributeTagMap> =
    LazyLock::new(|| STANDARD_ENTRIES.iter().map(|&(n, t)| (n, t)).collect());

impl AttributeTagMap {
    /// An empty map.  Every attribute must then carry an explicit tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared standard table.
    pub fn standard() -> &'static AttributeTagMap {
        &STANDARD
    }

    pub fn get(&self, name: &str) -> Option<AttributeTag> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, tag: AttributeTag) -> Option<AttributeTag> {
        self.entries.insert(name.into(), tag)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, tag: AttributeTag) -> Self {
        self.insert(name, tag);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, AttributeTag)> for AttributeTagMap {
    fn from_iter<I: IntoIterator<Item = (S, AttributeTag)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(n, t)| (n.into(), t)).collect(),
        }
    }
}
