//! Well-known ASN.1 universal types and their identifier octets

use core::fmt;

/// ASN.1 types recognized by [`Node::typed_value`](crate::Node::typed_value)
///
/// Each variant maps to one fixed identifier octet, class and
/// constructed/primitive bits included. The mapping is a closed compile-time
/// table; tags outside it can still be navigated, just not type-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    Sequence,
    Set,
    PrintableString,
    Ia5String,
    UtcTime,
    Enumerated,
    Utf8String,
}

impl Tag {
    /// Identifier octet for this type
    pub const fn octet(self) -> u8 {
        match self {
            Tag::Boolean => 0x01,
            Tag::Integer => 0x02,
            Tag::BitString => 0x03,
            Tag::OctetString => 0x04,
            Tag::Null => 0x05,
            Tag::ObjectIdentifier => 0x06,
            Tag::Sequence => 0x70,
            Tag::Set => 0x71,
            Tag::PrintableString => 0x13,
            Tag::Ia5String => 0x16,
            Tag::UtcTime => 0x17,
            Tag::Enumerated => 0x0A,
            Tag::Utf8String => 0x0C,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Boolean => "BOOLEAN",
            Tag::Integer => "INTEGER",
            Tag::BitString => "BIT STRING",
            Tag::OctetString => "OCTET STRING",
            Tag::Null => "NULL",
            Tag::ObjectIdentifier => "OBJECT IDENTIFIER",
            Tag::Sequence => "SEQUENCE",
            Tag::Set => "SET",
            Tag::PrintableString => "PrintableString",
            Tag::Ia5String => "IA5String",
            Tag::UtcTime => "UTCTime",
            Tag::Enumerated => "ENUMERATED",
            Tag::Utf8String => "UTF8String",
        };
        write!(f, "{}", name)
    }
}
