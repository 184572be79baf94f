//! Error types for TLV navigation and value conversion

use core::fmt;

/// Errors that can occur while navigating or converting DER/BER structures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asn1Error {
    /// A computed offset would read past the end of the buffer
    OutOfBounds { offset: usize, len: usize },
    /// Indefinite-length form, or a length prefix too wide to represent
    UnsupportedLength { prefix_len: usize },
    /// `first_child` called on a node whose identifier octet is primitive
    NotConstructed { found: u8 },
    /// Node's identifier octet does not match the expected type
    TypeMismatch { expected: u8, found: u8 },
    /// BIT STRING unused-bits octet is nonzero
    UnsupportedBitString { unused_bits: u8 },
    /// Empty byte sequence passed to a conversion helper
    InvalidInput,
}

impl fmt::Display for Asn1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Asn1Error::*;
        match self {
            OutOfBounds { offset, len } => {
                write!(f, "Offset {} is past the end of the buffer (length {})", offset, len)
            }
            UnsupportedLength { prefix_len: 0 } => {
                write!(f, "Indefinite-length encodings are not supported")
            }
            UnsupportedLength { prefix_len } => {
                write!(f, "Unsupported length encoding: {} length octets", prefix_len)
            }
            NotConstructed { found } => {
                write!(f, "Can only open constructed types, found type {:#04x}", found)
            }
            TypeMismatch { expected, found } => {
                write!(f, "Expected type {:#04x}, found {:#04x}", expected, found)
            }
            UnsupportedBitString { unused_bits } => {
                write!(
                    f,
                    "Only zero-padded bit strings are supported, unused-bits octet was {:#04x}",
                    unused_bits
                )
            }
            InvalidInput => write!(f, "Cannot convert an empty byte sequence"),
        }
    }
}

impl std::error::Error for Asn1Error {}

/// Result type for TLV operations
pub type Asn1Result<T> = Result<T, Asn1Error>;
