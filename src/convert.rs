//! Value conversion helpers for BIT STRING and INTEGER content

use num_bigint::BigUint;

use crate::{Asn1Error, Asn1Result};

/// Strip the unused-bits octet from BIT STRING content
///
/// The first content octet of an ASN.1 BIT STRING counts the unused trailing
/// bits in the last octet. Only the common zero-padding case is supported;
/// a nonzero count fails with [`Asn1Error::UnsupportedBitString`].
pub fn bitstring_to_bytes(bitstr: &[u8]) -> Asn1Result<&[u8]> {
    match bitstr.first() {
        None => Err(Asn1Error::InvalidInput),
        Some(&0x00) => Ok(&bitstr[1..]),
        Some(&unused_bits) => Err(Asn1Error::UnsupportedBitString { unused_bits }),
    }
}

/// Big-endian unsigned integer from raw content octets
///
/// The magnitude is whatever the byte count implies; there is no fixed bit
/// width. Empty input fails with [`Asn1Error::InvalidInput`].
pub fn bytes_to_uint(bytes: &[u8]) -> Asn1Result<BigUint> {
    if bytes.is_empty() {
        return Err(Asn1Error::InvalidInput);
    }
    Ok(BigUint::from_bytes_be(bytes))
}
