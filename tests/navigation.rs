//! Cross-module walk tests over certificate-shaped DER buffers

use asn1_tlv::{bitstring_to_bytes, bytes_to_uint, root, Asn1Result, Node, Tag};
use num_bigint::BigUint;
use quickcheck_macros::quickcheck;

// SEQUENCE {
//   SEQUENCE { OBJECT IDENTIFIER 2a8648, NULL }
//   BIT STRING 00 01020304
//   INTEGER 0100
// }
// The same shape an AlgorithmIdentifier + key material pair takes inside a
// SubjectPublicKeyInfo.
const SPKI_LIKE: &str = "30 14 30 07 06 03 2a 86 48 05 00 03 05 00 01 02 03 04 02 02 01 00";

fn spki_like() -> Vec<u8> {
    hex::decode(SPKI_LIKE.replace(' ', "")).unwrap()
}

#[test]
fn walks_nested_structure_to_the_key_material() {
    let der = spki_like();

    let outer = root(&der).unwrap();
    assert_eq!(outer.full_span(&der), &der[..]);

    let alg = outer.first_child(&der).unwrap();
    let oid = alg.first_child(&der).unwrap();
    assert_eq!(
        oid.typed_value(&der, Tag::ObjectIdentifier).unwrap(),
        &[0x2A, 0x86, 0x48]
    );

    let null = oid.next_sibling(&der).unwrap();
    assert!(null.typed_value(&der, Tag::Null).unwrap().is_empty());

    // Stepping past the last child of `alg` reads the TLV that follows the
    // parent's content, which is the BIT STRING.
    let bits = null.next_sibling(&der).unwrap();
    let key_bytes = bitstring_to_bytes(bits.typed_value(&der, Tag::BitString).unwrap()).unwrap();
    assert_eq!(key_bytes, &[0x01, 0x02, 0x03, 0x04]);

    let exponent = bits.next_sibling(&der).unwrap();
    let value = bytes_to_uint(exponent.typed_value(&der, Tag::Integer).unwrap()).unwrap();
    assert_eq!(value, BigUint::from(256u32));
}

#[test]
fn sibling_of_a_constructed_node() {
    let der = spki_like();
    let outer = root(&der).unwrap();
    let alg = outer.first_child(&der).unwrap();
    let bits = alg.next_sibling(&der).unwrap();
    assert_eq!(bits.identifier(&der).unwrap(), Tag::BitString.octet());
}

#[test]
fn containment_across_nesting_levels() {
    let der = spki_like();
    let outer = root(&der).unwrap();
    let alg = outer.first_child(&der).unwrap();
    let oid = alg.first_child(&der).unwrap();
    let bits = alg.next_sibling(&der).unwrap();

    assert!(oid.is_child_of(&alg));
    assert!(oid.is_child_of(&outer));
    assert!(bits.is_child_of(&outer));
    assert!(!bits.is_child_of(&alg));
    assert!(!oid.is_child_of(&bits));
}

#[quickcheck]
fn short_form_boundaries(len_octet: u8) -> bool {
    let content_len = (len_octet % 0x80) as usize;
    let mut der = vec![0x04, content_len as u8];
    der.extend(std::iter::repeat(0xA5).take(content_len));
    let node = root(&der).unwrap();
    node.tag_offset == 0 && node.content_start == 2 && node.content_end + 1 == 2 + content_len
}

#[quickcheck]
fn long_form_length_roundtrips(content_len: u32) -> bool {
    let content_len = (content_len % 70_000) as usize;
    let be = (content_len as u32).to_be_bytes();
    let start = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
    let prefix = &be[start..];

    let mut der = vec![0x04, 0x80 | prefix.len() as u8];
    der.extend_from_slice(prefix);
    der.extend(std::iter::repeat(0u8).take(content_len));

    let node = root(&der).unwrap();
    node.content_end + 1 - node.content_start == content_len
}

#[quickcheck]
fn child_walk_visits_every_element(count: u8) -> bool {
    let count = (count % 32) as usize;
    let mut content = Vec::new();
    for _ in 0..count {
        content.extend_from_slice(&[0x05, 0x00]);
    }
    let mut der = vec![0x30, content.len() as u8];
    der.extend_from_slice(&content);

    let seq = root(&der).unwrap();
    let visited: Vec<Node> = seq
        .children(&der)
        .unwrap()
        .collect::<Asn1Result<_>>()
        .unwrap();
    visited.len() == count
}

#[quickcheck]
fn top_level_walk_runs_past_the_buffer(count: u8) -> bool {
    let count = (count % 32) as usize + 1;
    let mut der = Vec::new();
    for _ in 0..count {
        der.extend_from_slice(&[0x05, 0x00]);
    }

    let mut visited = 1;
    let mut node = root(&der).unwrap();
    while let Ok(next) = node.next_sibling(&der) {
        visited += 1;
        node = next;
    }
    visited == count
}
