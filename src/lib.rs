//! ASN.1 TLV Navigator
//!
//! Structural decoder for definite-length DER/BER encodings as found in
//! X.509 certificates and PKCS containers. The crate knows nothing about
//! certificate semantics: it computes TLV (Type-Length-Value) boundaries
//! over an immutable byte buffer and hands back offset triples and value
//! slices for higher-level field-extraction logic to interpret.
//!
//! Three operations are all that is needed to browse a structure:
//! [`root`], [`Node::next_sibling`] and [`Node::first_child`]. Typed
//! accessors verify the identifier octet before handing out content, and
//! two conversion helpers cover the BIT STRING and INTEGER content forms
//! that certificate keys are stored in.
//!
//! Navigation never copies or parses content. Every step computes offsets
//! only, so walking a structure costs O(1) per node visited regardless of
//! how large the value payloads are.

pub mod convert;
pub mod error;
pub mod node;
pub mod tag;

pub use convert::{bitstring_to_bytes, bytes_to_uint};
pub use error::{Asn1Error, Asn1Result};
pub use node::{root, Children, Node};
pub use tag::Tag;
