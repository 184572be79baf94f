//! TLV node boundaries and navigation over a DER/BER buffer

use tracing::trace;

use crate::{Asn1Error, Asn1Result, Tag};

/// One TLV structure located inside a buffer
///
/// A node is three byte offsets: the identifier octet, the first content
/// octet and the last content octet (inclusive). Zero-length content puts
/// `content_end` one before `content_start`. Nodes hold no reference to the
/// buffer and are only meaningful against the buffer they were read from;
/// two reads from the same offset produce equal nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Offset of the identifier octet
    pub tag_offset: usize,
    /// Offset of the first content octet
    pub content_start: usize,
    /// Offset of the last content octet, inclusive
    pub content_end: usize,
}

/// First top-level TLV in the buffer
pub fn root(der: &[u8]) -> Asn1Result<Node> {
    Node::read_at(der, 0)
}

impl Node {
    /// Read the TLV whose identifier octet sits at `ix`
    ///
    /// Only the definite-length forms are supported. The short form carries
    /// the content length in the low 7 bits of the length octet; the long
    /// form gives a count of big-endian length octets that follow. The
    /// indefinite form (`0x80` alone) is rejected.
    pub fn read_at(der: &[u8], ix: usize) -> Asn1Result<Node> {
        let len = der.len();
        let len_octet = *der
            .get(ix + 1)
            .ok_or(Asn1Error::OutOfBounds { offset: ix + 1, len })?;

        let (content_start, content_len) = if len_octet & 0x80 == 0 {
            (ix + 2, len_octet as usize)
        } else {
            let prefix_len = (len_octet & 0x7F) as usize;
            if prefix_len == 0 || prefix_len > core::mem::size_of::<usize>() {
                trace!(ix, prefix_len, "rejecting unsupported length encoding");
                return Err(Asn1Error::UnsupportedLength { prefix_len });
            }
            let prefix = der
                .get(ix + 2..ix + 2 + prefix_len)
                .ok_or(Asn1Error::OutOfBounds { offset: ix + 2 + prefix_len, len })?;
            let mut content_len = 0usize;
            for &octet in prefix {
                content_len = content_len << 8 | octet as usize;
            }
            (ix + 2 + prefix_len, content_len)
        };

        // content_end is inclusive, so zero-length content lands one octet
        // before content_start.
        let content_end = match content_start.checked_add(content_len) {
            Some(past_end) => past_end - 1,
            None => {
                return Err(Asn1Error::UnsupportedLength {
                    prefix_len: (len_octet & 0x7F) as usize,
                })
            }
        };
        if content_len > 0 && content_end >= len {
            return Err(Asn1Error::OutOfBounds { offset: content_end, len });
        }

        Ok(Node {
            tag_offset: ix,
            content_start,
            content_end,
        })
    }

    /// Identifier octet of this node
    pub fn identifier(&self, der: &[u8]) -> Asn1Result<u8> {
        der.get(self.tag_offset).copied().ok_or(Asn1Error::OutOfBounds {
            offset: self.tag_offset,
            len: der.len(),
        })
    }

    /// TLV following this node's content span
    ///
    /// The next header is read from `content_end + 1`. For direct children
    /// of a constructed parent this is exactly the sibling boundary; the
    /// step past the last child reads whatever follows the parent's content,
    /// which for the outermost node means running past the buffer.
    pub fn next_sibling(&self, der: &[u8]) -> Asn1Result<Node> {
        Node::read_at(der, self.content_end + 1)
    }

    /// First TLV nested inside this constructed node
    ///
    /// Fails with [`Asn1Error::NotConstructed`] when the identifier octet
    /// has the constructed bit (`0x20`) clear, e.g. for an INTEGER.
    pub fn first_child(&self, der: &[u8]) -> Asn1Result<Node> {
        let id = self.identifier(der)?;
        if id & 0x20 != 0x20 {
            return Err(Asn1Error::NotConstructed { found: id });
        }
        Node::read_at(der, self.content_start)
    }

    /// Iterator over the direct children of this constructed node
    ///
    /// Sugar over the `first_child` / `next_sibling` walk. Yields
    /// `Asn1Result<Node>` so a malformed child surfaces mid-iteration, and
    /// stops once the next child would start past this node's content.
    pub fn children<'a>(&self, der: &'a [u8]) -> Asn1Result<Children<'a>> {
        let id = self.identifier(der)?;
        if id & 0x20 != 0x20 {
            return Err(Asn1Error::NotConstructed { found: id });
        }
        Ok(Children {
            der,
            next: self.content_start,
            end: self.content_end,
            failed: false,
        })
    }

    /// True when either node's content span strictly nests inside the other's
    ///
    /// Pure containment predicate over the offset triples, used to validate
    /// structural assumptions ("is this OID inside that SEQUENCE") without
    /// re-walking the tree.
    pub fn is_child_of(&self, other: &Node) -> bool {
        (self.content_start <= other.tag_offset && other.content_end < self.content_end)
            || (other.content_start <= self.tag_offset && self.content_end < other.content_end)
    }

    /// Content octets, empty for zero-length nodes
    ///
    /// `der` must be the buffer this node was read from.
    pub fn value<'a>(&self, der: &'a [u8]) -> &'a [u8] {
        if self.content_end < self.content_start {
            return &[];
        }
        &der[self.content_start..=self.content_end]
    }

    /// Content octets after verifying the identifier octet matches `tag`
    pub fn typed_value<'a>(&self, der: &'a [u8], tag: Tag) -> Asn1Result<&'a [u8]> {
        let found = self.identifier(der)?;
        if found != tag.octet() {
            return Err(Asn1Error::TypeMismatch {
                expected: tag.octet(),
                found,
            });
        }
        Ok(self.value(der))
    }

    /// Complete tag+length+value encoding of this node
    ///
    /// Useful for re-embedding a sub-structure verbatim.
    pub fn full_span<'a>(&self, der: &'a [u8]) -> &'a [u8] {
        &der[self.tag_offset..=self.content_end]
    }
}

/// Iterator returned by [`Node::children`]
pub struct Children<'a> {
    der: &'a [u8],
    next: usize,
    end: usize,
    failed: bool,
}

impl Iterator for Children<'_> {
    type Item = Asn1Result<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next > self.end {
            return None;
        }
        match Node::read_at(self.der, self.next) {
            Ok(node) => {
                self.next = node.content_end + 1;
                Some(Ok(node))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
