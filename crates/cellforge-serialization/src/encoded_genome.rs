// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Zero-copy structural view over encoded genome bytes.
//!
//! Both the decoder and the analyzer walk genomes through [`EncodedGenome`], so node framing
//! and offset bookkeeping exist in exactly one place.

use crate::error::{DecodeError, DecodeResult};
use crate::format::{discard_unknown, CURRENT_GENOME_FORMAT_VERSION, NODE_FRAME_BYTE_COUNT};
use crate::genome_byte_reader::GenomeByteReader;
use crate::implementations::{decode_node, read_embedded_genome_ref, EmbeddedGenomeRef};
use crate::GenomeSerializable;
use cellforge_genome::{CellGenomeDescription, CellType, GenomeHeaderDescription};

//region Encoded Genome

/// Parsed prelude of an encoded genome: format version, header section and node count.
///
/// Nodes are only read when iterated through [`Self::nodes`].
#[derive(Debug, Clone)]
pub struct EncodedGenome<'a> {
    bytes: &'a [u8],
    header: GenomeByteReader<'a>,
    node_count: usize,
    nodes: GenomeByteReader<'a>,
}

impl<'a> EncodedGenome<'a> {
    /// Reads the prelude. An empty buffer is [`DecodeError::Truncated`].
    pub fn parse(bytes: &'a [u8]) -> DecodeResult<Self> {
        let mut reader = GenomeByteReader::new(bytes);
        let header = read_header_section(&mut reader)?;
        let node_count = reader.read_u32("node count")? as usize;
        Ok(Self {
            bytes,
            header,
            node_count,
            nodes: reader,
        })
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Decodes the header section. Unknown trailing header fields are skipped.
    pub fn header(&self) -> DecodeResult<GenomeHeaderDescription> {
        decode_header_fields(self.header.clone())
    }

    /// Node count as written in the prelude.
    pub fn declared_node_count(&self) -> usize {
        self.node_count
    }

    /// Byte offset of the first node, which is also the end of the prelude.
    pub fn nodes_offset(&self) -> usize {
        self.nodes.absolute_position()
    }

    /// Upper bound on how many nodes the remaining bytes can possibly frame. Used to cap
    /// allocations driven by a corrupt node count.
    pub fn node_capacity_hint(&self) -> usize {
        self.node_count
            .min(self.nodes.remaining() / NODE_FRAME_BYTE_COUNT)
    }

    pub fn nodes(&self) -> EncodedNodes<'a> {
        EncodedNodes {
            reader: self.nodes.clone(),
            next_index: 0,
            node_count: self.node_count,
            failed: false,
        }
    }
}

/// Decodes only the version byte and the header section of `bytes`.
pub fn decode_header(bytes: &[u8]) -> DecodeResult<GenomeHeaderDescription> {
    let mut reader = GenomeByteReader::new(bytes);
    decode_header_fields(read_header_section(&mut reader)?)
}

fn read_header_section<'a>(
    reader: &mut GenomeByteReader<'a>,
) -> DecodeResult<GenomeByteReader<'a>> {
    let version = reader.read_u8("format version")?;
    if version != CURRENT_GENOME_FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: version,
            supported: CURRENT_GENOME_FORMAT_VERSION,
        });
    }
    reader.read_section("header")
}

fn decode_header_fields(mut reader: GenomeByteReader<'_>) -> DecodeResult<GenomeHeaderDescription> {
    let header = GenomeHeaderDescription::deserialize_from(&mut reader)?;
    discard_unknown(&mut reader, "header");
    Ok(header)
}

//endregion

//region Nodes

/// Iterator over the framed top-level nodes. Stops after the first error.
#[derive(Debug, Clone)]
pub struct EncodedNodes<'a> {
    reader: GenomeByteReader<'a>,
    next_index: usize,
    node_count: usize,
    failed: bool,
}

impl<'a> Iterator for EncodedNodes<'a> {
    type Item = DecodeResult<EncodedNode<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_index >= self.node_count {
            return None;
        }
        let result = EncodedNode::read_from(&mut self.reader, self.next_index);
        match &result {
            Ok(_) => self.next_index += 1,
            Err(_) => self.failed = true,
        }
        Some(result)
    }
}

/// One framed node, borrowed from the genome buffer.
#[derive(Debug, Clone)]
pub struct EncodedNode<'a> {
    index: usize,
    offset: usize,
    cell_type_tag: u8,
    body: GenomeByteReader<'a>,
}

impl<'a> EncodedNode<'a> {
    /// Reads the `[u8 tag][u32 length]` frame and bounds the node body. A length beyond the
    /// buffer is [`DecodeError::Truncated`].
    pub(crate) fn read_from(reader: &mut GenomeByteReader<'a>, index: usize) -> DecodeResult<Self> {
        let offset = reader.absolute_position();
        let cell_type_tag = reader.read_u8("cell type")?;
        let body = reader.read_section("node")?;
        Ok(Self {
            index,
            offset,
            cell_type_tag,
            body,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Offset of the node's first byte (its cell type tag).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset one past the node's last byte.
    pub fn end_offset(&self) -> usize {
        self.body.absolute_end()
    }

    pub fn cell_type_tag(&self) -> u8 {
        self.cell_type_tag
    }

    /// `None` if the tag was written by a newer encoder.
    pub fn cell_type(&self) -> Option<CellType> {
        CellType::try_from(self.cell_type_tag).ok()
    }

    pub(crate) fn body(&self) -> GenomeByteReader<'a> {
        self.body.clone()
    }

    /// Literal embedded genome bytes, borrowed from the genome buffer.
    ///
    /// `None` for the self-copy sentinel and for cell types without a genome slot. The
    /// embedded bytes themselves are not validated.
    pub fn embedded_genome(&self) -> DecodeResult<Option<&'a [u8]>> {
        let Some(cell_type) = self.cell_type() else {
            return Ok(None);
        };
        if !cell_type.carries_genome() {
            return Ok(None);
        }
        let mut body = self.body();
        body.read_section("node common block")?;
        let mut payload = body.read_section("node payload")?;
        Ok(match read_embedded_genome_ref(cell_type, &mut payload)? {
            Some(EmbeddedGenomeRef::Literal(bytes)) => Some(bytes),
            Some(EmbeddedGenomeRef::SelfCopy) | None => None,
        })
    }

    pub fn decode(&self) -> DecodeResult<CellGenomeDescription> {
        decode_node(self)
    }
}

//endregion
