// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::encoded_genome::EncodedGenome;
use crate::error::DecodeResult;
use crate::format::CURRENT_GENOME_FORMAT_VERSION;
use crate::genome_byte_writer::GenomeByteWriter;
use crate::GenomeSerializable;
use cellforge_genome::GenomeDescription;
use tracing::debug;

/// Encodes a genome into wire format version 1.
///
/// Encoding never fails and never validates; values are written exactly as they are held.
/// Embedded genome bytes are copied verbatim.
pub fn encode(genome: &GenomeDescription) -> Vec<u8> {
    let mut writer = GenomeByteWriter::new();
    writer.write_u8(CURRENT_GENOME_FORMAT_VERSION);

    let header = writer.begin_section();
    genome.header.serialize_into(&mut writer);
    writer.end_section(header);

    writer.write_length(genome.cells.len());
    for cell in &genome.cells {
        cell.serialize_into(&mut writer);
    }
    writer.into_bytes()
}

/// Decodes a genome from its wire format.
///
/// Embedded genome bytes are kept as opaque literals and are not decoded. Bytes after the
/// last node are ignored.
pub fn decode(bytes: &[u8]) -> DecodeResult<GenomeDescription> {
    let encoded = EncodedGenome::parse(bytes)?;
    let header = encoded.header()?;

    let mut cells = Vec::with_capacity(encoded.node_capacity_hint());
    let mut end = encoded.nodes_offset();
    for node in encoded.nodes() {
        let node = node?;
        end = node.end_offset();
        cells.push(node.decode()?);
    }
    if end < bytes.len() {
        debug!(
            offset = end,
            ignored = bytes.len() - end,
            "Ignoring bytes after the last genome node"
        );
    }

    Ok(GenomeDescription { header, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;
    use cellforge_genome::{CellGenomeDescription, GenomeHeaderDescription};

    #[test]
    fn test_empty_genome_layout() {
        let bytes = encode(&GenomeDescription::new());
        assert_eq!(bytes[0], CURRENT_GENOME_FORMAT_VERSION);
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0, 0, 0]);
        assert_eq!(decode(&bytes).unwrap(), GenomeDescription::new());
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let genome = GenomeDescription::new().with_cell(CellGenomeDescription::new().with_color(2));
        let mut bytes = encode(&genome);
        bytes.extend_from_slice(&[1, 2, 3]);
        assert_eq!(decode(&bytes).unwrap(), genome);
    }

    #[test]
    fn test_header_extension_is_skipped() {
        let genome = GenomeDescription::new()
            .with_header(GenomeHeaderDescription::new().with_stiffness(0.25));
        let bytes = encode(&genome);

        // Rebuild the buffer with two extra bytes at the end of the header section.
        let header_length = u32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]) as usize;
        let mut extended = vec![bytes[0]];
        extended.extend_from_slice(&((header_length + 2) as u32).to_le_bytes());
        extended.extend_from_slice(&bytes[5..5 + header_length]);
        extended.extend_from_slice(&[0xAA, 0xBB]);
        extended.extend_from_slice(&bytes[5 + header_length..]);

        assert_eq!(decode(&extended).unwrap(), genome);
    }

    #[test]
    fn test_node_count_beyond_buffer_is_truncated() {
        let mut bytes = encode(&GenomeDescription::new());
        let count_at = bytes.len() - 4;
        bytes[count_at..].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            decode(&bytes).unwrap_err(),
            DecodeError::Truncated { .. }
        ));
    }
}
