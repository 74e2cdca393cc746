// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Structural queries over encoded genomes.
//!
//! Everything here works on the byte form through [`EncodedGenome`] and reads only node
//! framing, the header and embedded genome slots. Nested genomes are never materialized.
//! Errors found inside a nested genome carry offsets relative to that nested genome.

use crate::encoded_genome::{decode_header, EncodedGenome};
use crate::error::DecodeResult;
use cellforge_genome::{GenomeDescription, GenomeHeaderDescription, NumRepetitions};
use serde::{Serialize, Serializer};
use tracing::trace;

/// Effective number of construction branches of `header`, in `1..=6`.
pub fn get_num_branches(header: &GenomeHeaderDescription) -> i32 {
    header.get_num_branches()
}

/// Repetition count of an encoded genome. Only the header section is read.
pub fn get_num_repetitions(bytes: &[u8]) -> DecodeResult<NumRepetitions> {
    Ok(decode_header(bytes)?.num_repetitions)
}

/// Counts the top-level nodes of an encoded genome. With `include_nested`, the nodes of
/// every literal embedded genome are added, at every depth.
///
/// Self-copy sentinels and empty literals contribute nothing. Each nested genome is a
/// strictly shorter sub-slice of its parent, so the walk always terminates. It runs on an
/// explicit work list, so deeply nested input cannot exhaust the call stack.
pub fn get_num_nodes_recursively(bytes: &[u8], include_nested: bool) -> DecodeResult<usize> {
    let mut pending = vec![bytes];
    let mut total = 0usize;
    while let Some(genome) = pending.pop() {
        let encoded = EncodedGenome::parse(genome)?;
        for node in encoded.nodes() {
            let node = node?;
            total += 1;
            if !include_nested {
                continue;
            }
            if let Some(nested) = node.embedded_genome()? {
                if !nested.is_empty() {
                    pending.push(nested);
                }
            }
        }
    }
    trace!(total, include_nested, "Counted genome nodes");
    Ok(total)
}

/// [`get_num_nodes_recursively`] for a genome already held in memory. Embedded genomes are
/// still bytes and are walked in their encoded form.
pub fn get_num_nodes_recursively_of(
    genome: &GenomeDescription,
    include_nested: bool,
) -> DecodeResult<usize> {
    let mut total = genome.num_nodes();
    if include_nested {
        for nested in genome.embedded_genomes().filter(|nested| !nested.is_empty()) {
            total += get_num_nodes_recursively(nested, true)?;
        }
    }
    Ok(total)
}

/// Maps a byte offset to the index of the top-level node containing it.
///
/// Offsets inside the prelude (version, header, node count) map to node 0. Offsets at or past
/// the end of the last node map to the node count.
pub fn convert_node_address_to_node_index(bytes: &[u8], address: usize) -> DecodeResult<usize> {
    let encoded = EncodedGenome::parse(bytes)?;
    let mut node_count = 0;
    for node in encoded.nodes() {
        let node = node?;
        if address < node.end_offset() {
            return Ok(node.index());
        }
        node_count += 1;
    }
    Ok(node_count)
}

/// Maps a top-level node index to the offset of the node's first byte. Indices at or past the
/// node count map to the end of the last node.
pub fn convert_node_index_to_node_address(bytes: &[u8], index: usize) -> DecodeResult<usize> {
    let encoded = EncodedGenome::parse(bytes)?;
    let mut end = encoded.nodes_offset();
    for node in encoded.nodes() {
        let node = node?;
        if node.index() == index {
            return Ok(node.offset());
        }
        end = node.end_offset();
    }
    Ok(end)
}

//region Statistics

/// Summary of an encoded genome, as shown by inspector panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenomeStatistics {
    pub num_bytes: usize,
    /// Top-level nodes, i.e. cells per repetition and branch
    pub num_nodes: usize,
    /// Top-level nodes plus the nodes of all literal embedded genomes. Only computed when
    /// nested genomes are requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_nodes_recursively: Option<usize>,
    pub num_branches: i32,
    #[serde(serialize_with = "serialize_repetitions")]
    pub num_repetitions: NumRepetitions,
    /// Cells one construction run produces; `None` for infinite repetitions
    pub num_cells_constructed: Option<u64>,
}

impl GenomeStatistics {
    /// Without `include_nested`, embedded genome bytes are never parsed, so opaque literals
    /// do not make the statistics fail.
    pub fn from_bytes(bytes: &[u8], include_nested: bool) -> DecodeResult<Self> {
        let header = decode_header(bytes)?;
        let num_nodes = get_num_nodes_recursively(bytes, false)?;
        let num_nodes_recursively = if include_nested {
            Some(get_num_nodes_recursively(bytes, true)?)
        } else {
            None
        };
        let num_branches = get_num_branches(&header);
        let num_cells_constructed = header.num_repetitions.finite().map(|repetitions| {
            (num_nodes as u64)
                .saturating_mul(num_branches as u64)
                .saturating_mul(u64::from(repetitions))
        });
        Ok(Self {
            num_bytes: bytes.len(),
            num_nodes,
            num_nodes_recursively,
            num_branches,
            num_repetitions: header.num_repetitions,
            num_cells_constructed,
        })
    }
}

fn serialize_repetitions<S: Serializer>(
    value: &NumRepetitions,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        NumRepetitions::Finite(count) => serializer.serialize_u32(*count),
        NumRepetitions::Infinite => serializer.serialize_str("infinite"),
    }
}

//endregion

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;
    use cellforge_genome::{
        CellGenomeDescription, ConstructorGenomeDescription, InjectorGenomeDescription,
    };

    fn genome_with_nodes(count: usize) -> GenomeDescription {
        (0..count).fold(GenomeDescription::new(), |genome, _| {
            genome.with_cell(CellGenomeDescription::new())
        })
    }

    #[test]
    fn test_statistics() {
        let inner = encode(&genome_with_nodes(3));
        let genome = genome_with_nodes(1)
            .with_cell(
                CellGenomeDescription::new()
                    .with_cell_type(ConstructorGenomeDescription::new().with_genome(inner)),
            )
            .with_header(
                GenomeHeaderDescription::new()
                    .with_separate_construction(false)
                    .with_num_branches(2)
                    .with_num_repetitions(4),
            );
        let bytes = encode(&genome);
        let statistics = GenomeStatistics::from_bytes(&bytes, true).unwrap();
        assert_eq!(statistics.num_bytes, bytes.len());
        assert_eq!(statistics.num_nodes, 2);
        assert_eq!(statistics.num_nodes_recursively, Some(5));
        assert_eq!(statistics.num_branches, 2);
        assert_eq!(statistics.num_cells_constructed, Some(16));
    }

    #[test]
    fn test_statistics_json() {
        let genome = genome_with_nodes(1)
            .with_header(GenomeHeaderDescription::new().with_infinite_repetitions());
        let statistics = GenomeStatistics::from_bytes(&encode(&genome), true).unwrap();
        let json = serde_json::to_value(&statistics).unwrap();
        assert_eq!(json["num_repetitions"], "infinite");
        assert!(json["num_cells_constructed"].is_null());
        assert_eq!(json["num_nodes"], 1);
        assert_eq!(json["num_nodes_recursively"], 1);
    }

    #[test]
    fn test_statistics_skip_opaque_embedded_genome_without_nesting() {
        let genome = GenomeDescription::new().with_cell(
            CellGenomeDescription::new().with_cell_type(
                InjectorGenomeDescription::new().with_genome(vec![0xDE, 0xAD, 0xBE, 0xEF]),
            ),
        );
        let bytes = encode(&genome);

        let statistics = GenomeStatistics::from_bytes(&bytes, false).unwrap();
        assert_eq!(statistics.num_nodes, 1);
        assert_eq!(statistics.num_nodes_recursively, None);
        let json = serde_json::to_value(&statistics).unwrap();
        assert!(json.get("num_nodes_recursively").is_none());

        assert!(matches!(
            GenomeStatistics::from_bytes(&bytes, true),
            Err(crate::DecodeError::UnsupportedVersion { found: 0xDE, .. })
        ));
    }

    #[test]
    fn test_index_to_address_inverts_address_to_index() {
        let bytes = encode(&genome_with_nodes(4));
        for index in 0..4 {
            let address = convert_node_index_to_node_address(&bytes, index).unwrap();
            assert_eq!(convert_node_address_to_node_index(&bytes, address).unwrap(), index);
        }
        assert_eq!(convert_node_index_to_node_address(&bytes, 9).unwrap(), bytes.len());
    }
}
