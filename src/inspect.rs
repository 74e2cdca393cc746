// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Genome file inspection, as used by the `inspect_genome` tool.

use anyhow::{bail, Context, Result};
use cellforge_config::OutputFormat;
use cellforge_serialization::{
    get_num_nodes_recursively, DecodeResult, EncodedGenome, EncodedNode, GenomeStatistics,
};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a genome file, rejecting files larger than `max_genome_bytes` before reading them.
pub fn read_genome_file(path: &Path, max_genome_bytes: u64) -> Result<Vec<u8>> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to stat genome file {}", path.display()))?;
    if metadata.len() > max_genome_bytes {
        bail!(
            "Genome file {} is {} bytes, the limit is {} bytes",
            path.display(),
            metadata.len(),
            max_genome_bytes
        );
    }
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read genome file {}", path.display()))?;
    debug!(path = %path.display(), num_bytes = bytes.len(), "read genome file");
    Ok(bytes)
}

/// One top-level node as seen in the encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub index: usize,
    pub offset: usize,
    pub end_offset: usize,
    /// Cell type name, or `Unknown(<tag>)` for tags this build does not know
    pub cell_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_genome_bytes: Option<usize>,
    /// Nodes of the embedded genome, nested ones included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_genome_nodes: Option<usize>,
}

impl NodeSummary {
    fn render_text(&self) -> String {
        let range = format!(
            "  #{:<4} [{}..{}) {}",
            self.index, self.offset, self.end_offset, self.cell_type
        );
        match (self.embedded_genome_bytes, self.embedded_genome_nodes) {
            (Some(bytes), Some(nodes)) => {
                format!("{range} (embedded genome: {bytes} bytes, {nodes} nodes)")
            }
            (Some(bytes), None) => format!("{range} (embedded genome: {bytes} bytes)"),
            _ => range,
        }
    }

    fn from_node(node: &EncodedNode<'_>, include_nested: bool) -> DecodeResult<Self> {
        let cell_type = match node.cell_type() {
            Some(cell_type) => cell_type.to_string(),
            None => format!("Unknown({})", node.cell_type_tag()),
        };
        let embedded = node.embedded_genome()?;
        let embedded_genome_nodes = match embedded {
            Some(genome) if include_nested => Some(get_num_nodes_recursively(genome, true)?),
            _ => None,
        };
        Ok(Self {
            index: node.index(),
            offset: node.offset(),
            end_offset: node.end_offset(),
            cell_type,
            embedded_genome_bytes: embedded.map(<[u8]>::len),
            embedded_genome_nodes,
        })
    }
}

/// Statistics plus a per-node listing of one encoded genome.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    #[serde(flatten)]
    pub statistics: GenomeStatistics,
    pub nodes: Vec<NodeSummary>,
}

impl InspectReport {
    /// Without `include_nested`, embedded genomes are only measured, never parsed.
    pub fn from_bytes(bytes: &[u8], include_nested: bool) -> DecodeResult<Self> {
        let statistics = GenomeStatistics::from_bytes(bytes, include_nested)?;
        let encoded = EncodedGenome::parse(bytes)?;
        let mut nodes = Vec::with_capacity(encoded.node_capacity_hint());
        for node in encoded.nodes() {
            nodes.push(NodeSummary::from_node(&node?, include_nested)?);
        }
        Ok(Self { statistics, nodes })
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize inspect report")
            }
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let stats = &self.statistics;
        let mut lines = vec![
            format!("Genome size:        {} bytes", stats.num_bytes),
            format!("Nodes:              {}", stats.num_nodes),
        ];
        if let Some(nested) = stats.num_nodes_recursively {
            lines.push(format!("Nodes incl. nested: {nested}"));
        }
        lines.push(format!("Branches:           {}", stats.num_branches));
        lines.push(format!("Repetitions:        {}", stats.num_repetitions));
        lines.push(match stats.num_cells_constructed {
            Some(cells) => format!("Cells constructed:  {cells}"),
            None => "Cells constructed:  unbounded".to_string(),
        });
        lines.extend(self.nodes.iter().map(NodeSummary::render_text));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellforge_genome::{
        CellGenomeDescription, ConstructorGenomeDescription, GenomeDescription,
        InjectorGenomeDescription,
    };
    use cellforge_serialization::encode;

    fn sample_bytes() -> Vec<u8> {
        let inner = encode(
            &GenomeDescription::new()
                .with_cell(CellGenomeDescription::new())
                .with_cell(CellGenomeDescription::new()),
        );
        encode(
            &GenomeDescription::new()
                .with_cell(
                    CellGenomeDescription::new()
                        .with_cell_type(ConstructorGenomeDescription::new().with_genome(inner)),
                )
                .with_cell(
                    CellGenomeDescription::new()
                        .with_cell_type(InjectorGenomeDescription::new().with_make_self_copy()),
                ),
        )
    }

    #[test]
    fn test_report_lists_nodes_in_order() {
        let bytes = sample_bytes();
        let report = InspectReport::from_bytes(&bytes, true).unwrap();
        assert_eq!(report.nodes.len(), 2);
        assert_eq!(report.nodes[0].cell_type, "Constructor");
        assert_eq!(report.nodes[0].embedded_genome_nodes, Some(2));
        assert_eq!(report.nodes[1].cell_type, "Injector");
        assert_eq!(report.nodes[1].embedded_genome_bytes, None);
        assert_eq!(report.nodes[0].end_offset, report.nodes[1].offset);
        assert_eq!(report.nodes[1].end_offset, bytes.len());
        assert_eq!(report.statistics.num_nodes_recursively, Some(4));
    }

    #[test]
    fn test_json_drops_nested_count_when_disabled() {
        let report = InspectReport::from_bytes(&sample_bytes(), false).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert!(json.get("num_nodes_recursively").is_none());
        assert_eq!(json["num_nodes"], 2);
        assert!(json["nodes"][0].get("embedded_genome_nodes").is_none());
    }

    #[test]
    fn test_opaque_embedded_genome_inspects_without_nesting() {
        let bytes = encode(&GenomeDescription::new().with_cell(
            CellGenomeDescription::new().with_cell_type(
                InjectorGenomeDescription::new().with_genome(vec![0xDE, 0xAD, 0xBE, 0xEF]),
            ),
        ));
        assert!(cellforge_serialization::decode(&bytes).is_ok());

        let report = InspectReport::from_bytes(&bytes, false).unwrap();
        assert_eq!(report.statistics.num_nodes_recursively, None);
        assert_eq!(report.nodes[0].embedded_genome_bytes, Some(4));
        assert_eq!(report.nodes[0].embedded_genome_nodes, None);
        let text = report.render(OutputFormat::Text).unwrap();
        assert!(!text.contains("Nodes incl. nested"));
        assert!(text.contains("Injector (embedded genome: 4 bytes)"));

        assert!(InspectReport::from_bytes(&bytes, true).is_err());
    }

    #[test]
    fn test_text_output() {
        let report = InspectReport::from_bytes(&sample_bytes(), true).unwrap();
        let text = report.render(OutputFormat::Text).unwrap();
        assert!(text.contains("Nodes incl. nested: 4"));
        assert!(text.contains("Cells constructed:  2"));
        assert!(text.contains("Constructor (embedded genome:"));
    }
}
