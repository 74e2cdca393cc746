// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests through the umbrella crate: build, encode, share, edit and inspect.

use cellforge::config::{load_config, OutputFormat};
use cellforge::inspect::{read_genome_file, InspectReport};
use cellforge::prelude::*;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

fn editor_genome() -> GenomeDescription {
    let offspring = GenomeDescription::new()
        .with_cell(CellGenomeDescription::new().with_cell_type(MuscleGenomeDescription::new()))
        .with_cell(CellGenomeDescription::new().with_cell_type(SensorGenomeDescription::new()));
    GenomeDescription::new()
        .with_header(
            GenomeHeaderDescription::new()
                .with_separate_construction(false)
                .with_num_branches(2)
                .with_num_repetitions(3),
        )
        .with_cell(CellGenomeDescription::new().with_color(2))
        .with_cell(
            CellGenomeDescription::new().with_cell_type(
                ConstructorGenomeDescription::new().with_genome(encode(&offspring)),
            ),
        )
        .with_cell(
            CellGenomeDescription::new()
                .with_cell_type(InjectorGenomeDescription::new().with_make_self_copy()),
        )
}

#[test]
fn test_encoded_genome_statistics() {
    let bytes = encode(&editor_genome());
    let stats = GenomeStatistics::from_bytes(&bytes, true).unwrap();
    assert_eq!(stats.num_bytes, bytes.len());
    assert_eq!(stats.num_nodes, 3);
    assert_eq!(stats.num_nodes_recursively, Some(5));
    assert_eq!(stats.num_branches, 2);
    assert_eq!(stats.num_repetitions, NumRepetitions::Finite(3));
    assert_eq!(stats.num_cells_constructed, Some(18));
    assert_eq!(get_num_repetitions(&bytes).unwrap(), NumRepetitions::Finite(3));
}

#[test]
fn test_node_addresses_match_encoded_view() {
    let bytes = encode(&editor_genome());
    let encoded = EncodedGenome::parse(&bytes).unwrap();
    for node in encoded.nodes() {
        let node = node.unwrap();
        assert_eq!(
            convert_node_index_to_node_address(&bytes, node.index()).unwrap(),
            node.offset()
        );
        assert_eq!(
            convert_node_address_to_node_index(&bytes, node.offset()).unwrap(),
            node.index()
        );
    }
    assert_eq!(convert_node_address_to_node_index(&bytes, bytes.len()).unwrap(), 3);
}

#[test]
fn test_shared_bytes_edit_normalizes_and_keeps_old_snapshot() {
    let shared = SharedGenomeBytes::from_description(&editor_genome());
    let before = shared.snapshot();

    let after = shared
        .edit(|genome| {
            genome.cells[0].energy = -20.0;
            genome.cells.push(CellGenomeDescription::new());
        })
        .unwrap();

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(decode(&before).unwrap(), editor_genome());

    let edited = decode(&shared.snapshot()).unwrap();
    assert_eq!(edited.num_nodes(), 4);
    assert_eq!(edited.cells[0].energy, MIN_NODE_ENERGY);
    assert_eq!(edited.cells[1].get_genome(), editor_genome().cells[1].get_genome());
}

#[test]
fn test_shared_bytes_edit_fails_on_corrupt_buffer() {
    let shared = SharedGenomeBytes::new(vec![1, 0xFF]);
    assert!(shared.edit(|genome| genome.cells.clear()).is_err());
    assert_eq!(*shared.snapshot(), vec![1, 0xFF]);
}

#[test]
fn test_inspect_genome_file() {
    let dir = tempdir().unwrap();
    let genome_path = dir.path().join("organism.genome");
    fs::write(&genome_path, encode(&editor_genome())).unwrap();

    let bytes = read_genome_file(&genome_path, 1024 * 1024).unwrap();
    let report = InspectReport::from_bytes(&bytes, true).unwrap();
    assert_eq!(
        report.nodes.iter().map(|n| n.cell_type.as_str()).collect::<Vec<_>>(),
        vec!["Base", "Constructor", "Injector"]
    );
    assert_eq!(report.nodes[1].embedded_genome_nodes, Some(2));

    let json: serde_json::Value =
        serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["num_cells_constructed"], 18);
    assert_eq!(json["nodes"][1]["cell_type"], "Constructor");
}

#[test]
fn test_inspect_rejects_oversized_file() {
    let dir = tempdir().unwrap();
    let genome_path = dir.path().join("organism.genome");
    let bytes = encode(&editor_genome());
    fs::write(&genome_path, &bytes).unwrap();

    let err = read_genome_file(&genome_path, bytes.len() as u64 - 1).unwrap_err();
    assert!(err.to_string().contains("limit"));
    assert!(read_genome_file(&dir.path().join("missing.genome"), 1024).is_err());
}

#[test]
fn test_inspect_settings_from_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("cellforge.toml");
    fs::write(
        &config_path,
        "[inspect]\ninclude_nested = false\noutput_format = \"json\"\n",
    )
    .unwrap();

    let config = load_config(Some(config_path.as_path()), None).unwrap();
    let bytes = encode(&editor_genome());
    let report = InspectReport::from_bytes(&bytes, config.inspect.include_nested).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&report.render(config.inspect.output_format).unwrap()).unwrap();
    assert!(json.get("num_nodes_recursively").is_none());
    assert!(json["nodes"][1].get("embedded_genome_nodes").is_none());
    assert_eq!(
        json["nodes"][1]["embedded_genome_bytes"],
        report.nodes[1].embedded_genome_bytes.unwrap()
    );
}
