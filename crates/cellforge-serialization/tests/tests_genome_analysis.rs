// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Tests for structural queries on encoded genomes.

use cellforge_genome::{
    CellGenomeDescription, ConstructorGenomeDescription, GenomeDescription,
    GenomeHeaderDescription, InjectorGenomeDescription,
};
use cellforge_serialization::{
    convert_node_address_to_node_index, convert_node_index_to_node_address, encode,
    get_num_branches, get_num_nodes_recursively, get_num_nodes_recursively_of, EncodedGenome,
};

fn plain_nodes(count: usize) -> Vec<CellGenomeDescription> {
    (0..count)
        .map(|index| CellGenomeDescription::new().with_color(index as i32 % 7))
        .collect()
}

fn constructor_with(genome: Vec<u8>) -> CellGenomeDescription {
    CellGenomeDescription::new().with_cell_type(ConstructorGenomeDescription::new().with_genome(genome))
}

#[test]
fn test_recursive_count_is_additive() {
    let leaf = encode(&GenomeDescription::new().with_cells(plain_nodes(2)));
    let middle = encode(
        &GenomeDescription::new()
            .with_cells(plain_nodes(3))
            .with_cell(constructor_with(leaf.clone())),
    );
    let root = GenomeDescription::new()
        .with_cells(plain_nodes(1))
        .with_cell(constructor_with(middle.clone()))
        .with_cell(
            CellGenomeDescription::new()
                .with_cell_type(InjectorGenomeDescription::new().with_genome(leaf.clone())),
        );
    let root_bytes = encode(&root);

    let leaf_count = get_num_nodes_recursively(&leaf, true).unwrap();
    let middle_count = get_num_nodes_recursively(&middle, true).unwrap();
    assert_eq!(leaf_count, 2);
    assert_eq!(middle_count, 4 + leaf_count);

    let root_count = get_num_nodes_recursively(&root_bytes, true).unwrap();
    assert_eq!(root_count, 3 + middle_count + leaf_count);
    assert_eq!(get_num_nodes_recursively(&root_bytes, false).unwrap(), 3);

    assert_eq!(get_num_nodes_recursively_of(&root, true).unwrap(), root_count);
    assert_eq!(get_num_nodes_recursively_of(&root, false).unwrap(), 3);
}

#[test]
fn test_sentinel_and_empty_literal_count_nothing() {
    let genome = GenomeDescription::new()
        .with_cell(constructor_with(Vec::new()))
        .with_cell(
            CellGenomeDescription::new()
                .with_cell_type(ConstructorGenomeDescription::new().with_make_self_copy()),
        )
        .with_cell(
            CellGenomeDescription::new()
                .with_cell_type(InjectorGenomeDescription::new().with_make_self_copy()),
        );
    assert_eq!(get_num_nodes_recursively(&encode(&genome), true).unwrap(), 3);
    assert_eq!(get_num_nodes_recursively_of(&genome, true).unwrap(), 3);
}

#[test]
fn test_deep_nesting_terminates() {
    let mut bytes = encode(&GenomeDescription::new().with_cells(plain_nodes(1)));
    for _ in 0..200 {
        bytes = encode(&GenomeDescription::new().with_cell(constructor_with(bytes)));
    }
    assert_eq!(get_num_nodes_recursively(&bytes, true).unwrap(), 201);
}

#[test]
fn test_node_address_boundaries() {
    let genome = GenomeDescription::new().with_cells(plain_nodes(3));
    let bytes = encode(&genome);
    let encoded = EncodedGenome::parse(&bytes).unwrap();
    let nodes: Vec<_> = encoded.nodes().map(Result::unwrap).collect();

    assert_eq!(convert_node_address_to_node_index(&bytes, 0).unwrap(), 0);
    assert_eq!(
        convert_node_address_to_node_index(&bytes, encoded.nodes_offset() - 1).unwrap(),
        0
    );
    for node in &nodes {
        assert_eq!(
            convert_node_address_to_node_index(&bytes, node.offset()).unwrap(),
            node.index()
        );
        assert_eq!(
            convert_node_address_to_node_index(&bytes, node.end_offset() - 1).unwrap(),
            node.index()
        );
    }
    assert_eq!(nodes[2].end_offset(), bytes.len());
    assert_eq!(convert_node_address_to_node_index(&bytes, bytes.len()).unwrap(), 3);
    assert_eq!(convert_node_address_to_node_index(&bytes, usize::MAX).unwrap(), 3);
}

#[test]
fn test_node_address_on_empty_genome() {
    let bytes = encode(&GenomeDescription::new());
    assert_eq!(convert_node_address_to_node_index(&bytes, 0).unwrap(), 0);
    assert_eq!(convert_node_address_to_node_index(&bytes, bytes.len()).unwrap(), 0);
    assert_eq!(convert_node_index_to_node_address(&bytes, 0).unwrap(), bytes.len());
}

#[test]
fn test_node_index_to_address() {
    let bytes = encode(&GenomeDescription::new().with_cells(plain_nodes(2)));
    let encoded = EncodedGenome::parse(&bytes).unwrap();
    assert_eq!(
        convert_node_index_to_node_address(&bytes, 0).unwrap(),
        encoded.nodes_offset()
    );
    assert_eq!(convert_node_index_to_node_address(&bytes, 2).unwrap(), bytes.len());
}

#[test]
fn test_branch_count_edge_cases() {
    let header = |separate: bool, raw: i32| {
        GenomeHeaderDescription::new()
            .with_separate_construction(separate)
            .with_num_branches(raw)
    };
    for raw in [0, 1, 5, 6, 7, -3] {
        assert_eq!(get_num_branches(&header(true, raw)), 1);
    }
    assert_eq!(
        get_num_branches(&header(false, 0)),
        get_num_branches(&header(false, 6))
    );
    assert_eq!(get_num_branches(&header(false, 3)), 3);
}

#[test]
fn test_nested_error_offsets_are_relative_to_nested_genome() {
    let mut inner = encode(&GenomeDescription::new().with_cells(plain_nodes(1)));
    inner.pop();
    let outer = encode(&GenomeDescription::new().with_cells(vec![
        CellGenomeDescription::new(),
        constructor_with(inner.clone()),
    ]));

    let nested_error = get_num_nodes_recursively(&outer, true).unwrap_err();
    assert_eq!(nested_error, get_num_nodes_recursively(&inner, true).unwrap_err());
    assert_eq!(get_num_nodes_recursively(&outer, false).unwrap(), 2);
}
