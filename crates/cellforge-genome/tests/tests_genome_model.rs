// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the genome description model
//!
//! Covers building genomes through the public builders, in-place editing through public
//! fields, switching cell type payloads, and the enum tag tables.

use cellforge_genome::*;

/// Tests for cell type payloads and the payload union
#[cfg(test)]
mod test_cell_types {
    use super::*;

    #[test]
    fn test_default_payload_matches_every_cell_type() {
        for cell_type in CellType::ALL {
            let payload = CellTypeGenomeDescription::default_for(*cell_type);
            assert_eq!(payload.get_cell_type(), *cell_type);
            assert_eq!(payload.embedded_genome().is_some(), cell_type.carries_genome());
        }
    }

    #[test]
    fn test_switching_payload_drops_embedded_genome() {
        let mut cell = CellGenomeDescription::new()
            .with_cell_type(ConstructorGenomeDescription::new().with_genome(vec![1, 2, 3]));
        assert!(cell.has_genome());

        cell.cell_type_data = CellTypeGenomeDescription::default_for(CellType::Oscillator);
        assert_eq!(cell.get_cell_type(), CellType::Oscillator);
        assert!(!cell.has_genome());
        assert_eq!(cell.is_make_genome_copy(), None);
    }

    #[test]
    fn test_constructor_and_injector_share_genome_semantics() {
        let constructor = CellGenomeDescription::new()
            .with_cell_type(ConstructorGenomeDescription::new().with_make_self_copy());
        let injector = CellGenomeDescription::new()
            .with_cell_type(InjectorGenomeDescription::new().with_make_self_copy());
        for cell in [constructor, injector] {
            assert_eq!(cell.is_make_genome_copy(), Some(true));
            assert_eq!(cell.get_genome(), None);
        }
    }

    #[test]
    fn test_muscle_mode_projection() {
        let muscle = MuscleGenomeDescription::new().with_mode(MuscleModeGenomeDescription::Bending(
            BendingGenomeDescription::new().with_offset(2),
        ));
        assert_eq!(muscle.get_mode(), MuscleMode::Bending);
    }
}

/// Tests for genome-level editing
#[cfg(test)]
mod test_genome_editing {
    use super::*;

    #[test]
    fn test_in_place_edits_through_public_fields() {
        let mut genome = GenomeDescription::new()
            .with_cell(CellGenomeDescription::new())
            .with_cell(CellGenomeDescription::new());

        genome.header.num_branches = 4;
        genome.header.separate_construction = false;
        genome.cells[1].color = 5;
        genome.cells[1].neural_network.set_weight(0, 7, 0.25);
        genome.cells.insert(0, CellGenomeDescription::new().with_energy(50.0));

        assert_eq!(genome.num_branches(), 4);
        assert_eq!(genome.num_nodes(), 3);
        assert_eq!(genome.cells[0].energy, 50.0);
        assert_eq!(genome.cells[2].color, 5);
        assert_eq!(genome.cells[2].neural_network.get_weight(0, 7), 0.25);
        assert!(!genome.cells[2].neural_network.is_identity());
        assert!(genome.cells[1].neural_network.is_identity());
    }

    #[test]
    fn test_embedded_genome_edit_in_place() {
        let mut genome = GenomeDescription::new().with_cell(
            CellGenomeDescription::new()
                .with_cell_type(InjectorGenomeDescription::new().with_genome(vec![9])),
        );
        genome.cells[0].genome_mut().unwrap().extend_from_slice(&[8, 7]);
        assert_eq!(
            genome.embedded_genomes().collect::<Vec<_>>(),
            vec![&[9u8, 8, 7][..]]
        );
    }

    #[test]
    fn test_weight_rows_are_row_major() {
        let network = NeuralNetworkGenomeDescription::new()
            .with_weight(2, 3, -1.5)
            .with_bias(2, 0.5)
            .with_activation_function(2, ActivationFunction::Sigmoid);
        assert_eq!(NeuralNetworkGenomeDescription::weight_index(2, 3), 19);
        assert_eq!(network.weights[19], -1.5);
        let row = network.weight_row(2);
        assert_eq!(row.len(), MAX_CHANNELS);
        assert_eq!(row[2], 1.0);
        assert_eq!(row[3], -1.5);
        assert_eq!(network.biases[2], 0.5);
        assert_eq!(network.activation_functions[2], ActivationFunction::Sigmoid);
    }
}

/// Tests for the byte-tagged enums
#[cfg(test)]
mod test_enum_tags {
    use super::*;

    #[test]
    fn test_tag_one_past_the_last_variant_is_rejected() {
        assert_eq!(
            CellType::try_from(CellType::ALL.len() as u8),
            Err(GenomeModelError::UnknownEnumValue {
                enum_name: "CellType",
                value: 11
            })
        );
        assert!(InjectorMode::try_from(InjectorMode::ALL.len() as u8).is_err());
        assert!(MuscleMode::try_from(1).is_err());
    }
}
