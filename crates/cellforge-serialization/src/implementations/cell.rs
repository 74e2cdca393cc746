// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use super::cell_type_data::{read_cell_type_data, write_cell_type_data};
use crate::encoded_genome::EncodedNode;
use crate::error::{DecodeError, DecodeResult};
use crate::format::discard_unknown;
use crate::genome_byte_reader::GenomeByteReader;
use crate::genome_byte_writer::GenomeByteWriter;
use crate::GenomeSerializable;
use cellforge_genome::{
    ActivationFunction, CellGenomeDescription, CellTypeGenomeDescription,
    NeuralNetworkGenomeDescription, SignalRoutingRestrictionGenomeDescription, MAX_CHANNELS,
};
use tracing::debug;

impl GenomeSerializable for NeuralNetworkGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_u8(MAX_CHANNELS as u8);
        for weight in &self.weights {
            writer.write_f32(*weight);
        }
        for bias in &self.biases {
            writer.write_f32(*bias);
        }
        for activation_function in &self.activation_functions {
            writer.write_u8(activation_function.as_u8());
        }
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        let offset = reader.absolute_position();
        let channels = reader.read_u8("channel count")?;
        if channels as usize != MAX_CHANNELS {
            return Err(DecodeError::InvalidValue {
                field: "channel count",
                offset,
                reason: format!("expected {MAX_CHANNELS} channels, found {channels}"),
            });
        }

        let mut network = NeuralNetworkGenomeDescription::default();
        for weight in network.weights.iter_mut() {
            *weight = reader.read_f32("weight")?;
        }
        for bias in network.biases.iter_mut() {
            *bias = reader.read_f32("bias")?;
        }
        for activation_function in network.activation_functions.iter_mut() {
            *activation_function = reader.read_tag::<ActivationFunction>("activation function")?;
        }
        Ok(network)
    }
}

impl GenomeSerializable for SignalRoutingRestrictionGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_bool(self.active);
        writer.write_f32(self.base_angle);
        writer.write_f32(self.opening_angle);
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(SignalRoutingRestrictionGenomeDescription {
            active: reader.read_bool("signal routing active")?,
            base_angle: reader.read_f32("signal routing base angle")?,
            opening_angle: reader.read_f32("signal routing opening angle")?,
        })
    }
}

fn write_common_block(cell: &CellGenomeDescription, writer: &mut GenomeByteWriter) {
    writer.write_f32(cell.reference_angle);
    writer.write_f32(cell.energy);
    writer.write_i32(cell.color);
    writer.write_i32(cell.num_required_additional_connections);
    cell.neural_network.serialize_into(writer);
    cell.signal_routing_restriction.serialize_into(writer);
}

/// Reads the common block into a node with a Base payload.
fn read_common_block(reader: &mut GenomeByteReader<'_>) -> DecodeResult<CellGenomeDescription> {
    Ok(CellGenomeDescription {
        reference_angle: reader.read_f32("reference_angle")?,
        energy: reader.read_f32("energy")?,
        color: reader.read_i32("color")?,
        num_required_additional_connections: reader
            .read_i32("num_required_additional_connections")?,
        neural_network: NeuralNetworkGenomeDescription::deserialize_from(reader)?,
        cell_type_data: CellTypeGenomeDescription::default(),
        signal_routing_restriction: SignalRoutingRestrictionGenomeDescription::deserialize_from(
            reader,
        )?,
    })
}

/// Decodes one framed node. Nodes with an unknown cell type keep their common block and
/// become Base nodes.
pub(crate) fn decode_node(node: &EncodedNode<'_>) -> DecodeResult<CellGenomeDescription> {
    let mut body = node.body();
    let mut common = body.read_section("node common block")?;
    let mut cell = read_common_block(&mut common)?;
    discard_unknown(&mut common, "node common block");

    match node.cell_type() {
        Some(cell_type) => {
            let mut payload = body.read_section("node payload")?;
            cell.cell_type_data = read_cell_type_data(cell_type, &mut payload)?;
            discard_unknown(&mut payload, "node payload");
        }
        None => debug!(
            tag = node.cell_type_tag(),
            offset = node.offset(),
            "Unknown cell type, decoding node as Base"
        ),
    }
    discard_unknown(&mut body, "node");
    Ok(cell)
}

impl GenomeSerializable for CellGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_u8(self.get_cell_type().as_u8());
        let node = writer.begin_section();

        let common = writer.begin_section();
        write_common_block(self, writer);
        writer.end_section(common);

        let payload = writer.begin_section();
        write_cell_type_data(&self.cell_type_data, writer);
        writer.end_section(payload);

        writer.end_section(node);
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        decode_node(&EncodedNode::read_from(reader, 0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellforge_genome::{CellType, OscillatorGenomeDescription};

    fn write(cell: &CellGenomeDescription) -> Vec<u8> {
        let mut writer = GenomeByteWriter::new();
        cell.serialize_into(&mut writer);
        writer.into_bytes()
    }

    #[test]
    fn test_node_frame_layout() {
        let bytes = write(&CellGenomeDescription::new());
        assert_eq!(bytes[0], CellType::Base.as_u8());
        let node_length = u32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]) as usize;
        assert_eq!(node_length, bytes.len() - 5);
    }

    #[test]
    fn test_unknown_cell_type_keeps_common_block() {
        let cell = CellGenomeDescription::new()
            .with_color(4)
            .with_energy(42.0)
            .with_cell_type(OscillatorGenomeDescription::new().with_alternation_interval(3));
        let mut bytes = write(&cell);
        bytes[0] = 200;
        let decoded = CellGenomeDescription::deserialize_from(&mut GenomeByteReader::new(&bytes))
            .unwrap();
        assert_eq!(decoded.get_cell_type(), CellType::Base);
        assert_eq!(decoded.color, 4);
        assert_eq!(decoded.energy, 42.0);
    }

    #[test]
    fn test_wrong_channel_count_is_invalid() {
        let mut writer = GenomeByteWriter::new();
        NeuralNetworkGenomeDescription::default().serialize_into(&mut writer);
        let mut bytes = writer.into_bytes();
        bytes[0] = 4;
        assert!(matches!(
            NeuralNetworkGenomeDescription::deserialize_from(&mut GenomeByteReader::new(&bytes)),
            Err(DecodeError::InvalidValue { field: "channel count", offset: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_activation_function_is_unknown_tag() {
        let mut writer = GenomeByteWriter::new();
        NeuralNetworkGenomeDescription::default().serialize_into(&mut writer);
        let mut bytes = writer.into_bytes();
        let last = bytes.len() - 1;
        bytes[last] = 99;
        assert_eq!(
            NeuralNetworkGenomeDescription::deserialize_from(&mut GenomeByteReader::new(&bytes))
                .unwrap_err(),
            DecodeError::UnknownTag {
                field: "activation function",
                tag: 99,
                offset: last
            }
        );
    }
}
