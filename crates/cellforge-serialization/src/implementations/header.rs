// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{DecodeError, DecodeResult};
use crate::format::{REPETITIONS_TAG_FINITE, REPETITIONS_TAG_INFINITE};
use crate::genome_byte_reader::GenomeByteReader;
use crate::genome_byte_writer::GenomeByteWriter;
use crate::GenomeSerializable;
use cellforge_genome::{GenomeHeaderDescription, NumRepetitions};

impl GenomeSerializable for NumRepetitions {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        match self {
            NumRepetitions::Finite(count) => {
                writer.write_u8(REPETITIONS_TAG_FINITE);
                writer.write_u32(*count);
            }
            NumRepetitions::Infinite => writer.write_u8(REPETITIONS_TAG_INFINITE),
        }
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        let offset = reader.absolute_position();
        match reader.read_u8("repetitions")? {
            REPETITIONS_TAG_FINITE => Ok(NumRepetitions::Finite(reader.read_u32("repetitions")?)),
            REPETITIONS_TAG_INFINITE => Ok(NumRepetitions::Infinite),
            tag => Err(DecodeError::UnknownTag {
                field: "repetitions",
                tag,
                offset,
            }),
        }
    }
}

impl GenomeSerializable for GenomeHeaderDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_u8(self.shape.as_u8());
        writer.write_i32(self.num_branches);
        writer.write_bool(self.separate_construction);
        writer.write_u8(self.angle_alignment.as_u8());
        writer.write_f32(self.stiffness);
        writer.write_f32(self.connection_distance);
        self.num_repetitions.serialize_into(writer);
        writer.write_f32(self.concatenation_angle1);
        writer.write_f32(self.concatenation_angle2);
        writer.write_f32(self.front_angle);
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(GenomeHeaderDescription {
            shape: reader.read_enum("shape")?,
            num_branches: reader.read_i32("num_branches")?,
            separate_construction: reader.read_bool("separate_construction")?,
            angle_alignment: reader.read_enum("angle_alignment")?,
            stiffness: reader.read_f32("stiffness")?,
            connection_distance: reader.read_f32("connection_distance")?,
            num_repetitions: NumRepetitions::deserialize_from(reader)?,
            concatenation_angle1: reader.read_f32("concatenation_angle1")?,
            concatenation_angle2: reader.read_f32("concatenation_angle2")?,
            front_angle: reader.read_f32("front_angle")?,
        })
    }
}
