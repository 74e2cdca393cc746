// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{DecodeError, DecodeResult};
use crate::format::{discard_unknown, EMBEDDED_GENOME_TAG_LITERAL, EMBEDDED_GENOME_TAG_SELF_COPY};
use crate::genome_byte_reader::GenomeByteReader;
use crate::genome_byte_writer::GenomeByteWriter;
use crate::GenomeSerializable;
use cellforge_genome::{
    AttackerGenomeDescription, BaseGenomeDescription, BendingGenomeDescription, CellType,
    CellTypeGenomeDescription, ConstructorGenomeDescription, DefenderGenomeDescription,
    DepotGenomeDescription, DetonatorGenomeDescription, EmbeddedGenome,
    InjectorGenomeDescription, InjectorMode, MuscleGenomeDescription, MuscleMode,
    MuscleModeGenomeDescription, OscillatorGenomeDescription, ReconnectorGenomeDescription,
    SensorGenomeDescription,
};
use tracing::debug;

//region Embedded Genome

/// Borrowed view of an embedded genome slot, pointing into the enclosing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmbeddedGenomeRef<'a> {
    Literal(&'a [u8]),
    SelfCopy,
}

impl EmbeddedGenomeRef<'_> {
    fn to_owned_genome(self) -> EmbeddedGenome {
        match self {
            EmbeddedGenomeRef::Literal(bytes) => EmbeddedGenome::Literal(bytes.to_vec()),
            EmbeddedGenomeRef::SelfCopy => EmbeddedGenome::SelfCopy,
        }
    }
}

fn write_embedded_genome(genome: &EmbeddedGenome, writer: &mut GenomeByteWriter) {
    match genome {
        EmbeddedGenome::Literal(bytes) => {
            writer.write_u8(EMBEDDED_GENOME_TAG_LITERAL);
            writer.write_length_prefixed_bytes(bytes);
        }
        EmbeddedGenome::SelfCopy => writer.write_u8(EMBEDDED_GENOME_TAG_SELF_COPY),
    }
}

fn read_embedded_genome<'a>(
    reader: &mut GenomeByteReader<'a>,
) -> DecodeResult<EmbeddedGenomeRef<'a>> {
    let offset = reader.absolute_position();
    match reader.read_u8("embedded genome")? {
        EMBEDDED_GENOME_TAG_LITERAL => Ok(EmbeddedGenomeRef::Literal(
            reader.read_nested_bytes("embedded genome")?,
        )),
        EMBEDDED_GENOME_TAG_SELF_COPY => Ok(EmbeddedGenomeRef::SelfCopy),
        tag => Err(DecodeError::UnknownTag {
            field: "embedded genome",
            tag,
            offset,
        }),
    }
}

/// Locates the embedded genome inside a payload section without copying it.
///
/// `None` for cell types without a genome slot.
pub(crate) fn read_embedded_genome_ref<'a>(
    cell_type: CellType,
    payload: &mut GenomeByteReader<'a>,
) -> DecodeResult<Option<EmbeddedGenomeRef<'a>>> {
    match cell_type {
        CellType::Constructor => Ok(Some(ConstructorFields::read(payload)?.genome)),
        CellType::Injector => {
            let _mode: InjectorMode = payload.read_enum("injector mode")?;
            Ok(Some(read_embedded_genome(payload)?))
        }
        _ => Ok(None),
    }
}

//endregion

//region Payloads

impl GenomeSerializable for BaseGenomeDescription {
    fn serialize_into(&self, _writer: &mut GenomeByteWriter) {}

    fn deserialize_from(_reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(BaseGenomeDescription)
    }
}

impl GenomeSerializable for DepotGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_u8(self.mode.as_u8());
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(DepotGenomeDescription {
            mode: reader.read_enum("depot mode")?,
        })
    }
}

/// Constructor payload with the genome still borrowed from the input buffer.
struct ConstructorFields<'a> {
    auto_trigger_interval: i32,
    construction_activation_time: i32,
    construction_angle1: f32,
    construction_angle2: f32,
    genome: EmbeddedGenomeRef<'a>,
}

impl<'a> ConstructorFields<'a> {
    fn read(reader: &mut GenomeByteReader<'a>) -> DecodeResult<Self> {
        Ok(ConstructorFields {
            auto_trigger_interval: reader.read_i32("auto_trigger_interval")?,
            construction_activation_time: reader.read_i32("construction_activation_time")?,
            construction_angle1: reader.read_f32("construction_angle1")?,
            construction_angle2: reader.read_f32("construction_angle2")?,
            genome: read_embedded_genome(reader)?,
        })
    }
}

impl GenomeSerializable for ConstructorGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_i32(self.auto_trigger_interval);
        writer.write_i32(self.construction_activation_time);
        writer.write_f32(self.construction_angle1);
        writer.write_f32(self.construction_angle2);
        write_embedded_genome(&self.genome, writer);
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        let fields = ConstructorFields::read(reader)?;
        Ok(ConstructorGenomeDescription {
            auto_trigger_interval: fields.auto_trigger_interval,
            construction_activation_time: fields.construction_activation_time,
            genome: fields.genome.to_owned_genome(),
            construction_angle1: fields.construction_angle1,
            construction_angle2: fields.construction_angle2,
        })
    }
}

impl GenomeSerializable for SensorGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_i32(self.auto_trigger_interval);
        writer.write_f32(self.min_density);
        writer.write_optional_i32(self.min_range);
        writer.write_optional_i32(self.max_range);
        writer.write_optional_i32(self.restrict_to_color);
        writer.write_u8(self.restrict_to_mutants.as_u8());
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(SensorGenomeDescription {
            auto_trigger_interval: reader.read_i32("auto_trigger_interval")?,
            min_density: reader.read_f32("min_density")?,
            min_range: reader.read_optional_i32("min_range")?,
            max_range: reader.read_optional_i32("max_range")?,
            restrict_to_color: reader.read_optional_i32("restrict_to_color")?,
            restrict_to_mutants: reader.read_enum("restrict_to_mutants")?,
        })
    }
}

impl GenomeSerializable for OscillatorGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_i32(self.auto_trigger_interval);
        writer.write_i32(self.alternation_interval);
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(OscillatorGenomeDescription {
            auto_trigger_interval: reader.read_i32("auto_trigger_interval")?,
            alternation_interval: reader.read_i32("alternation_interval")?,
        })
    }
}

impl GenomeSerializable for AttackerGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_u8(self.mode.as_u8());
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(AttackerGenomeDescription {
            mode: reader.read_enum("attacker mode")?,
        })
    }
}

impl GenomeSerializable for InjectorGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_u8(self.mode.as_u8());
        write_embedded_genome(&self.genome, writer);
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(InjectorGenomeDescription {
            mode: reader.read_enum("injector mode")?,
            genome: read_embedded_genome(reader)?.to_owned_genome(),
        })
    }
}

impl GenomeSerializable for BendingGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_f32(self.max_angle_deviation);
        writer.write_f32(self.forward_velocity);
        writer.write_f32(self.backward_velocity);
        writer.write_i32(self.offset);
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(BendingGenomeDescription {
            max_angle_deviation: reader.read_f32("max_angle_deviation")?,
            forward_velocity: reader.read_f32("forward_velocity")?,
            backward_velocity: reader.read_f32("backward_velocity")?,
            offset: reader.read_i32("offset")?,
        })
    }
}

impl GenomeSerializable for MuscleGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_u8(self.get_mode().as_u8());
        let mode = writer.begin_section();
        match &self.mode {
            MuscleModeGenomeDescription::Bending(bending) => bending.serialize_into(writer),
        }
        writer.end_section(mode);
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        let offset = reader.absolute_position();
        let tag = reader.read_u8("muscle mode")?;
        let mut section = reader.read_section("muscle mode")?;
        let mode = match MuscleMode::try_from(tag) {
            Ok(MuscleMode::Bending) => MuscleModeGenomeDescription::Bending(
                BendingGenomeDescription::deserialize_from(&mut section)?,
            ),
            Err(_) => {
                debug!(tag, offset, "Unknown muscle mode, using the default mode");
                MuscleModeGenomeDescription::default()
            }
        };
        discard_unknown(&mut section, "muscle mode");
        Ok(MuscleGenomeDescription { mode })
    }
}

impl GenomeSerializable for DefenderGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_u8(self.mode.as_u8());
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(DefenderGenomeDescription {
            mode: reader.read_enum("defender mode")?,
        })
    }
}

impl GenomeSerializable for ReconnectorGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_optional_i32(self.restrict_to_color);
        writer.write_u8(self.restrict_to_mutants.as_u8());
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        Ok(ReconnectorGenomeDescription {
            restrict_to_color: reader.read_optional_i32("restrict_to_color")?,
            restrict_to_mutants: reader.read_enum("restrict_to_mutants")?,
        })
    }
}

impl GenomeSerializable for DetonatorGenomeDescription {
    fn serialize_into(&self, writer: &mut GenomeByteWriter) {
        writer.write_i32(self.countdown);
    }

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self> {
        let offset = reader.absolute_position();
        let countdown = reader.read_i32("countdown")?;
        if countdown < 0 {
            return Err(DecodeError::InvalidValue {
                field: "countdown",
                offset,
                reason: format!("countdown must not be negative, found {countdown}"),
            });
        }
        Ok(DetonatorGenomeDescription { countdown })
    }
}

//endregion

//region Cell Type Sum

/// Writes the payload fields only. The cell type tag lives in the node frame.
pub(crate) fn write_cell_type_data(
    payload: &CellTypeGenomeDescription,
    writer: &mut GenomeByteWriter,
) {
    match payload {
        CellTypeGenomeDescription::Base(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Depot(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Constructor(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Sensor(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Oscillator(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Attacker(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Injector(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Muscle(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Defender(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Reconnector(data) => data.serialize_into(writer),
        CellTypeGenomeDescription::Detonator(data) => data.serialize_into(writer),
    }
}

pub(crate) fn read_cell_type_data(
    cell_type: CellType,
    reader: &mut GenomeByteReader<'_>,
) -> DecodeResult<CellTypeGenomeDescription> {
    Ok(match cell_type {
        CellType::Base => BaseGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Depot => DepotGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Constructor => ConstructorGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Sensor => SensorGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Oscillator => OscillatorGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Attacker => AttackerGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Injector => InjectorGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Muscle => MuscleGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Defender => DefenderGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Reconnector => ReconnectorGenomeDescription::deserialize_from(reader)?.into(),
        CellType::Detonator => DetonatorGenomeDescription::deserialize_from(reader)?.into(),
    })
}

//endregion
