// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::DecodeResult;
use crate::genome_byte_reader::GenomeByteReader;
use crate::genome_byte_writer::GenomeByteWriter;

/// A genome section with a fixed field layout in the wire format.
///
/// Implementations read and write only their own fields. Whoever owns the enclosing
/// length-prefixed section decides what happens to bytes left over after
/// [`Self::deserialize_from`] returns.
pub trait GenomeSerializable: Sized {
    fn serialize_into(&self, writer: &mut GenomeByteWriter);

    fn deserialize_from(reader: &mut GenomeByteReader<'_>) -> DecodeResult<Self>;
}
