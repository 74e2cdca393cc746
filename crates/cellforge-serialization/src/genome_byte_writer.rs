// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::format::SECTION_LENGTH_BYTE_COUNT;
use byteorder::{ByteOrder, LittleEndian};

/// Start of an open length-prefixed section; see [`GenomeByteWriter::begin_section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an open section must be closed with end_section"]
pub struct SectionStart(usize);

/// Append-only little-endian writer producing genome bytes.
///
/// Length-prefixed sections reserve their `u32` slot first and patch it once the section
/// content is known, so nothing needs to be measured ahead of time.
#[derive(Debug, Default, Clone)]
pub struct GenomeByteWriter {
    bytes: Vec<u8>,
}

impl GenomeByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn reserve_slot(&mut self, count: usize) -> usize {
        let start = self.bytes.len();
        self.bytes.resize(start + count, 0);
        start
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        let start = self.reserve_slot(4);
        LittleEndian::write_u32(&mut self.bytes[start..start + 4], value);
    }

    pub fn write_i32(&mut self, value: i32) {
        let start = self.reserve_slot(4);
        LittleEndian::write_i32(&mut self.bytes[start..start + 4], value);
    }

    pub fn write_f32(&mut self, value: f32) {
        let start = self.reserve_slot(4);
        LittleEndian::write_f32(&mut self.bytes[start..start + 4], value);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    pub fn write_optional_i32(&mut self, value: Option<i32>) {
        self.write_bool(value.is_some());
        self.write_i32(value.unwrap_or_default());
    }

    pub fn write_bytes(&mut self, value: &[u8]) {
        self.bytes.extend_from_slice(value);
    }

    /// Writes a count or byte length as `u32`.
    pub fn write_length(&mut self, length: usize) {
        self.write_u32(Self::length_as_u32(length));
    }

    /// `[u32 length][bytes]`.
    pub fn write_length_prefixed_bytes(&mut self, value: &[u8]) {
        self.write_length(value.len());
        self.write_bytes(value);
    }

    /// Reserves the length slot of a new section.
    pub fn begin_section(&mut self) -> SectionStart {
        SectionStart(self.reserve_slot(SECTION_LENGTH_BYTE_COUNT))
    }

    /// Patches the length slot of `section` with the number of bytes written since it began.
    pub fn end_section(&mut self, section: SectionStart) {
        let SectionStart(slot) = section;
        let content_start = slot + SECTION_LENGTH_BYTE_COUNT;
        let length = Self::length_as_u32(self.bytes.len() - content_start);
        LittleEndian::write_u32(&mut self.bytes[slot..content_start], length);
    }

    /// Genomes are far below 4 GiB. Larger lengths saturate and will fail to decode.
    fn length_as_u32(length: usize) -> u32 {
        debug_assert!(length <= u32::MAX as usize, "genome section exceeds u32 length");
        u32::try_from(length).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_length_is_patched() {
        let mut writer = GenomeByteWriter::new();
        writer.write_u8(0xAB);
        let section = writer.begin_section();
        writer.write_i32(-2);
        writer.write_u8(1);
        writer.end_section(section);
        assert_eq!(
            writer.into_bytes(),
            vec![0xAB, 5, 0, 0, 0, 0xFE, 0xFF, 0xFF, 0xFF, 1]
        );
    }

    #[test]
    fn test_nested_sections() {
        let mut writer = GenomeByteWriter::new();
        let outer = writer.begin_section();
        let inner = writer.begin_section();
        writer.write_u8(7);
        writer.end_section(inner);
        writer.end_section(outer);
        assert_eq!(writer.into_bytes(), vec![5, 0, 0, 0, 1, 0, 0, 0, 7]);
    }

    #[test]
    fn test_optional_always_writes_value_slot() {
        let mut writer = GenomeByteWriter::new();
        writer.write_optional_i32(None);
        writer.write_optional_i32(Some(3));
        assert_eq!(
            writer.into_bytes(),
            vec![0, 0, 0, 0, 0, 1, 3, 0, 0, 0]
        );
    }
}
