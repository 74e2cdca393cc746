// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{DecodeError, DecodeResult};
use byteorder::{ByteOrder, LittleEndian};
use cellforge_genome::GenomeModelError;

/// Bounds-checked little-endian cursor over a borrowed genome slice.
///
/// Sub-readers returned by the `read_section` methods only see their own section, so a
/// malformed length can never make a field read escape its enclosing section. Offsets in
/// errors are absolute within the outermost buffer.
#[derive(Debug, Clone)]
pub struct GenomeByteReader<'a> {
    bytes: &'a [u8],
    position: usize,
    base_offset: usize,
}

impl<'a> GenomeByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            position: 0,
            base_offset: 0,
        }
    }

    fn with_base_offset(bytes: &'a [u8], base_offset: usize) -> Self {
        Self {
            bytes,
            position: 0,
            base_offset,
        }
    }

    //region Position

    /// Offset of the next unread byte within the outermost buffer.
    pub fn absolute_position(&self) -> usize {
        self.base_offset + self.position
    }

    /// Absolute offset one past the last byte this reader can see.
    pub fn absolute_end(&self) -> usize {
        self.base_offset + self.bytes.len()
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Skips everything left and returns how many bytes that was.
    pub fn skip_remaining(&mut self) -> usize {
        let skipped = self.remaining();
        self.position = self.bytes.len();
        skipped
    }

    //endregion

    //region Primitives

    fn take(&mut self, count: usize, field: &'static str) -> DecodeResult<&'a [u8]> {
        if count > self.remaining() {
            return Err(DecodeError::Truncated {
                field,
                offset: self.absolute_position(),
                needed: count,
                available: self.remaining(),
            });
        }
        let slice = &self.bytes[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    pub fn read_u8(&mut self, field: &'static str) -> DecodeResult<u8> {
        Ok(self.take(1, field)?[0])
    }

    pub fn read_u32(&mut self, field: &'static str) -> DecodeResult<u32> {
        Ok(LittleEndian::read_u32(self.take(4, field)?))
    }

    pub fn read_i32(&mut self, field: &'static str) -> DecodeResult<i32> {
        Ok(LittleEndian::read_i32(self.take(4, field)?))
    }

    pub fn read_f32(&mut self, field: &'static str) -> DecodeResult<f32> {
        Ok(LittleEndian::read_f32(self.take(4, field)?))
    }

    /// Reads a `0`/`1` byte. Any other value is rejected.
    pub fn read_bool(&mut self, field: &'static str) -> DecodeResult<bool> {
        let offset = self.absolute_position();
        match self.read_u8(field)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::InvalidValue {
                field,
                offset,
                reason: format!("expected 0 or 1, found {other}"),
            }),
        }
    }

    /// Reads a one-byte closed enum. Values outside the enum are invalid.
    pub fn read_enum<T>(&mut self, field: &'static str) -> DecodeResult<T>
    where
        T: TryFrom<u8, Error = GenomeModelError>,
    {
        let offset = self.absolute_position();
        let raw = self.read_u8(field)?;
        T::try_from(raw).map_err(|err| DecodeError::InvalidValue {
            field,
            offset,
            reason: err.to_string(),
        })
    }

    /// Reads a one-byte tag whose following data cannot be skipped without understanding it.
    /// Values outside the enum are unknown tags.
    pub fn read_tag<T>(&mut self, field: &'static str) -> DecodeResult<T>
    where
        T: TryFrom<u8, Error = GenomeModelError>,
    {
        let offset = self.absolute_position();
        let tag = self.read_u8(field)?;
        T::try_from(tag).map_err(|_| DecodeError::UnknownTag { field, tag, offset })
    }

    /// Reads a presence byte followed by an `i32`.
    pub fn read_optional_i32(&mut self, field: &'static str) -> DecodeResult<Option<i32>> {
        let present = self.read_bool(field)?;
        let value = self.read_i32(field)?;
        Ok(present.then_some(value))
    }

    //endregion

    //region Sections

    /// Reads a `u32` length and returns a reader bounded to the section it announces.
    ///
    /// A length larger than what remains is [`DecodeError::Truncated`].
    pub fn read_section(&mut self, field: &'static str) -> DecodeResult<GenomeByteReader<'a>> {
        let length = self.read_u32(field)? as usize;
        let start = self.absolute_position();
        let bytes = self.take(length, field)?;
        Ok(GenomeByteReader::with_base_offset(bytes, start))
    }

    /// Reads a `u32` length and the embedded bytes it announces.
    ///
    /// Unlike [`Self::read_section`], a length larger than what remains in this reader is
    /// [`DecodeError::NestedLengthOverflow`].
    pub fn read_nested_bytes(&mut self, field: &'static str) -> DecodeResult<&'a [u8]> {
        let offset = self.absolute_position();
        let declared = self.read_u32(field)? as usize;
        if declared > self.remaining() {
            return Err(DecodeError::NestedLengthOverflow {
                offset,
                declared,
                remaining: self.remaining(),
            });
        }
        self.take(declared, field)
    }

    //endregion
}
