// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Genome wire format, version 1.
//!
//! All integers and floats are little-endian. Every section whose content may grow in later
//! versions is preceded by a `u32` byte length, so older readers can skip what they do not
//! understand.
//!
//! # Genome
//! ```text
//! [u8  format version]
//! [u32 header length][header fields]
//! [u32 node count]
//! node * count
//! ```
//! Bytes after the last node are ignored.
//!
//! # Header fields
//! ```text
//! [u8 shape][i32 raw branch count][u8 separate construction (0/1)][u8 angle alignment]
//! [f32 stiffness][f32 connection distance][repetitions]
//! [f32 concatenation angle 1][f32 concatenation angle 2][f32 front angle]
//! ```
//! Repetitions are `[u8 0][u32 count]` for a finite count and `[u8 1]` for infinite.
//!
//! # Node
//! ```text
//! [u8  cell type tag][u32 node length]
//!     [u32 common length]
//!         [f32 reference angle][f32 energy][i32 color][i32 required additional connections]
//!         [u8 channel count = 8][f32 weight * 64 row-major][f32 bias * 8][u8 activation * 8]
//!         [u8 routing active (0/1)][f32 routing base angle][f32 routing opening angle]
//!     [u32 payload length][payload fields]
//! ```
//! A node with an unknown cell type tag keeps its common block and decodes as a Base node.
//!
//! # Payloads
//! Optional integers are `[u8 present (0/1)][i32 value]`. Embedded genomes are
//! `[u8 0][u32 length][bytes]` for a literal and `[u8 1]` for the self-copy sentinel.
//! ```text
//! Base        (empty)
//! Depot       [u8 mode]
//! Constructor [i32 auto trigger][i32 activation time][f32 angle 1][f32 angle 2][genome]
//! Sensor      [i32 auto trigger][f32 min density][opt min range][opt max range]
//!             [opt color][u8 restrict to mutants]
//! Oscillator  [i32 auto trigger][i32 alternation interval]
//! Attacker    [u8 mode]
//! Injector    [u8 mode][genome]
//! Muscle      [u8 mode tag][u32 mode length][mode fields]
//!             Bending: [f32 max angle deviation][f32 forward velocity][f32 backward velocity][i32 offset]
//! Defender    [u8 mode]
//! Reconnector [opt color][u8 restrict to mutants]
//! Detonator   [i32 countdown]
//! ```

use crate::genome_byte_reader::GenomeByteReader;
use tracing::debug;

pub const CURRENT_GENOME_FORMAT_VERSION: u8 = 1;

/// Size of every section length prefix.
pub const SECTION_LENGTH_BYTE_COUNT: usize = 4;

/// Format version byte plus header length prefix.
pub const GENOME_PRELUDE_BYTE_COUNT: usize = 1 + SECTION_LENGTH_BYTE_COUNT;

/// Cell type tag plus node length prefix.
pub const NODE_FRAME_BYTE_COUNT: usize = 1 + SECTION_LENGTH_BYTE_COUNT;

pub(crate) const REPETITIONS_TAG_FINITE: u8 = 0;
pub(crate) const REPETITIONS_TAG_INFINITE: u8 = 1;

pub(crate) const EMBEDDED_GENOME_TAG_LITERAL: u8 = 0;
pub(crate) const EMBEDDED_GENOME_TAG_SELF_COPY: u8 = 1;

/// Forward-compatibility policy for data this reader does not understand.
///
/// Everything left in `reader` is skipped. Unknown data is neither interpreted nor preserved,
/// so re-encoding a genome drops it.
pub(crate) fn discard_unknown(reader: &mut GenomeByteReader<'_>, section: &'static str) {
    let offset = reader.absolute_position();
    let skipped = reader.skip_remaining();
    if skipped > 0 {
        debug!(section, offset, skipped, "Skipped genome bytes this reader does not understand");
    }
}
