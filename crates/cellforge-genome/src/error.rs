// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::CellType;

/// Errors raised by the genome description model.
///
/// These are programming errors surfaced explicitly: asking a node for literal genome bytes
/// it does not hold, or converting a byte into an enum that has no such value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenomeModelError {
    /// The node's cell type carries no embedded genome.
    #[error("{cell_type} node has no embedded genome")]
    NoEmbeddedGenome { cell_type: CellType },

    /// The node's genome slot holds the self-copy sentinel instead of literal bytes.
    #[error("{cell_type} node holds the self-copy sentinel instead of a literal genome")]
    SelfCopySentinel { cell_type: CellType },

    #[error("{value} is not a valid {enum_name}")]
    UnknownEnumValue { enum_name: &'static str, value: u8 },
}

pub type GenomeModelResult<T> = Result<T, GenomeModelError>;
