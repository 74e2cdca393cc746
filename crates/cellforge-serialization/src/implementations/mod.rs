// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! [`GenomeSerializable`](crate::GenomeSerializable) implementations for the genome model.

mod cell;
mod cell_type_data;
mod header;

pub(crate) use cell::decode_node;
pub(crate) use cell_type_data::{read_embedded_genome_ref, EmbeddedGenomeRef};
