// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # cellforge-serialization
//!
//! Versioned binary codec for [`GenomeDescription`](cellforge_genome::GenomeDescription)
//! values, plus structural analysis that works directly on the encoded bytes.
//!
//! ## Core Components
//!
//! - **[`encode`] / [`decode`]** - Pure conversion between the model and wire format version 1
//!   (layout documented in [`format`])
//! - **[`EncodedGenome`]** - Zero-copy view over encoded bytes, node by node
//! - **[`analysis`]** - Node counts, address/index conversion and [`GenomeStatistics`]
//! - **[`SharedGenomeBytes`]** - Copy-on-write buffer for handing genomes to readers
//! - **[`GenomeSerializable`]** - Per-section wire coding trait
//!
//! ## Basic Usage
//!
//! ```rust
//! use cellforge_genome::{CellGenomeDescription, ConstructorGenomeDescription, GenomeDescription};
//! use cellforge_serialization::{decode, encode, get_num_nodes_recursively};
//!
//! let inner = encode(&GenomeDescription::new().with_cell(CellGenomeDescription::new()));
//! let genome = GenomeDescription::new().with_cell(
//!     CellGenomeDescription::new()
//!         .with_cell_type(ConstructorGenomeDescription::new().with_genome(inner)),
//! );
//!
//! let bytes = encode(&genome);
//! assert_eq!(decode(&bytes).unwrap(), genome);
//! assert_eq!(get_num_nodes_recursively(&bytes, false).unwrap(), 1);
//! assert_eq!(get_num_nodes_recursively(&bytes, true).unwrap(), 2);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod analysis;
mod codec;
mod encoded_genome;
mod error;
pub mod format;
mod genome_byte_reader;
mod genome_byte_writer;
mod genome_serializable;
mod implementations;
mod shared_genome_bytes;

pub use analysis::{
    convert_node_address_to_node_index, convert_node_index_to_node_address, get_num_branches,
    get_num_nodes_recursively, get_num_nodes_recursively_of, get_num_repetitions,
    GenomeStatistics,
};
pub use codec::{decode, encode};
pub use encoded_genome::{decode_header, EncodedGenome, EncodedNode, EncodedNodes};
pub use error::{DecodeError, DecodeResult};
pub use format::CURRENT_GENOME_FORMAT_VERSION;
pub use genome_byte_reader::GenomeByteReader;
pub use genome_byte_writer::{GenomeByteWriter, SectionStart};
pub use genome_serializable::GenomeSerializable;
pub use shared_genome_bytes::SharedGenomeBytes;
