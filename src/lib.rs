// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # cellforge
//!
//! Genome description model and binary codec for cellforge organisms.
//!
//! A genome is a construction recipe: a header describing the construction shape, followed by
//! an ordered sequence of cell nodes. Constructor and injector nodes may carry a complete
//! genome of their own, either as literal bytes or as the "copy my own genome" sentinel.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! cellforge = "0.1"
//! ```
//!
//! ```rust
//! use cellforge::prelude::*;
//!
//! let genome = GenomeDescription::new()
//!     .with_header(
//!         GenomeHeaderDescription::new()
//!             .with_separate_construction(false)
//!             .with_num_branches(3),
//!     )
//!     .with_cell(CellGenomeDescription::new().with_cell_type(SensorGenomeDescription::new()))
//!     .with_cell(
//!         CellGenomeDescription::new()
//!             .with_cell_type(ConstructorGenomeDescription::new().with_make_self_copy()),
//!     );
//!
//! let bytes = encode(&genome);
//! assert_eq!(decode(&bytes)?, genome);
//!
//! let stats = GenomeStatistics::from_bytes(&bytes, true)?;
//! assert_eq!(stats.num_branches, 3);
//! assert_eq!(stats.num_cells_constructed, Some(6));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Model: cellforge-genome                                │
//! │  (header, cell nodes, cell type payloads, normalize)    │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Codec: cellforge-serialization                         │
//! │  (wire format v1, zero-copy views, analysis)            │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Tools: cellforge-config, cellforge-observability       │
//! │  (cellforge.toml, console logging, inspect_genome)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export the model
pub use cellforge_genome as genome;

// Re-export the codec
pub use cellforge_serialization as serialization;

// Re-export tool infrastructure
pub use cellforge_config as config;
pub use cellforge_observability as observability;

pub mod inspect;

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::genome::*;

    pub use crate::serialization::{
        convert_node_address_to_node_index, convert_node_index_to_node_address, decode,
        encode, get_num_nodes_recursively, get_num_repetitions, DecodeError, DecodeResult,
        EncodedGenome, GenomeStatistics, SharedGenomeBytes,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_round_trip() {
        let genome = GenomeDescription::new().with_cell(CellGenomeDescription::new());
        let bytes = encode(&genome);
        assert_eq!(decode(&bytes).unwrap(), genome);
    }

    #[test]
    fn test_version_is_set() {
        assert!(!super::VERSION.is_empty());
    }
}
