// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # cellforge-genome
//!
//! Typed, in-memory description of a cellforge genome: a [`GenomeHeaderDescription`] plus an
//! ordered sequence of [`CellGenomeDescription`] nodes. Each node carries exactly one of the
//! eleven cell type payloads through [`CellTypeGenomeDescription`], so the advertised
//! [`CellType`] can never disagree with the payload.
//!
//! Values are built with consuming `with_*` builders and may be mutated in place through their
//! public fields. Builders never validate; editors run [`GenomeDescription::normalize`] before
//! handing a genome to the codec.
//!
//! ```rust
//! use cellforge_genome::*;
//!
//! let genome = GenomeDescription::new()
//!     .with_header(GenomeHeaderDescription::new().with_infinite_repetitions())
//!     .with_cell(CellGenomeDescription::new().with_energy(120.0))
//!     .with_cell(
//!         CellGenomeDescription::new()
//!             .with_cell_type(ConstructorGenomeDescription::new().with_make_self_copy()),
//!     );
//!
//! assert_eq!(genome.num_nodes(), 2);
//! assert_eq!(genome.cells[1].get_cell_type(), CellType::Constructor);
//! assert!(!genome.cells[1].has_genome());
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
mod common_macros;
mod cell;
mod cell_type_constants;
mod cell_type_data;
mod constants;
mod error;
mod genome;
mod header;
mod neural_network;
mod normalize;

pub use cell::{CellGenomeDescription, SignalRoutingRestrictionGenomeDescription};
pub use cell_type_constants::*;
pub use cell_type_data::*;
pub use constants::*;
pub use error::{GenomeModelError, GenomeModelResult};
pub use genome::GenomeDescription;
pub use header::{GenomeHeaderDescription, NumRepetitions};
pub use neural_network::NeuralNetworkGenomeDescription;
