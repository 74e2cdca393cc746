// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::{CellGenomeDescription, GenomeHeaderDescription, NumRepetitions};

/// A complete genome: construction header plus the node sequence in construction order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenomeDescription {
    pub header: GenomeHeaderDescription,
    pub cells: Vec<CellGenomeDescription>,
}

impl GenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, value: GenomeHeaderDescription) -> Self {
        self.header = value;
        self
    }

    pub fn with_cells(mut self, value: Vec<CellGenomeDescription>) -> Self {
        self.cells = value;
        self
    }

    /// Appends one node to the end of the construction sequence.
    pub fn with_cell(mut self, value: CellGenomeDescription) -> Self {
        self.cells.push(value);
        self
    }

    /// Number of top-level nodes, i.e. cells per repetition.
    pub fn num_nodes(&self) -> usize {
        self.cells.len()
    }

    pub fn num_branches(&self) -> i32 {
        self.header.get_num_branches()
    }

    pub fn num_repetitions(&self) -> NumRepetitions {
        self.header.num_repetitions
    }

    /// Literal genomes embedded by the top-level nodes, in node order. Sentinels are skipped.
    pub fn embedded_genomes(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.iter().filter_map(CellGenomeDescription::get_genome)
    }
}
