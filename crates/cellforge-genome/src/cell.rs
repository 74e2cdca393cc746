// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    CellType, CellTypeGenomeDescription, EmbeddedGenome, GenomeModelError, GenomeModelResult,
    NeuralNetworkGenomeDescription,
};

/// Angular gate restricting which incoming signal directions a node accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalRoutingRestrictionGenomeDescription {
    pub active: bool,
    pub base_angle: f32,
    pub opening_angle: f32,
}

impl SignalRoutingRestrictionGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(mut self, value: bool) -> Self {
        self.active = value;
        self
    }

    pub fn with_base_angle(mut self, value: f32) -> Self {
        self.base_angle = value;
        self
    }

    pub fn with_opening_angle(mut self, value: f32) -> Self {
        self.opening_angle = value;
        self
    }
}

/// One node of a genome: common cell properties plus a cell type payload.
///
/// The cell type is never stored on its own; [`Self::get_cell_type`] projects it from
/// [`Self::cell_type_data`].
#[derive(Debug, Clone, PartialEq)]
pub struct CellGenomeDescription {
    /// Degrees
    pub reference_angle: f32,
    pub energy: f32,
    pub color: i32,
    /// Applies from the second node of a sequence onwards
    pub num_required_additional_connections: i32,
    pub neural_network: NeuralNetworkGenomeDescription,
    pub cell_type_data: CellTypeGenomeDescription,
    pub signal_routing_restriction: SignalRoutingRestrictionGenomeDescription,
}

impl Default for CellGenomeDescription {
    fn default() -> Self {
        Self {
            reference_angle: 0.0,
            energy: 100.0,
            color: 0,
            num_required_additional_connections: 0,
            neural_network: NeuralNetworkGenomeDescription::default(),
            cell_type_data: CellTypeGenomeDescription::default(),
            signal_routing_restriction: SignalRoutingRestrictionGenomeDescription::default(),
        }
    }
}

impl CellGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    //region Builders

    pub fn with_reference_angle(mut self, value: f32) -> Self {
        self.reference_angle = value;
        self
    }

    pub fn with_energy(mut self, value: f32) -> Self {
        self.energy = value;
        self
    }

    pub fn with_color(mut self, value: i32) -> Self {
        self.color = value;
        self
    }

    pub fn with_num_required_additional_connections(mut self, value: i32) -> Self {
        self.num_required_additional_connections = value;
        self
    }

    pub fn with_neural_network(mut self, value: NeuralNetworkGenomeDescription) -> Self {
        self.neural_network = value;
        self
    }

    /// Replaces the cell type payload. Accepts any payload struct, e.g.
    /// `with_cell_type(SensorGenomeDescription::new())`.
    pub fn with_cell_type(mut self, value: impl Into<CellTypeGenomeDescription>) -> Self {
        self.cell_type_data = value.into();
        self
    }

    pub fn with_signal_routing_restriction(
        mut self,
        value: SignalRoutingRestrictionGenomeDescription,
    ) -> Self {
        self.signal_routing_restriction = value;
        self
    }

    //endregion

    //region Cell Type

    pub fn get_cell_type(&self) -> CellType {
        self.cell_type_data.get_cell_type()
    }

    /// Whether this node holds literal embedded genome bytes.
    pub fn has_genome(&self) -> bool {
        self.get_genome().is_some()
    }

    /// Literal embedded genome bytes. `None` for the self-copy sentinel and for every cell
    /// type without a genome slot.
    pub fn get_genome(&self) -> Option<&[u8]> {
        self.cell_type_data
            .embedded_genome()
            .and_then(EmbeddedGenome::as_literal)
    }

    /// `Some(true)` if the genome slot holds the self-copy sentinel, `None` if the cell type
    /// has no genome slot.
    pub fn is_make_genome_copy(&self) -> Option<bool> {
        self.cell_type_data
            .embedded_genome()
            .map(EmbeddedGenome::is_self_copy)
    }

    /// Mutable access to the literal embedded genome bytes.
    pub fn genome_mut(&mut self) -> GenomeModelResult<&mut Vec<u8>> {
        let cell_type = self.get_cell_type();
        match self.cell_type_data.embedded_genome_mut() {
            Some(EmbeddedGenome::Literal(bytes)) => Ok(bytes),
            Some(EmbeddedGenome::SelfCopy) => Err(GenomeModelError::SelfCopySentinel { cell_type }),
            None => Err(GenomeModelError::NoEmbeddedGenome { cell_type }),
        }
    }

    /// Replaces the literal embedded genome bytes. Fails on the self-copy sentinel and on cell
    /// types without a genome slot; switch the union case through the payload builders instead.
    pub fn set_genome(&mut self, genome: Vec<u8>) -> GenomeModelResult<&mut Self> {
        *self.genome_mut()? = genome;
        Ok(self)
    }

    //endregion
}
