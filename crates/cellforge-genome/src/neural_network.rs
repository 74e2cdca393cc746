// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::{ActivationFunction, MAX_CHANNELS, NUM_NEURAL_NETWORK_WEIGHTS};

/// Fixed-size neural network attached to every genome node.
///
/// Weights are stored flat in row-major order; use [`Self::weight_index`] rather than
/// computing offsets by hand. The default network is the identity: unit diagonal, zero biases
/// and identity activations on every channel.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNetworkGenomeDescription {
    pub weights: [f32; NUM_NEURAL_NETWORK_WEIGHTS],
    pub biases: [f32; MAX_CHANNELS],
    pub activation_functions: [ActivationFunction; MAX_CHANNELS],
}

impl Default for NeuralNetworkGenomeDescription {
    fn default() -> Self {
        let mut weights = [0.0f32; NUM_NEURAL_NETWORK_WEIGHTS];
        for channel in 0..MAX_CHANNELS {
            weights[Self::weight_index(channel, channel)] = 1.0;
        }
        Self {
            weights,
            biases: [0.0; MAX_CHANNELS],
            activation_functions: [ActivationFunction::Identity; MAX_CHANNELS],
        }
    }
}

impl NeuralNetworkGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat index of the weight at (`row`, `col`). Both must be below [`MAX_CHANNELS`].
    pub const fn weight_index(row: usize, col: usize) -> usize {
        debug_assert!(row < MAX_CHANNELS && col < MAX_CHANNELS);
        row * MAX_CHANNELS + col
    }

    /// # Panics
    /// If `row` or `col` is not below [`MAX_CHANNELS`].
    pub fn get_weight(&self, row: usize, col: usize) -> f32 {
        self.weight_row(row)[col]
    }

    /// # Panics
    /// If `row` or `col` is not below [`MAX_CHANNELS`].
    pub fn set_weight(&mut self, row: usize, col: usize, value: f32) {
        self.weight_row_mut(row)[col] = value;
    }

    /// Weights feeding output channel `row`.
    pub fn weight_row(&self, row: usize) -> &[f32] {
        &self.weights[Self::row_range(row)]
    }

    pub fn weight_row_mut(&mut self, row: usize) -> &mut [f32] {
        &mut self.weights[Self::row_range(row)]
    }

    fn row_range(row: usize) -> std::ops::Range<usize> {
        assert!(row < MAX_CHANNELS, "weight row {row} out of range");
        let start = row * MAX_CHANNELS;
        start..start + MAX_CHANNELS
    }

    pub fn with_weight(mut self, row: usize, col: usize, value: f32) -> Self {
        self.set_weight(row, col, value);
        self
    }

    pub fn with_bias(mut self, channel: usize, value: f32) -> Self {
        self.biases[channel] = value;
        self
    }

    pub fn with_activation_function(mut self, channel: usize, value: ActivationFunction) -> Self {
        self.activation_functions[channel] = value;
        self
    }

    /// True if this is the default identity network.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let nn = NeuralNetworkGenomeDescription::default();
        for row in 0..MAX_CHANNELS {
            for col in 0..MAX_CHANNELS {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(nn.get_weight(row, col), expected);
            }
        }
        assert!(nn.biases.iter().all(|b| *b == 0.0));
        assert!(nn
            .activation_functions
            .iter()
            .all(|f| *f == ActivationFunction::Identity));
        assert!(nn.is_identity());
    }

    #[test]
    fn test_row_major_indexing() {
        let nn = NeuralNetworkGenomeDescription::new().with_weight(2, 1, 0.5);
        assert_eq!(nn.weights[2 * MAX_CHANNELS + 1], 0.5);
        assert_eq!(nn.weight_row(2)[1], 0.5);
        assert_eq!(nn.weight_row(2)[2], 1.0);
        assert!(!nn.is_identity());
    }

    #[test]
    #[should_panic]
    fn test_column_past_last_channel_does_not_alias_next_row() {
        let _ = NeuralNetworkGenomeDescription::new().with_weight(0, MAX_CHANNELS + 1, 7.0);
    }

    #[test]
    #[should_panic]
    fn test_reading_column_past_last_channel_panics() {
        NeuralNetworkGenomeDescription::new().get_weight(1, MAX_CHANNELS);
    }

    #[test]
    #[should_panic]
    fn test_row_past_last_channel_panics() {
        NeuralNetworkGenomeDescription::new().weight_row(MAX_CHANNELS);
    }

    #[test]
    fn test_last_weight_is_reachable() {
        let mut nn = NeuralNetworkGenomeDescription::new();
        nn.set_weight(MAX_CHANNELS - 1, MAX_CHANNELS - 2, 3.0);
        assert_eq!(nn.weights[NUM_NEURAL_NETWORK_WEIGHTS - 2], 3.0);
        assert_eq!(nn.get_weight(MAX_CHANNELS - 1, MAX_CHANNELS - 1), 1.0);
        nn.weight_row_mut(0)[0] = 0.0;
        assert_eq!(nn.get_weight(0, 0), 0.0);
    }

    #[test]
    fn test_bias_and_activation_builders() {
        let nn = NeuralNetworkGenomeDescription::new()
            .with_bias(3, -0.25)
            .with_activation_function(3, ActivationFunction::Sigmoid);
        assert_eq!(nn.biases[3], -0.25);
        assert_eq!(nn.activation_functions[3], ActivationFunction::Sigmoid);
        assert_eq!(nn.activation_functions[4], ActivationFunction::Identity);
    }
}
