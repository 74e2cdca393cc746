// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/// Number of signal channels per cell. Fixes the neural network dimensions.
pub const MAX_CHANNELS: usize = 8;

/// Number of weights in a node's neural network (row-major `MAX_CHANNELS x MAX_CHANNELS`).
pub const NUM_NEURAL_NETWORK_WEIGHTS: usize = MAX_CHANNELS * MAX_CHANNELS;

/// Number of distinct cell colors.
pub const MAX_COLORS: i32 = 7;

/// Raw integer projection of infinite repetitions.
pub const INFINITE_REPETITIONS: i32 = i32::MAX;

/// Number of construction branches before the modulo wrap-around.
pub const MAX_BRANCHES: i32 = 6;

//region Normalization bounds

pub const MIN_NODE_ENERGY: f32 = 0.1;
pub const MIN_CONNECTION_DISTANCE: f32 = 0.1;
pub const MAX_REQUIRED_ADDITIONAL_CONNECTIONS: i32 = 6;
pub const MAX_MUSCLE_ANGLE_DEVIATION: f32 = 180.0;

//endregion
