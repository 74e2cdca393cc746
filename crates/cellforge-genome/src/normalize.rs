// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Editor clamp pass.
//!
//! Builders never validate and the codec never clamps. Editors call `normalize()` after user
//! edits and before re-encoding. Non-finite floats fall back to the field default.

use crate::{
    BendingGenomeDescription, CellGenomeDescription, CellTypeGenomeDescription,
    GenomeDescription, GenomeHeaderDescription, MuscleModeGenomeDescription,
    NeuralNetworkGenomeDescription, NumRepetitions, SignalRoutingRestrictionGenomeDescription,
    MAX_BRANCHES, MAX_COLORS, MAX_MUSCLE_ANGLE_DEVIATION, MAX_REQUIRED_ADDITIONAL_CONNECTIONS,
    MIN_CONNECTION_DISTANCE, MIN_NODE_ENERGY,
};
use tracing::trace;

fn clamp_f32(field: &'static str, value: &mut f32, min: f32, max: f32, fallback: f32) {
    let clamped = if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    };
    if clamped.to_bits() != value.to_bits() {
        trace!(field, from = *value, to = clamped, "normalized genome value");
        *value = clamped;
    }
}

fn clamp_i32(field: &'static str, value: &mut i32, min: i32, max: i32) {
    let clamped = (*value).clamp(min, max);
    if clamped != *value {
        trace!(field, from = *value, to = clamped, "normalized genome value");
        *value = clamped;
    }
}

fn clamp_color(field: &'static str, value: &mut Option<i32>) {
    if let Some(color) = value {
        clamp_i32(field, color, 0, MAX_COLORS - 1);
    }
}

impl GenomeDescription {
    /// Clamps every field of the header and of every node into its legal range.
    pub fn normalize(&mut self) {
        self.header.normalize();
        for cell in &mut self.cells {
            cell.normalize();
        }
    }
}

impl GenomeHeaderDescription {
    /// Keeps the effective branch count while bringing the raw value into `0..6`.
    pub fn normalize(&mut self) {
        let raw = self.num_branches.rem_euclid(MAX_BRANCHES);
        if raw != self.num_branches {
            trace!(from = self.num_branches, to = raw, "normalized branch count");
            self.num_branches = raw;
        }
        clamp_f32("stiffness", &mut self.stiffness, 0.0, 1.0, 1.0);
        clamp_f32(
            "connection_distance",
            &mut self.connection_distance,
            MIN_CONNECTION_DISTANCE,
            f32::MAX,
            1.0,
        );
        if self.num_repetitions == NumRepetitions::Finite(0) {
            trace!("normalized zero repetitions to one");
            self.num_repetitions = NumRepetitions::Finite(1);
        }
        clamp_f32(
            "concatenation_angle1",
            &mut self.concatenation_angle1,
            -180.0,
            180.0,
            0.0,
        );
        clamp_f32(
            "concatenation_angle2",
            &mut self.concatenation_angle2,
            -180.0,
            180.0,
            0.0,
        );
        clamp_f32("front_angle", &mut self.front_angle, -180.0, 180.0, 0.0);
    }
}

impl CellGenomeDescription {
    pub fn normalize(&mut self) {
        clamp_f32("reference_angle", &mut self.reference_angle, -180.0, 180.0, 0.0);
        clamp_f32("energy", &mut self.energy, MIN_NODE_ENERGY, f32::MAX, 100.0);
        clamp_i32("color", &mut self.color, 0, MAX_COLORS - 1);
        clamp_i32(
            "num_required_additional_connections",
            &mut self.num_required_additional_connections,
            0,
            MAX_REQUIRED_ADDITIONAL_CONNECTIONS,
        );
        self.neural_network.normalize();
        self.signal_routing_restriction.normalize();
        self.cell_type_data.normalize();
    }
}

impl NeuralNetworkGenomeDescription {
    /// Replaces non-finite weights and biases by zero.
    pub fn normalize(&mut self) {
        for weight in self.weights.iter_mut() {
            clamp_f32("weight", weight, f32::MIN, f32::MAX, 0.0);
        }
        for bias in self.biases.iter_mut() {
            clamp_f32("bias", bias, f32::MIN, f32::MAX, 0.0);
        }
    }
}

impl SignalRoutingRestrictionGenomeDescription {
    pub fn normalize(&mut self) {
        clamp_f32("base_angle", &mut self.base_angle, -180.0, 180.0, 0.0);
        clamp_f32("opening_angle", &mut self.opening_angle, 0.0, 360.0, 0.0);
    }
}

impl BendingGenomeDescription {
    pub fn normalize(&mut self) {
        clamp_f32(
            "max_angle_deviation",
            &mut self.max_angle_deviation,
            0.0,
            MAX_MUSCLE_ANGLE_DEVIATION,
            20.0,
        );
        clamp_f32("forward_velocity", &mut self.forward_velocity, 0.0, 1.0, 0.5);
        clamp_f32("backward_velocity", &mut self.backward_velocity, 0.0, 1.0, 0.5);
    }
}

impl CellTypeGenomeDescription {
    pub fn normalize(&mut self) {
        match self {
            CellTypeGenomeDescription::Base(_)
            | CellTypeGenomeDescription::Depot(_)
            | CellTypeGenomeDescription::Attacker(_)
            | CellTypeGenomeDescription::Defender(_) => {}
            CellTypeGenomeDescription::Constructor(constructor) => {
                clamp_i32(
                    "auto_trigger_interval",
                    &mut constructor.auto_trigger_interval,
                    0,
                    i32::MAX,
                );
                clamp_i32(
                    "construction_activation_time",
                    &mut constructor.construction_activation_time,
                    0,
                    i32::MAX,
                );
                clamp_f32(
                    "construction_angle1",
                    &mut constructor.construction_angle1,
                    -180.0,
                    180.0,
                    0.0,
                );
                clamp_f32(
                    "construction_angle2",
                    &mut constructor.construction_angle2,
                    -180.0,
                    180.0,
                    0.0,
                );
            }
            CellTypeGenomeDescription::Sensor(sensor) => {
                clamp_i32(
                    "auto_trigger_interval",
                    &mut sensor.auto_trigger_interval,
                    0,
                    i32::MAX,
                );
                clamp_f32("min_density", &mut sensor.min_density, 0.0, 1.0, 0.05);
                if let Some(min_range) = sensor.min_range.as_mut() {
                    clamp_i32("min_range", min_range, 0, i32::MAX);
                }
                if let Some(max_range) = sensor.max_range.as_mut() {
                    clamp_i32("max_range", max_range, 0, i32::MAX);
                }
                clamp_color("restrict_to_color", &mut sensor.restrict_to_color);
            }
            CellTypeGenomeDescription::Oscillator(oscillator) => {
                clamp_i32(
                    "auto_trigger_interval",
                    &mut oscillator.auto_trigger_interval,
                    0,
                    i32::MAX,
                );
                clamp_i32(
                    "alternation_interval",
                    &mut oscillator.alternation_interval,
                    0,
                    i32::MAX,
                );
            }
            CellTypeGenomeDescription::Injector(_) => {}
            CellTypeGenomeDescription::Muscle(muscle) => match &mut muscle.mode {
                MuscleModeGenomeDescription::Bending(bending) => bending.normalize(),
            },
            CellTypeGenomeDescription::Reconnector(reconnector) => {
                clamp_color("restrict_to_color", &mut reconnector.restrict_to_color);
            }
            CellTypeGenomeDescription::Detonator(detonator) => {
                clamp_i32("countdown", &mut detonator.countdown, 0, i32::MAX);
            }
        }
    }
}
