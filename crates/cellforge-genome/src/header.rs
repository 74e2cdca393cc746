// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::{ConstructionShape, ConstructorAngleAlignment, INFINITE_REPETITIONS, MAX_BRANCHES};
use std::fmt::{Display, Formatter};

//region Repetitions

/// How often a branch's node sequence is repeated during construction.
///
/// `Infinite` is a separate variant, so no arithmetic on a finite count can turn into (or out
/// of) the unbounded case by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumRepetitions {
    Finite(u32),
    Infinite,
}

impl Default for NumRepetitions {
    fn default() -> Self {
        NumRepetitions::Finite(1)
    }
}

impl NumRepetitions {
    pub fn is_infinite(&self) -> bool {
        matches!(self, NumRepetitions::Infinite)
    }

    pub fn finite(&self) -> Option<u32> {
        match self {
            NumRepetitions::Finite(count) => Some(*count),
            NumRepetitions::Infinite => None,
        }
    }

    /// Integer projection: `Infinite` becomes [`INFINITE_REPETITIONS`]. Finite counts that would
    /// collide with it saturate one below.
    pub fn to_raw(&self) -> i32 {
        match self {
            NumRepetitions::Finite(count) => {
                i32::try_from(*count).map_or(INFINITE_REPETITIONS - 1, |c| {
                    c.min(INFINITE_REPETITIONS - 1)
                })
            }
            NumRepetitions::Infinite => INFINITE_REPETITIONS,
        }
    }

    /// Inverse of [`Self::to_raw`]. Negative counts map to zero.
    pub fn from_raw(raw: i32) -> Self {
        if raw == INFINITE_REPETITIONS {
            NumRepetitions::Infinite
        } else {
            NumRepetitions::Finite(raw.max(0) as u32)
        }
    }
}

impl Display for NumRepetitions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumRepetitions::Finite(count) => write!(f, "{count}"),
            NumRepetitions::Infinite => write!(f, "infinite"),
        }
    }
}

//endregion

//region Header

/// Construction-shape metadata of a genome.
#[derive(Debug, Clone, PartialEq)]
pub struct GenomeHeaderDescription {
    pub shape: ConstructionShape,
    /// Raw storage value; see [`Self::get_num_branches`] for the effective count.
    pub num_branches: i32,
    pub separate_construction: bool,
    pub angle_alignment: ConstructorAngleAlignment,
    pub stiffness: f32,
    pub connection_distance: f32,
    pub num_repetitions: NumRepetitions,
    /// Degrees
    pub concatenation_angle1: f32,
    /// Degrees
    pub concatenation_angle2: f32,
    /// Degrees
    pub front_angle: f32,
}

impl Default for GenomeHeaderDescription {
    fn default() -> Self {
        Self {
            shape: ConstructionShape::Custom,
            num_branches: 1,
            separate_construction: true,
            angle_alignment: ConstructorAngleAlignment::Deg60,
            stiffness: 1.0,
            connection_distance: 1.0,
            num_repetitions: NumRepetitions::Finite(1),
            concatenation_angle1: 0.0,
            concatenation_angle2: 0.0,
            front_angle: 0.0,
        }
    }
}

impl GenomeHeaderDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective number of construction branches, always in `1..=6`.
    ///
    /// Separate construction always uses a single branch. Otherwise the raw value wraps
    /// modulo 6: `((raw + 5) mod 6) + 1`.
    pub fn get_num_branches(&self) -> i32 {
        if self.separate_construction {
            1
        } else {
            (self.num_branches.rem_euclid(MAX_BRANCHES) + MAX_BRANCHES - 1) % MAX_BRANCHES + 1
        }
    }

    pub fn with_shape(mut self, value: ConstructionShape) -> Self {
        self.shape = value;
        self
    }

    pub fn with_num_branches(mut self, value: i32) -> Self {
        self.num_branches = value;
        self
    }

    pub fn with_separate_construction(mut self, value: bool) -> Self {
        self.separate_construction = value;
        self
    }

    pub fn with_angle_alignment(mut self, value: ConstructorAngleAlignment) -> Self {
        self.angle_alignment = value;
        self
    }

    pub fn with_stiffness(mut self, value: f32) -> Self {
        self.stiffness = value;
        self
    }

    pub fn with_connection_distance(mut self, value: f32) -> Self {
        self.connection_distance = value;
        self
    }

    pub fn with_num_repetitions(mut self, value: u32) -> Self {
        self.num_repetitions = NumRepetitions::Finite(value);
        self
    }

    pub fn with_infinite_repetitions(mut self) -> Self {
        self.num_repetitions = NumRepetitions::Infinite;
        self
    }

    pub fn with_concatenation_angle1(mut self, value: f32) -> Self {
        self.concatenation_angle1 = value;
        self
    }

    pub fn with_concatenation_angle2(mut self, value: f32) -> Self {
        self.concatenation_angle2 = value;
        self
    }

    pub fn with_front_angle(mut self, value: f32) -> Self {
        self.front_angle = value;
        self
    }
}

//endregion
