// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cell type payloads of genome nodes.
//!
//! [`CellTypeGenomeDescription`] is the closed sum over the eleven payloads. Constructor and
//! Injector payloads embed a genome of their own through [`EmbeddedGenome`].

use crate::{
    CellType, DefenderMode, EnergyDistributionMode, InjectorMode, MuscleMode,
    ReconnectorRestrictToMutants, SensorRestrictToMutants,
};

//region Embedded Genome

/// Genome slot of a Constructor or Injector node.
///
/// Either literal encoded genome bytes, or the sentinel asking the engine to use the genome
/// currently held by the owning cell. An empty literal and the sentinel are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmbeddedGenome {
    Literal(Vec<u8>),
    SelfCopy,
}

impl Default for EmbeddedGenome {
    fn default() -> Self {
        EmbeddedGenome::Literal(Vec::new())
    }
}

impl EmbeddedGenome {
    pub fn is_self_copy(&self) -> bool {
        matches!(self, EmbeddedGenome::SelfCopy)
    }

    pub fn as_literal(&self) -> Option<&[u8]> {
        match self {
            EmbeddedGenome::Literal(bytes) => Some(bytes),
            EmbeddedGenome::SelfCopy => None,
        }
    }

    pub fn as_literal_mut(&mut self) -> Option<&mut Vec<u8>> {
        match self {
            EmbeddedGenome::Literal(bytes) => Some(bytes),
            EmbeddedGenome::SelfCopy => None,
        }
    }
}

//endregion

//region Payloads

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseGenomeDescription;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepotGenomeDescription {
    pub mode: EnergyDistributionMode,
}

impl DepotGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, value: EnergyDistributionMode) -> Self {
        self.mode = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorGenomeDescription {
    /// 0 = triggered by signal, > 0 = automatic trigger every N time steps
    pub auto_trigger_interval: i32,
    pub construction_activation_time: i32,
    pub genome: EmbeddedGenome,
    pub construction_angle1: f32,
    pub construction_angle2: f32,
}

impl Default for ConstructorGenomeDescription {
    fn default() -> Self {
        Self {
            auto_trigger_interval: 100,
            construction_activation_time: 100,
            genome: EmbeddedGenome::default(),
            construction_angle1: 0.0,
            construction_angle2: 0.0,
        }
    }
}

impl ConstructorGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_trigger_interval(mut self, value: i32) -> Self {
        self.auto_trigger_interval = value;
        self
    }

    pub fn with_construction_activation_time(mut self, value: i32) -> Self {
        self.construction_activation_time = value;
        self
    }

    /// Embeds a literal sub-genome, replacing the sentinel if it was set.
    pub fn with_genome(mut self, value: Vec<u8>) -> Self {
        self.genome = EmbeddedGenome::Literal(value);
        self
    }

    pub fn with_make_self_copy(mut self) -> Self {
        self.genome = EmbeddedGenome::SelfCopy;
        self
    }

    pub fn with_construction_angle1(mut self, value: f32) -> Self {
        self.construction_angle1 = value;
        self
    }

    pub fn with_construction_angle2(mut self, value: f32) -> Self {
        self.construction_angle2 = value;
        self
    }

    pub fn is_make_genome_copy(&self) -> bool {
        self.genome.is_self_copy()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorGenomeDescription {
    /// 0 = triggered by signal, > 0 = automatic trigger every N time steps
    pub auto_trigger_interval: i32,
    pub min_density: f32,
    pub min_range: Option<i32>,
    pub max_range: Option<i32>,
    pub restrict_to_color: Option<i32>,
    pub restrict_to_mutants: SensorRestrictToMutants,
}

impl Default for SensorGenomeDescription {
    fn default() -> Self {
        Self {
            auto_trigger_interval: 10,
            min_density: 0.05,
            min_range: None,
            max_range: None,
            restrict_to_color: None,
            restrict_to_mutants: SensorRestrictToMutants::NoRestriction,
        }
    }
}

impl SensorGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_trigger_interval(mut self, value: i32) -> Self {
        self.auto_trigger_interval = value;
        self
    }

    pub fn with_min_density(mut self, value: f32) -> Self {
        self.min_density = value;
        self
    }

    pub fn with_min_range(mut self, value: Option<i32>) -> Self {
        self.min_range = value;
        self
    }

    pub fn with_max_range(mut self, value: Option<i32>) -> Self {
        self.max_range = value;
        self
    }

    pub fn with_restrict_to_color(mut self, value: Option<i32>) -> Self {
        self.restrict_to_color = value;
        self
    }

    pub fn with_restrict_to_mutants(mut self, value: SensorRestrictToMutants) -> Self {
        self.restrict_to_mutants = value;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OscillatorGenomeDescription {
    /// 0 = no triggering, > 0 = automatic pulse every N time steps
    pub auto_trigger_interval: i32,
    /// 0 = never alternate, N = alternate the pulse sign after every N-th pulse
    pub alternation_interval: i32,
}

impl OscillatorGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_trigger_interval(mut self, value: i32) -> Self {
        self.auto_trigger_interval = value;
        self
    }

    pub fn with_alternation_interval(mut self, value: i32) -> Self {
        self.alternation_interval = value;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttackerGenomeDescription {
    pub mode: EnergyDistributionMode,
}

impl AttackerGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, value: EnergyDistributionMode) -> Self {
        self.mode = value;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjectorGenomeDescription {
    pub mode: InjectorMode,
    pub genome: EmbeddedGenome,
}

impl InjectorGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, value: InjectorMode) -> Self {
        self.mode = value;
        self
    }

    /// Embeds a literal sub-genome, replacing the sentinel if it was set.
    pub fn with_genome(mut self, value: Vec<u8>) -> Self {
        self.genome = EmbeddedGenome::Literal(value);
        self
    }

    pub fn with_make_self_copy(mut self) -> Self {
        self.genome = EmbeddedGenome::SelfCopy;
        self
    }

    pub fn is_make_genome_copy(&self) -> bool {
        self.genome.is_self_copy()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BendingGenomeDescription {
    /// Degrees, between 0 and 180
    pub max_angle_deviation: f32,
    /// Between 0 and 1
    pub forward_velocity: f32,
    /// Between 0 and 1
    pub backward_velocity: f32,
    /// Phase offset in time steps
    pub offset: i32,
}

impl Default for BendingGenomeDescription {
    fn default() -> Self {
        Self {
            max_angle_deviation: 20.0,
            forward_velocity: 0.5,
            backward_velocity: 0.5,
            offset: 0,
        }
    }
}

impl BendingGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_angle_deviation(mut self, value: f32) -> Self {
        self.max_angle_deviation = value;
        self
    }

    pub fn with_forward_velocity(mut self, value: f32) -> Self {
        self.forward_velocity = value;
        self
    }

    pub fn with_backward_velocity(mut self, value: f32) -> Self {
        self.backward_velocity = value;
        self
    }

    pub fn with_offset(mut self, value: i32) -> Self {
        self.offset = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MuscleModeGenomeDescription {
    Bending(BendingGenomeDescription),
}

impl Default for MuscleModeGenomeDescription {
    fn default() -> Self {
        MuscleModeGenomeDescription::Bending(BendingGenomeDescription::default())
    }
}

impl MuscleModeGenomeDescription {
    pub fn get_mode(&self) -> MuscleMode {
        match self {
            MuscleModeGenomeDescription::Bending(_) => MuscleMode::Bending,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MuscleGenomeDescription {
    pub mode: MuscleModeGenomeDescription,
}

impl MuscleGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, value: MuscleModeGenomeDescription) -> Self {
        self.mode = value;
        self
    }

    pub fn get_mode(&self) -> MuscleMode {
        self.mode.get_mode()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefenderGenomeDescription {
    pub mode: DefenderMode,
}

impl DefenderGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, value: DefenderMode) -> Self {
        self.mode = value;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconnectorGenomeDescription {
    pub restrict_to_color: Option<i32>,
    pub restrict_to_mutants: ReconnectorRestrictToMutants,
}

impl ReconnectorGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_restrict_to_color(mut self, value: Option<i32>) -> Self {
        self.restrict_to_color = value;
        self
    }

    pub fn with_restrict_to_mutants(mut self, value: ReconnectorRestrictToMutants) -> Self {
        self.restrict_to_mutants = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetonatorGenomeDescription {
    /// Time steps until detonation once triggered
    pub countdown: i32,
}

impl Default for DetonatorGenomeDescription {
    fn default() -> Self {
        Self { countdown: 10 }
    }
}

impl DetonatorGenomeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_countdown(mut self, value: i32) -> Self {
        self.countdown = value;
        self
    }
}

//endregion

//region Cell Type Sum

/// Cell type payload of a genome node: exactly one of the eleven variants.
#[derive(Debug, Clone, PartialEq)]
pub enum CellTypeGenomeDescription {
    Base(BaseGenomeDescription),
    Depot(DepotGenomeDescription),
    Constructor(ConstructorGenomeDescription),
    Sensor(SensorGenomeDescription),
    Oscillator(OscillatorGenomeDescription),
    Attacker(AttackerGenomeDescription),
    Injector(InjectorGenomeDescription),
    Muscle(MuscleGenomeDescription),
    Defender(DefenderGenomeDescription),
    Reconnector(ReconnectorGenomeDescription),
    Detonator(DetonatorGenomeDescription),
}

impl Default for CellTypeGenomeDescription {
    fn default() -> Self {
        CellTypeGenomeDescription::Base(BaseGenomeDescription)
    }
}

impl CellTypeGenomeDescription {
    pub fn get_cell_type(&self) -> CellType {
        match self {
            CellTypeGenomeDescription::Base(_) => CellType::Base,
            CellTypeGenomeDescription::Depot(_) => CellType::Depot,
            CellTypeGenomeDescription::Constructor(_) => CellType::Constructor,
            CellTypeGenomeDescription::Sensor(_) => CellType::Sensor,
            CellTypeGenomeDescription::Oscillator(_) => CellType::Oscillator,
            CellTypeGenomeDescription::Attacker(_) => CellType::Attacker,
            CellTypeGenomeDescription::Injector(_) => CellType::Injector,
            CellTypeGenomeDescription::Muscle(_) => CellType::Muscle,
            CellTypeGenomeDescription::Defender(_) => CellType::Defender,
            CellTypeGenomeDescription::Reconnector(_) => CellType::Reconnector,
            CellTypeGenomeDescription::Detonator(_) => CellType::Detonator,
        }
    }

    /// Default payload for the given cell type.
    pub fn default_for(cell_type: CellType) -> Self {
        match cell_type {
            CellType::Base => BaseGenomeDescription.into(),
            CellType::Depot => DepotGenomeDescription::default().into(),
            CellType::Constructor => ConstructorGenomeDescription::default().into(),
            CellType::Sensor => SensorGenomeDescription::default().into(),
            CellType::Oscillator => OscillatorGenomeDescription::default().into(),
            CellType::Attacker => AttackerGenomeDescription::default().into(),
            CellType::Injector => InjectorGenomeDescription::default().into(),
            CellType::Muscle => MuscleGenomeDescription::default().into(),
            CellType::Defender => DefenderGenomeDescription::default().into(),
            CellType::Reconnector => ReconnectorGenomeDescription::default().into(),
            CellType::Detonator => DetonatorGenomeDescription::default().into(),
        }
    }

    /// The embedded genome slot, for the two variants that have one.
    pub fn embedded_genome(&self) -> Option<&EmbeddedGenome> {
        match self {
            CellTypeGenomeDescription::Constructor(constructor) => Some(&constructor.genome),
            CellTypeGenomeDescription::Injector(injector) => Some(&injector.genome),
            _ => None,
        }
    }

    pub fn embedded_genome_mut(&mut self) -> Option<&mut EmbeddedGenome> {
        match self {
            CellTypeGenomeDescription::Constructor(constructor) => Some(&mut constructor.genome),
            CellTypeGenomeDescription::Injector(injector) => Some(&mut injector.genome),
            _ => None,
        }
    }
}

macro_rules! impl_from_payload {
    ($($variant:ident => $payload:ty),+ $(,)?) => {
        $(
            impl From<$payload> for CellTypeGenomeDescription {
                fn from(value: $payload) -> Self {
                    CellTypeGenomeDescription::$variant(value)
                }
            }
        )+
    };
}

impl_from_payload!(
    Base => BaseGenomeDescription,
    Depot => DepotGenomeDescription,
    Constructor => ConstructorGenomeDescription,
    Sensor => SensorGenomeDescription,
    Oscillator => OscillatorGenomeDescription,
    Attacker => AttackerGenomeDescription,
    Injector => InjectorGenomeDescription,
    Muscle => MuscleGenomeDescription,
    Defender => DefenderGenomeDescription,
    Reconnector => ReconnectorGenomeDescription,
    Detonator => DetonatorGenomeDescription,
);

//endregion
