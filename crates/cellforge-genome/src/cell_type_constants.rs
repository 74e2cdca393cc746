// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Closed enumerations used by genome descriptions.
//!
//! Discriminants double as wire tags, so they must never be reordered. New variants are
//! appended.

define_genome_enum!(
    /// Cell type of a genome node. Always derived from the node's payload variant.
    CellType (default Base) {
        Base = 0 => "Base",
        Depot = 1 => "Depot",
        Constructor = 2 => "Constructor",
        Sensor = 3 => "Sensor",
        Oscillator = 4 => "Oscillator",
        Attacker = 5 => "Attacker",
        Injector = 6 => "Injector",
        Muscle = 7 => "Muscle",
        Defender = 8 => "Defender",
        Reconnector = 9 => "Reconnector",
        Detonator = 10 => "Detonator",
    }
);

impl CellType {
    /// Whether nodes of this type carry an embedded genome slot.
    pub const fn carries_genome(self) -> bool {
        matches!(self, CellType::Constructor | CellType::Injector)
    }
}

define_genome_enum!(
    /// Per-channel activation function of a node's neural network.
    ActivationFunction (default Identity) {
        Sigmoid = 0 => "Sigmoid",
        BinaryStep = 1 => "Binary step",
        Identity = 2 => "Identity",
        Abs = 3 => "Absolute value",
        Gaussian = 4 => "Gaussian",
    }
);

define_genome_enum!(
    EnergyDistributionMode (default TransmittersAndConstructors) {
        ConnectedCells = 0 => "Connected cells",
        TransmittersAndConstructors = 1 => "Transmitters and constructors",
    }
);

define_genome_enum!(
    /// Angle grid the constructor snaps new cells to.
    ConstructorAngleAlignment (default Deg60) {
        None = 0 => "None",
        Deg180 = 1 => "180 deg",
        Deg120 = 2 => "120 deg",
        Deg90 = 3 => "90 deg",
        Deg72 = 4 => "72 deg",
        Deg60 = 5 => "60 deg",
    }
);

define_genome_enum!(
    /// Preset the editor used to lay out the node sequence. `Custom` means hand-edited.
    ConstructionShape (default Custom) {
        Custom = 0 => "Custom",
        Segment = 1 => "Segment",
        Triangle = 2 => "Triangle",
        Rectangle = 3 => "Rectangle",
        Hexagon = 4 => "Hexagon",
        Loop = 5 => "Loop",
        Tube = 6 => "Tube",
        Lolli = 7 => "Lolli",
        SmallLolli = 8 => "Small lolli",
        Zigzag = 9 => "Zigzag",
    }
);

define_genome_enum!(
    SensorRestrictToMutants (default NoRestriction) {
        NoRestriction = 0 => "No restriction",
        SameMutants = 1 => "Same mutants",
        OtherMutants = 2 => "Other mutants",
        FreeCells = 3 => "Free cells",
        HandcraftedCells = 4 => "Handcrafted cells",
        LessComplexMutants = 5 => "Less complex mutants",
        MoreComplexMutants = 6 => "More complex mutants",
    }
);

define_genome_enum!(
    ReconnectorRestrictToMutants (default NoRestriction) {
        NoRestriction = 0 => "No restriction",
        SameMutants = 1 => "Same mutants",
        OtherMutants = 2 => "Other mutants",
        FreeCells = 3 => "Free cells",
        HandcraftedCells = 4 => "Handcrafted cells",
        LessComplexMutants = 5 => "Less complex mutants",
        MoreComplexMutants = 6 => "More complex mutants",
    }
);

define_genome_enum!(
    InjectorMode (default InjectAll) {
        InjectOnlyEmptyCells = 0 => "Only empty cells",
        InjectAll = 1 => "All cells",
    }
);

define_genome_enum!(
    DefenderMode (default DefendAgainstAttacker) {
        DefendAgainstAttacker = 0 => "Anti-attacker",
        DefendAgainstInjector = 1 => "Anti-injector",
    }
);

define_genome_enum!(
    MuscleMode (default Bending) {
        Bending = 0 => "Bending",
    }
);
