//! core/params.rs: the five bounded control parameters and the canned presets.

use std::ops::RangeInclusive;

pub const THERMAL_RANGE: RangeInclusive<f32> = 0.0..=5.0;
pub const GRAVITY_RANGE: RangeInclusive<f32> = 0.0..=3.0;
pub const INERTIA_RANGE: RangeInclusive<f32> = 0.0..=2.0;
pub const PRESSURE_RANGE: RangeInclusive<f32> = 0.5..=2.5;
pub const SLEEP_WAKE_RANGE: RangeInclusive<f32> = 0.0..=2.0;

/// Snapshot of the five control sliders. Values are always kept inside the
/// declared ranges; out-of-range writes clamp rather than fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlParams {
    pub thermal: f32,
    pub gravity: f32,
    pub inertia: f32,
    pub pressure: f32,
    pub sleep_wake: f32,
}

impl Default for ControlParams {
    fn default() -> Self {
        Preset::BDna.params()
    }
}

impl ControlParams {
    pub fn new(thermal: f32, gravity: f32, inertia: f32, pressure: f32, sleep_wake: f32) -> Self {
        Self {
            thermal,
            gravity,
            inertia,
            pressure,
            sleep_wake,
        }
        .clamped()
    }

    /// Return a copy with every field clamped to its declared range.
    pub fn clamped(self) -> Self {
        Self {
            thermal: self.thermal.clamp(*THERMAL_RANGE.start(), *THERMAL_RANGE.end()),
            gravity: self.gravity.clamp(*GRAVITY_RANGE.start(), *GRAVITY_RANGE.end()),
            inertia: self.inertia.clamp(*INERTIA_RANGE.start(), *INERTIA_RANGE.end()),
            pressure: self
                .pressure
                .clamp(*PRESSURE_RANGE.start(), *PRESSURE_RANGE.end()),
            sleep_wake: self
                .sleep_wake
                .clamp(*SLEEP_WAKE_RANGE.start(), *SLEEP_WAKE_RANGE.end()),
        }
    }
}

/// Canned parameter snapshots selectable from the UI or CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    BDna,
    ActiveTranscription,
    UnderStress,
    Dormant,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::BDna,
        Preset::ActiveTranscription,
        Preset::UnderStress,
        Preset::Dormant,
    ];

    pub fn params(self) -> ControlParams {
        match self {
            Preset::BDna => ControlParams {
                thermal: 1.0,
                gravity: 0.5,
                inertia: 0.8,
                pressure: 1.0,
                sleep_wake: 0.5,
            },
            Preset::ActiveTranscription => ControlParams {
                thermal: 2.0,
                gravity: 0.3,
                inertia: 0.4,
                pressure: 0.8,
                sleep_wake: 1.0,
            },
            Preset::UnderStress => ControlParams {
                thermal: 3.0,
                gravity: 2.0,
                inertia: 1.5,
                pressure: 2.0,
                sleep_wake: 0.2,
            },
            Preset::Dormant => ControlParams {
                thermal: 0.2,
                gravity: 0.1,
                inertia: 1.0,
                pressure: 1.0,
                sleep_wake: 0.0,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::BDna => "B-DNA",
            Preset::ActiveTranscription => "Active Transcription",
            Preset::UnderStress => "Under Stress",
            Preset::Dormant => "Dormant",
        }
    }

    /// Parse a CLI-style preset name ("b-dna", "under-stress", ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "b-dna" | "bdna" => Some(Preset::BDna),
            "active-transcription" | "active" => Some(Preset::ActiveTranscription),
            "under-stress" | "stress" => Some(Preset::UnderStress),
            "dormant" | "sleep" => Some(Preset::Dormant),
            _ => None,
        }
    }
}
