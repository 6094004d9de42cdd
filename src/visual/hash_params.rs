//! Deterministic motion parameters derived from a seed string.
//!
//! The album name is hashed to 32 bits and each byte of the hash drives one
//! bounded parameter, so a track keeps the same animation across refreshes.

use serde::{Deserialize, Serialize};

/// Java-style string hash over UTF-16 code units (`acc * 31 + unit`, 32-bit
/// wrapping), returned as its absolute value.
pub fn hash_string(s: &str) -> u32 {
    let acc = s
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)));
    acc.unsigned_abs()
}

/// Map byte `index` of `hash` linearly into `[min, max]`.
///
/// The shift amount wraps at 32 bits, so indices 4..7 reuse bytes 0..3.
pub fn parameter_from_hash(hash: u32, index: u32, min: f64, max: f64) -> f64 {
    let shift = index.wrapping_mul(8) % 32;
    let value = f64::from((hash >> shift) & 0xFF) / 255.0;
    min + value * (max - min)
}

/// Inclusive range for one motion parameter plus the hash byte feeding it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub index: u32,
    pub min: f64,
    pub max: f64,
}

pub const SPEED: ParameterSpec = ParameterSpec { name: "speed", index: 0, min: 1.0, max: 5.0 };
pub const HORIZONTAL_PRESSURE: ParameterSpec =
    ParameterSpec { name: "horizontalPressure", index: 1, min: 2.0, max: 5.0 };
pub const VERTICAL_PRESSURE: ParameterSpec =
    ParameterSpec { name: "verticalPressure", index: 2, min: 2.0, max: 5.0 };
pub const WAVE_FREQUENCY_X: ParameterSpec =
    ParameterSpec { name: "waveFrequencyX", index: 3, min: 1.0, max: 5.0 };
pub const WAVE_FREQUENCY_Y: ParameterSpec =
    ParameterSpec { name: "waveFrequencyY", index: 4, min: 1.0, max: 5.0 };
pub const WAVE_AMPLITUDE: ParameterSpec =
    ParameterSpec { name: "waveAmplitude", index: 5, min: 2.0, max: 5.0 };

pub const ALL_PARAMETERS: [ParameterSpec; 6] = [
    SPEED,
    HORIZONTAL_PRESSURE,
    VERTICAL_PRESSURE,
    WAVE_FREQUENCY_X,
    WAVE_FREQUENCY_Y,
    WAVE_AMPLITUDE,
];

impl ParameterSpec {
    pub fn from_hash(&self, hash: u32) -> f64 {
        parameter_from_hash(hash, self.index, self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Animation controls handed to the render backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionParameters {
    pub speed: f64,
    pub horizontal_pressure: f64,
    pub vertical_pressure: f64,
    pub wave_frequency_x: f64,
    pub wave_frequency_y: f64,
    pub wave_amplitude: f64,
}

impl MotionParameters {
    pub fn from_seed(seed: &str) -> Self {
        Self::from_hash(hash_string(seed))
    }

    pub fn from_hash(hash: u32) -> Self {
        Self {
            speed: SPEED.from_hash(hash),
            horizontal_pressure: HORIZONTAL_PRESSURE.from_hash(hash),
            vertical_pressure: VERTICAL_PRESSURE.from_hash(hash),
            wave_frequency_x: WAVE_FREQUENCY_X.from_hash(hash),
            wave_frequency_y: WAVE_FREQUENCY_Y.from_hash(hash),
            wave_amplitude: WAVE_AMPLITUDE.from_hash(hash),
        }
    }

    /// Values paired with their specs, in `ALL_PARAMETERS` order
    pub fn entries(&self) -> [(ParameterSpec, f64); 6] {
        [
            (SPEED, self.speed),
            (HORIZONTAL_PRESSURE, self.horizontal_pressure),
            (VERTICAL_PRESSURE, self.vertical_pressure),
            (WAVE_FREQUENCY_X, self.wave_frequency_x),
            (WAVE_FREQUENCY_Y, self.wave_frequency_y),
            (WAVE_AMPLITUDE, self.wave_amplitude),
        ]
    }

    pub fn in_range(&self) -> bool {
        self.entries().iter().all(|(spec, value)| spec.contains(*value))
    }
}
