//! Scalar noise fields driving node drift.
//!
//! A [`NoiseField`] maps `(u, v)` to a value in `[0, 1)`. Callers pass a
//! spatial coordinate as `u` and time as `v`, so the same field yields smooth
//! trajectories in both space and time. Implementations must be continuous
//! and deterministic: the same inputs always produce the same output.

use noise::{NoiseFn, Perlin};

/// Largest f64 strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// A continuous pseudo-random scalar field.
pub trait NoiseField: Send + Sync {
    /// Sample the field at `(u, v)`. Returns a value in `[0, 1)`.
    fn sample(&self, u: f64, v: f64) -> f64;
}

/// Multi-octave gradient noise built on [`noise::Perlin`].
///
/// Octaves are summed with geometric amplitude falloff (`persistence`) and
/// frequency growth (`lacunarity`), normalised by the total amplitude, then
/// shifted from `[-1, 1]` into `[0, 1)`.
pub struct PerlinNoise {
    noise: Perlin,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
}

impl PerlinNoise {
    pub const DEFAULT_OCTAVES: u32 = 4;
    pub const DEFAULT_PERSISTENCE: f64 = 0.5;
    pub const DEFAULT_LACUNARITY: f64 = 2.0;

    /// Creates a four-octave field with falloff 0.5.
    pub fn new(seed: u32) -> Self {
        Self::with_octaves(
            seed,
            Self::DEFAULT_OCTAVES,
            Self::DEFAULT_PERSISTENCE,
            Self::DEFAULT_LACUNARITY,
        )
    }

    /// Creates a field with explicit octave settings. `octaves` is at least 1.
    pub fn with_octaves(seed: u32, octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        Self {
            noise: Perlin::new(seed),
            octaves: octaves.max(1),
            persistence,
            lacunarity,
        }
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }
}

impl NoiseField for PerlinNoise {
    fn sample(&self, u: f64, v: f64) -> f64 {
        let (total, norm, _, _) =
            (0..self.octaves).fold((0.0, 0.0, 1.0, 1.0), |(total, norm, amp, freq), _| {
                (
                    total + self.noise.get([u * freq, v * freq]) * amp,
                    norm + amp,
                    amp * self.persistence,
                    freq * self.lacunarity,
                )
            });
        let signed = if norm > 0.0 { total / norm } else { 0.0 };
        to_unit_interval(signed)
    }
}

/// A field that returns the same value everywhere.
///
/// Useful for hosts and tests that need drift switched off (`0.5`) or pinned
/// to one direction.
#[derive(Debug, Clone, Copy)]
pub struct ConstantNoise(pub f64);

impl NoiseField for ConstantNoise {
    fn sample(&self, _u: f64, _v: f64) -> f64 {
        to_unit_interval(self.0 * 2.0 - 1.0)
    }
}

/// Maps a signed value in `[-1, 1]` into `[0, 1)`. NaN maps to the midpoint.
fn to_unit_interval(signed: f64) -> f64 {
    if signed.is_nan() {
        return 0.5;
    }
    (signed * 0.5 + 0.5).clamp(0.0, BELOW_ONE)
}
