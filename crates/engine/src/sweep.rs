//! Position-to-color mapping with smoothing state carried along a sweep
//!
//! The hue/saturation recurrence is an ordered fold: [`HueMapper::step`] must
//! be called in strictly increasing order of the swept coordinate, because
//! the smoothing accumulators carry forward from one step to the next.
//! Re-ordering the steps changes the output.

use std::f64::consts::TAU;

use synical_core::{FeatureSampler, Result};

use crate::palette::Palette;

/// Feature channels read by the renderers, lowest to highest.
pub const FEATURE_ROWS: [usize; 4] = [5, 15, 25, 35];

/// Exponential smoothing factor for the hue and saturation accumulators.
pub const SMOOTHING_ALPHA: f64 = 0.08;

/// Rotation applied to the palette hue to keep the dominant color away from
/// the red wrap-around boundary.
const HUE_ROTATION: f64 = 0.1;

const SAT_MIN: f64 = 0.40;
const SAT_MAX: f64 = 0.98;

/// The four feature values sampled at one sweep position, each in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Samples {
    pub low: f64,
    pub lower_mid: f64,
    pub upper_mid: f64,
    pub high: f64,
}

impl Samples {
    /// Read the four feature channels at normalized position `p`.
    pub fn read(sampler: &FeatureSampler<'_>, p: f64) -> Result<Self> {
        Ok(Self {
            low: sampler.sample(FEATURE_ROWS[0], p)?,
            lower_mid: sampler.sample(FEATURE_ROWS[1], p)?,
            upper_mid: sampler.sample(FEATURE_ROWS[2], p)?,
            high: sampler.sample(FEATURE_ROWS[3], p)?,
        })
    }

    /// Local energy driving the brightness term.
    pub fn energy(&self) -> f64 {
        0.55 * self.low + 0.45 * self.upper_mid
    }
}

/// Smoothing accumulators carried across an ordered sweep.
///
/// The hue accumulator is a (cos, sin) pair: two independent scalar low-pass
/// filters over the hue angle. Averaging the angle directly would be wrong
/// across the 0/1 wrap boundary. Starting from (1, 0) with a bounded update
/// step, the pair never reaches (0, 0), so the derived angle is always
/// well-defined.
#[derive(Debug, Clone)]
pub struct SweepState {
    cos_acc: f64,
    sin_acc: f64,
    sat_acc: Option<f64>,
}

impl Default for SweepState {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepState {
    pub fn new() -> Self {
        Self {
            cos_acc: 1.0,
            sin_acc: 0.0,
            sat_acc: None,
        }
    }

    /// Blend toward the target hue and return the smoothed hue in [0, 1).
    fn smooth_hue(&mut self, hue: f64) -> f64 {
        let (sin, cos) = (TAU * hue).sin_cos();
        self.cos_acc += SMOOTHING_ALPHA * (cos - self.cos_acc);
        self.sin_acc += SMOOTHING_ALPHA * (sin - self.sin_acc);

        let smoothed = (self.sin_acc.atan2(self.cos_acc) / TAU).rem_euclid(1.0);
        // rem_euclid of a tiny negative rounds up to exactly 1.0
        if smoothed >= 1.0 {
            0.0
        } else {
            smoothed
        }
    }

    /// Blend toward the raw saturation; warm-starts at the first sample.
    fn smooth_saturation(&mut self, raw: f64) -> f64 {
        let acc = self.sat_acc.get_or_insert(raw);
        *acc += SMOOTHING_ALPHA * (raw - *acc);
        *acc
    }
}

/// Maps a normalized sweep position plus local feature values to a smoothed
/// (hue, saturation) pair.
///
/// Vibrancy controls the amplitude of the audio-driven hue and saturation
/// modulation; it is clamped to [0, 2] on construction and never rejected.
#[derive(Debug, Clone)]
pub struct HueMapper {
    palette: Palette,
    vibrancy: f64,
    state: SweepState,
}

impl HueMapper {
    pub fn new(palette: Palette, vibrancy: f64) -> Self {
        Self {
            palette,
            vibrancy: vibrancy.clamp(0.0, 2.0),
            state: SweepState::new(),
        }
    }

    /// Clamped vibrancy in [0, 2].
    pub fn vibrancy(&self) -> f64 {
        self.vibrancy
    }

    /// Advance the sweep one step and emit (hue, saturation).
    ///
    /// Steps must arrive in increasing order of the swept coordinate.
    pub fn step(&mut self, p: f64, samples: &Samples) -> (f64, f64) {
        let base = (self.palette.sample(p) + HUE_ROTATION).rem_euclid(1.0);
        let modulation = self.vibrancy
            * (0.22 * (samples.lower_mid - 0.5) + 0.10 * (samples.upper_mid - 0.5));
        let target = (base + modulation).rem_euclid(1.0);
        let hue = self.state.smooth_hue(target);

        let floor = 0.45 + 0.20 * self.vibrancy;
        let span = 0.25 + 0.30 * self.vibrancy;
        let raw = floor + span * (0.35 * samples.high + 0.65 * samples.low);
        let sat = self.state.smooth_saturation(raw).clamp(SAT_MIN, SAT_MAX);

        (hue, sat)
    }
}
