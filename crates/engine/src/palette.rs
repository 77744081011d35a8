//! Deterministic palette derivation from feature-matrix bytes

/// Number of hues in a palette.
pub const PALETTE_SIZE: usize = 5;

/// Minimum spacing between consecutive sorted hues.
pub const MIN_HUE_GAP: f64 = 0.12;

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: f64 = 2_147_483_648.0; // 2^31

/// Derive a 64-bit palette seed from raw matrix bytes.
///
/// Uses a blake3 digest so the seed is stable across platforms and
/// processes; the first 8 digest bytes are read big-endian.
pub fn seed_from_bytes(bytes: &[u8]) -> u64 {
    let digest = blake3::hash(bytes);
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_be_bytes(head)
}

/// Generate the 5-hue palette for the given matrix bytes.
///
/// Deterministic and pure: identical bytes produce identical hues, always.
pub fn generate_palette(bytes: &[u8]) -> [f64; PALETTE_SIZE] {
    *Palette::from_bytes(bytes).hues()
}

/// An ordered sequence of 5 hue values in [0, 1].
///
/// Hues are sorted ascending and kept at least [`MIN_HUE_GAP`] apart by a
/// redistribution pass; if redistribution pushes the last hue above 1.0,
/// all five are rescaled by `1 / last` to fit the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    hues: [f64; PALETTE_SIZE],
}

impl Palette {
    /// Derive the palette from raw matrix bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_seed(seed_from_bytes(bytes))
    }

    /// Derive the palette from a 64-bit seed.
    ///
    /// Each hue is a draw from a linear congruential generator keyed by the
    /// seed and the hue index. Wrapping u64 arithmetic followed by `mod 2^31`
    /// matches exact-integer arithmetic because 2^31 divides 2^64.
    pub fn from_seed(seed: u64) -> Self {
        let mut hues = [0.0; PALETTE_SIZE];
        for (i, hue) in hues.iter_mut().enumerate() {
            let draw = seed
                .wrapping_mul(i as u64 + 1)
                .wrapping_mul(LCG_MULTIPLIER)
                .wrapping_add(LCG_INCREMENT);
            *hue = (draw & 0x7FFF_FFFF) as f64 / LCG_MODULUS;
        }

        hues.sort_by(f64::total_cmp);
        redistribute(&mut hues);

        Self { hues }
    }

    /// The sorted hue values.
    pub fn hues(&self) -> &[f64; PALETTE_SIZE] {
        &self.hues
    }

    /// Interpolate the palette at normalized position `p`.
    ///
    /// `p` scales across the four palette segments; interpolation between
    /// neighboring hues follows the shorter arc on the hue circle, so a
    /// segment never sweeps more than half a revolution. The result is
    /// wrapped to [0, 1).
    pub fn sample(&self, p: f64) -> f64 {
        let t = p.clamp(0.0, 1.0) * (PALETTE_SIZE - 1) as f64;
        let idx = (t.floor() as usize).min(PALETTE_SIZE - 2);
        let frac = t - idx as f64;

        let a = self.hues[idx];
        let b = self.hues[idx + 1];
        let mut d = b - a;
        if d > 0.5 {
            d -= 1.0;
        } else if d < -0.5 {
            d += 1.0;
        }

        (a + d * frac).rem_euclid(1.0)
    }
}

/// Push each hue up to at least `previous + MIN_HUE_GAP`, then rescale into
/// [0, 1] if the last hue overshot.
fn redistribute(hues: &mut [f64; PALETTE_SIZE]) {
    for i in 1..PALETTE_SIZE {
        let floor = hues[i - 1] + MIN_HUE_GAP;
        if hues[i] < floor {
            hues[i] = floor;
        }
    }

    let last = hues[PALETTE_SIZE - 1];
    if last > 1.0 {
        let scale = 1.0 / last;
        for hue in hues.iter_mut() {
            *hue *= scale;
        }
    }
}
