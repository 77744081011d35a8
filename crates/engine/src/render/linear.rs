//! Linear-sweep rendering

use rayon::prelude::*;

use synical_core::{FeatureMatrix, FeatureSampler, Result};

use crate::buffer::PixelBuffer;
use crate::color::{hsv_to_rgb, Hsv};
use crate::palette::Palette;
use crate::sweep::{HueMapper, Samples};

/// Per-column output of the sequential sweep.
struct ColumnShade {
    hue: f64,
    sat: f64,
    energy: f64,
}

/// Render a horizontal hue sweep into a pixel buffer.
///
/// The column sweep runs left to right (the smoothing state carries
/// forward); the per-row pixel fill then reads the finished column table in
/// parallel.
pub(crate) fn fill(
    matrix: &FeatureMatrix,
    palette: Palette,
    width: u32,
    height: u32,
    vibrancy: f64,
) -> Result<PixelBuffer> {
    let w = width as usize;
    let h = height as usize;

    let sampler = FeatureSampler::new(matrix);
    let mut mapper = HueMapper::new(palette, vibrancy);

    let denom = w.saturating_sub(1).max(1) as f64;
    let mut columns = Vec::with_capacity(w);
    for x in 0..w {
        let p = x as f64 / denom;
        let samples = Samples::read(&sampler, p)?;
        let (hue, sat) = mapper.step(p, &samples);
        columns.push(ColumnShade {
            hue,
            sat,
            energy: samples.energy(),
        });
    }

    let vdenom = h.saturating_sub(1).max(1) as f64;
    let data: Vec<u8> = (0..h)
        .into_par_iter()
        .flat_map(|y| {
            let vpos = y as f64 / vdenom;
            let falloff = 0.92 - 0.45 * vpos.powf(1.15);

            let mut row = Vec::with_capacity(w * 3);
            for column in &columns {
                let value = ((0.22 + 0.70 * column.energy) * falloff).clamp(0.06, 0.92);
                let rgb = hsv_to_rgb(Hsv::new(column.hue, column.sat, value));
                row.extend_from_slice(&[rgb.r, rgb.g, rgb.b]);
            }
            row
        })
        .collect();

    PixelBuffer::from_raw(width, height, data)
}
