//! Radial rendering via a precomputed radius table

use rayon::prelude::*;

use synical_core::{FeatureMatrix, FeatureSampler, Result};

use crate::buffer::PixelBuffer;
use crate::color::{hsv_to_rgb, Hsv};
use crate::palette::Palette;
use crate::sweep::{HueMapper, Samples};

/// Render concentric color bands into a pixel buffer.
///
/// The radius sweep runs from the center outward in increasing steps (the
/// smoothing state carries forward, exactly as the linear column sweep
/// does) and materializes one HSV entry per discrete radius. Rasterization
/// then maps every pixel's distance from the center into that table,
/// row-parallel.
pub(crate) fn fill(
    matrix: &FeatureMatrix,
    palette: Palette,
    width: u32,
    height: u32,
    vibrancy: f64,
) -> Result<PixelBuffer> {
    let w = width as usize;
    let h = height as usize;

    let cx = (width - 1) as f64 / 2.0;
    let cy = (height - 1) as f64 / 2.0;
    let max_radius = cx.hypot(cy);
    if max_radius == 0.0 {
        // 1x1 image: no radius axis to sweep
        return Ok(PixelBuffer::new(width, height));
    }

    let steps = max_radius.floor() as usize + 2;
    let denom = (steps - 1) as f64;

    let sampler = FeatureSampler::new(matrix);
    let mut mapper = HueMapper::new(palette, vibrancy);

    let mut table = Vec::with_capacity(steps);
    for step in 0..steps {
        let rnorm = step as f64 / denom;
        let samples = Samples::read(&sampler, rnorm)?;
        let (hue, sat) = mapper.step(rnorm, &samples);
        let value =
            ((0.25 + 0.70 * samples.energy()) * (0.96 - 0.60 * rnorm.powf(1.35))).clamp(0.06, 0.92);
        table.push(Hsv::new(hue, sat, value));
    }

    let data: Vec<u8> = (0..h)
        .into_par_iter()
        .flat_map(|y| {
            let dy = y as f64 - cy;

            let mut row = Vec::with_capacity(w * 3);
            for x in 0..w {
                let dx = x as f64 - cx;
                let rnorm = ((dx * dx + dy * dy).sqrt() / max_radius).min(1.0);
                let index = (rnorm * denom).floor() as usize;
                let rgb = hsv_to_rgb(table[index]);
                row.extend_from_slice(&[rgb.r, rgb.g, rgb.b]);
            }
            row
        })
        .collect();

    PixelBuffer::from_raw(width, height, data)
}
