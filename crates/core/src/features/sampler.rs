//! Interpolated feature sampling by continuous position

use crate::error::{Error, Result};
use crate::features::FeatureMatrix;

/// Read access into a [`FeatureMatrix`] by normalized position.
///
/// A position `p` in `[0, 1]` maps onto the continuous column space
/// `[0, cols - 1]`; the value is linearly interpolated between the two
/// neighboring frames and divided by the matrix ceiling, yielding a value
/// in `[0, 1]` for in-range data. The right interpolation index is clamped
/// to the last column, so `p = 0` and `p = 1` are always valid.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSampler<'a> {
    matrix: &'a FeatureMatrix,
}

impl<'a> FeatureSampler<'a> {
    /// Wrap a matrix for sampling
    pub fn new(matrix: &'a FeatureMatrix) -> Self {
        Self { matrix }
    }

    /// Sample feature channel `row` at normalized position `p`.
    ///
    /// `p` is clamped to `[0, 1]`. Returns an error only when `row` is out
    /// of range.
    pub fn sample(&self, row: usize, p: f64) -> Result<f64> {
        let rows = self.matrix.rows();
        let cols = self.matrix.cols();
        if row >= rows {
            return Err(Error::RowOutOfBounds { row, rows });
        }
        if cols == 0 {
            return Err(Error::EmptyMatrix);
        }

        let t = p.clamp(0.0, 1.0) * (cols - 1) as f64;
        let left = t.floor() as usize;
        let right = (left + 1).min(cols - 1);
        let frac = t - left as f64;

        let data = self.matrix.data();
        let v0 = data[(row, left)];
        let v1 = data[(row, right)];

        Ok((v0 + (v1 - v0) * frac) / self.matrix.ceiling())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp_matrix() -> FeatureMatrix {
        // Single channel 0, 10, 20, ..., 90
        let data: Vec<f64> = (0..10).map(|c| c as f64 * 10.0).collect();
        FeatureMatrix::from_vec(data, 1, 10).unwrap().with_ceiling(90.0)
    }

    #[test]
    fn test_sample_boundaries() {
        let matrix = ramp_matrix();
        let sampler = FeatureSampler::new(&matrix);
        assert_abs_diff_eq!(sampler.sample(0, 0.0).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sampler.sample(0, 1.0).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_interpolates() {
        let matrix = ramp_matrix();
        let sampler = FeatureSampler::new(&matrix);
        // p = 0.5 lands exactly on frame 4.5 -> value 45 -> 0.5 of ceiling
        assert_abs_diff_eq!(sampler.sample(0, 0.5).unwrap(), 0.5, epsilon = 1e-12);
        // p = 0.05 lands on frame 0.45 -> value 4.5
        assert_abs_diff_eq!(sampler.sample(0, 0.05).unwrap(), 4.5 / 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_clamps_position() {
        let matrix = ramp_matrix();
        let sampler = FeatureSampler::new(&matrix);
        assert_abs_diff_eq!(
            sampler.sample(0, -3.0).unwrap(),
            sampler.sample(0, 0.0).unwrap()
        );
        assert_abs_diff_eq!(
            sampler.sample(0, 7.0).unwrap(),
            sampler.sample(0, 1.0).unwrap()
        );
    }

    #[test]
    fn test_sample_single_column() {
        let matrix = FeatureMatrix::filled(2, 1, 127.5);
        let sampler = FeatureSampler::new(&matrix);
        assert_abs_diff_eq!(sampler.sample(1, 0.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(sampler.sample(1, 1.0).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_row_out_of_bounds() {
        let matrix = ramp_matrix();
        let sampler = FeatureSampler::new(&matrix);
        assert!(matches!(
            sampler.sample(3, 0.5),
            Err(crate::Error::RowOutOfBounds { row: 3, rows: 1 })
        ));
    }
}
