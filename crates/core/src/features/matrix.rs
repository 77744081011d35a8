//! Main FeatureMatrix type

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};

/// Normalization ceiling used when none is given: features are expected to
/// be amplitude-normalized into the 0..=255 range.
pub const DEFAULT_CEILING: f64 = 255.0;

/// A 2D grid of normalized audio features.
///
/// `FeatureMatrix` stores one row per feature channel and one column per
/// time frame. Values are expected to lie within `[0, ceiling]`; the
/// [`FeatureSampler`](crate::FeatureSampler) divides by the ceiling to
/// produce values in `[0, 1]`.
///
/// # Example
///
/// ```ignore
/// use synical_core::FeatureMatrix;
///
/// // 40 feature channels over 100 frames, all zero
/// let matrix = FeatureMatrix::new(40, 100);
/// assert_eq!(matrix.shape(), (40, 100));
/// ```
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    /// Feature data stored in row-major order (channel, frame)
    data: Array2<f64>,
    /// Upper bound of the normalized value range
    ceiling: f64,
}

impl FeatureMatrix {
    /// Create a new matrix filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
            ceiling: DEFAULT_CEILING,
        }
    }

    /// Create a new matrix filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
            ceiling: DEFAULT_CEILING,
        }
    }

    /// Create a matrix from existing row-major data
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::SizeMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self {
            data: array,
            ceiling: DEFAULT_CEILING,
        })
    }

    /// Create a matrix from an ndarray
    pub fn from_array(data: Array2<f64>) -> Self {
        Self {
            data,
            ceiling: DEFAULT_CEILING,
        }
    }

    /// Override the normalization ceiling
    pub fn with_ceiling(mut self, ceiling: f64) -> Self {
        self.ceiling = ceiling;
        self
    }

    // Dimensions

    /// Number of feature channels
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of time frames
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Normalization ceiling
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Serialize the raw values as little-endian bytes in row-major order.
    ///
    /// This is the hash input for palette seeding: identical matrices
    /// produce identical bytes on every platform.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len() * std::mem::size_of::<f64>());
        for &value in self.data.iter() {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// Calculate basic statistics (min, max, mean over all cells)
    pub fn statistics(&self) -> MatrixStatistics {
        let mut min = None;
        let mut max = None;
        let mut sum: f64 = 0.0;
        let mut count: usize = 0;

        for &value in self.data.iter() {
            if !value.is_finite() {
                continue;
            }

            if min.is_none() || value < min.unwrap() {
                min = Some(value);
            }
            if max.is_none() || value > max.unwrap() {
                max = Some(value);
            }

            sum += value;
            count += 1;
        }

        let mean = if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        };

        MatrixStatistics {
            min,
            max,
            mean,
            valid_count: count,
        }
    }
}

/// Basic statistics for a feature matrix
#[derive(Debug, Clone)]
pub struct MatrixStatistics {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub valid_count: usize,
}
