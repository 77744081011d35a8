//! Gradient renderers
//!
//! Both renderers share the same structure: a sequential sweep folds the
//! smoothing state over the ordered coordinate (columns left to right, or
//! radius steps inward to outward) into a small color table, then the pixel
//! fill reads that table row-parallel. The fill is order-free; the sweep is
//! not.

mod linear;
mod radial;

use synical_core::{Algorithm, Error, FeatureMatrix, Result};

use crate::buffer::PixelBuffer;
use crate::palette::Palette;
use crate::sweep::FEATURE_ROWS;

/// Spatial topology of the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientMode {
    /// Horizontal hue sweep with a vertical brightness falloff
    #[default]
    Linear,
    /// Concentric color bands around the image center
    Radial,
}

impl GradientMode {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
        }
    }
}

/// Parameters controlling a render call.
#[derive(Debug, Clone)]
pub struct RenderParams {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Modulation amplitude, clamped to [0, 2]
    pub vibrancy: f64,
    /// Gradient topology
    pub mode: GradientMode,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            vibrancy: 1.0,
            mode: GradientMode::Linear,
        }
    }
}

/// Render a wallpaper using the mode given in `params`.
///
/// The matrix must have at least `FEATURE_ROWS.last() + 1` feature channels;
/// width and height must be positive. A matrix with fewer than 2 time frames
/// is degenerate and yields the untouched background buffer.
pub fn render(matrix: &FeatureMatrix, params: &RenderParams) -> Result<PixelBuffer> {
    render_with(matrix, params, params.mode)
}

/// Render a linear-sweep wallpaper regardless of `params.mode`.
pub fn render_linear(matrix: &FeatureMatrix, params: &RenderParams) -> Result<PixelBuffer> {
    render_with(matrix, params, GradientMode::Linear)
}

/// Render a radial wallpaper regardless of `params.mode`.
pub fn render_radial(matrix: &FeatureMatrix, params: &RenderParams) -> Result<PixelBuffer> {
    render_with(matrix, params, GradientMode::Radial)
}

fn render_with(
    matrix: &FeatureMatrix,
    params: &RenderParams,
    mode: GradientMode,
) -> Result<PixelBuffer> {
    if params.width == 0 || params.height == 0 {
        return Err(Error::InvalidDimensions {
            width: params.width,
            height: params.height,
        });
    }

    if matrix.cols() < 2 {
        return Ok(PixelBuffer::new(params.width, params.height));
    }

    let required = FEATURE_ROWS[FEATURE_ROWS.len() - 1] + 1;
    if matrix.rows() < required {
        return Err(Error::InsufficientChannels {
            rows: matrix.rows(),
            required,
        });
    }

    let palette = Palette::from_bytes(&matrix.to_bytes());
    match mode {
        GradientMode::Linear => {
            linear::fill(matrix, palette, params.width, params.height, params.vibrancy)
        }
        GradientMode::Radial => {
            radial::fill(matrix, palette, params.width, params.height, params.vibrancy)
        }
    }
}

/// Linear gradient renderer
#[derive(Debug, Clone, Default)]
pub struct LinearRenderer;

impl Algorithm for LinearRenderer {
    type Input = FeatureMatrix;
    type Output = PixelBuffer;
    type Params = RenderParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Linear gradient"
    }

    fn description(&self) -> &'static str {
        "Render a horizontal hue sweep with vertical brightness falloff"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        render_linear(&input, &params)
    }
}

/// Radial gradient renderer
#[derive(Debug, Clone, Default)]
pub struct RadialRenderer;

impl Algorithm for RadialRenderer {
    type Input = FeatureMatrix;
    type Output = PixelBuffer;
    type Params = RenderParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Radial gradient"
    }

    fn description(&self) -> &'static str {
        "Render concentric color bands mapped from the image center"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        render_radial(&input, &params)
    }
}
