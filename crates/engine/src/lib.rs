//! # Synical Engine
//!
//! Gradient color synthesis for synical.
//!
//! Derives a reproducible 5-hue palette from a feature matrix, maps spatial
//! position to a smoothed hue/saturation/value, and renders the mapping into
//! an RGB pixel buffer under two topologies:
//!
//! - [`render_linear`]: a horizontal sweep with a vertical brightness falloff
//! - [`render_radial`]: concentric color bands around the image center
//!
//! The engine is a pure function of its inputs: identical matrix bytes and
//! parameters always produce byte-identical buffers.
//!
//! ## Usage
//!
//! ```ignore
//! use synical_core::FeatureMatrix;
//! use synical_engine::{render, RenderParams};
//!
//! let params = RenderParams::default();
//! let buffer = render(&matrix, &params)?;
//! ```

mod buffer;
mod color;
mod palette;
mod render;
mod sweep;

pub use buffer::PixelBuffer;
pub use color::{hsv_to_rgb, Hsv, Rgb};
pub use palette::{generate_palette, seed_from_bytes, Palette};
pub use render::{
    render, render_linear, render_radial, GradientMode, LinearRenderer, RadialRenderer,
    RenderParams,
};
pub use sweep::{HueMapper, Samples, SweepState, FEATURE_ROWS};
