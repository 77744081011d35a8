//! HSV color model and RGB conversion

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Default background (used for degenerate inputs).
    pub const BACKGROUND: Self = Self { r: 0, g: 0, b: 0 };
}

/// HSV color with all components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Convert an HSV triple to 8-bit RGB.
///
/// Standard six-sector hue decomposition. The hue wraps (1.0 maps to 0.0);
/// saturation and value are expected pre-clamped to [0, 1] by callers.
pub fn hsv_to_rgb(color: Hsv) -> Rgb {
    let h = (color.h - color.h.floor()) * 6.0;
    let sector = (h.floor() as usize) % 6;
    let f = h - h.floor();

    let v = color.v;
    let p = v * (1.0 - color.s);
    let q = v * (1.0 - color.s * f);
    let t = v * (1.0 - color.s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}
