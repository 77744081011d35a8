//! End-to-end renderer tests over deterministic fixture matrices.

use synical_core::{Algorithm, Error, FeatureMatrix};
use synical_engine::{
    render, render_linear, render_radial, GradientMode, LinearRenderer, RadialRenderer,
    RenderParams,
};

/// A 40-channel matrix with a fixed, fully deterministic fill pattern.
fn fixture_matrix(cols: usize) -> FeatureMatrix {
    let rows = 40;
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| {
            let r = i / cols;
            let c = i % cols;
            ((r * 7 + c * 13) % 256) as f64
        })
        .collect();
    FeatureMatrix::from_vec(data, rows, cols).unwrap()
}

/// A matrix whose every channel is constant across time frames.
fn constant_matrix() -> FeatureMatrix {
    let rows = 40;
    let cols = 64;
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| ((i / cols) * 6 % 256) as f64)
        .collect();
    FeatureMatrix::from_vec(data, rows, cols).unwrap()
}

fn params(width: u32, height: u32, vibrancy: f64, mode: GradientMode) -> RenderParams {
    RenderParams {
        width,
        height,
        vibrancy,
        mode,
    }
}

#[test]
fn rendering_is_idempotent() {
    let matrix = fixture_matrix(100);
    for mode in [GradientMode::Linear, GradientMode::Radial] {
        let p = params(200, 100, 1.0, mode);
        let first = render(&matrix, &p).unwrap();
        let second = render(&matrix, &p).unwrap();
        assert_eq!(
            first.data(),
            second.data(),
            "{} render not reproducible",
            mode.name()
        );
    }
}

#[test]
fn modes_produce_distinct_output() {
    let matrix = fixture_matrix(100);
    let linear = render(&matrix, &params(200, 100, 1.0, GradientMode::Linear)).unwrap();
    let radial = render(&matrix, &params(200, 100, 1.0, GradientMode::Radial)).unwrap();

    assert_eq!(linear.width(), 200);
    assert_eq!(linear.height(), 100);
    assert_ne!(linear.data(), radial.data());
}

#[test]
fn vibrancy_clamps_to_range_ends() {
    let matrix = fixture_matrix(80);
    for mode in [GradientMode::Linear, GradientMode::Radial] {
        let below = render(&matrix, &params(120, 60, -1.0, mode)).unwrap();
        let zero = render(&matrix, &params(120, 60, 0.0, mode)).unwrap();
        assert_eq!(below.data(), zero.data());

        let above = render(&matrix, &params(120, 60, 5.0, mode)).unwrap();
        let two = render(&matrix, &params(120, 60, 2.0, mode)).unwrap();
        assert_eq!(above.data(), two.data());
    }
}

#[test]
fn no_pixel_is_pure_black_or_white() {
    // Value is clamped to [0.06, 0.92] before conversion, so the brightest
    // channel of every pixel lands in [15, 235].
    let matrix = fixture_matrix(100);
    for mode in [GradientMode::Linear, GradientMode::Radial] {
        let buffer = render(&matrix, &params(96, 64, 1.5, mode)).unwrap();
        for pixel in buffer.data().chunks_exact(3) {
            let brightest = pixel.iter().copied().max().unwrap();
            assert!(
                (15..=235).contains(&brightest),
                "{} mode produced out-of-range pixel {pixel:?}",
                mode.name()
            );
        }
    }
}

#[test]
fn single_frame_matrix_yields_background() {
    let matrix = fixture_matrix(1);
    let buffer = render(&matrix, &params(100, 50, 1.0, GradientMode::Linear)).unwrap();
    assert_eq!(buffer.width(), 100);
    assert_eq!(buffer.height(), 50);
    assert!(buffer.data().iter().all(|&b| b == 0));

    let radial = render(&matrix, &params(100, 50, 1.0, GradientMode::Radial)).unwrap();
    assert!(radial.data().iter().all(|&b| b == 0));
}

#[test]
fn single_pixel_radial_yields_background() {
    let matrix = fixture_matrix(100);
    let buffer = render(&matrix, &params(1, 1, 1.0, GradientMode::Radial)).unwrap();
    assert_eq!(buffer.data(), &[0, 0, 0]);
}

#[test]
fn zero_dimensions_are_rejected() {
    let matrix = fixture_matrix(100);
    for (w, h) in [(0, 50), (50, 0), (0, 0)] {
        let result = render(&matrix, &params(w, h, 1.0, GradientMode::Linear));
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }
}

#[test]
fn too_few_channels_are_rejected() {
    let data: Vec<f64> = (0..20 * 50).map(|i| (i % 256) as f64).collect();
    let matrix = FeatureMatrix::from_vec(data, 20, 50).unwrap();
    let result = render(&matrix, &params(64, 64, 1.0, GradientMode::Linear));
    assert!(matches!(
        result,
        Err(Error::InsufficientChannels {
            rows: 20,
            required: 36
        })
    ));
}

#[test]
fn radial_output_is_rotation_symmetric() {
    let matrix = constant_matrix();

    // 180 degrees on a non-square image
    let buffer = render(&matrix, &params(200, 100, 1.0, GradientMode::Radial)).unwrap();
    for y in 0..100 {
        for x in 0..200 {
            assert_eq!(
                buffer.pixel(x, y),
                buffer.pixel(199 - x, 99 - y),
                "180-degree mismatch at ({x}, {y})"
            );
        }
    }

    // 90 degrees on a square image
    let buffer = render(&matrix, &params(64, 64, 1.0, GradientMode::Radial)).unwrap();
    for y in 0..64 {
        for x in 0..64 {
            assert_eq!(
                buffer.pixel(x, y),
                buffer.pixel(y, 63 - x),
                "90-degree mismatch at ({x}, {y})"
            );
        }
    }
}

#[test]
fn linear_columns_are_vertically_coherent() {
    // Within a column, hue and saturation are constant; only brightness
    // falls off with depth. The brightest channel must therefore never
    // increase from one row to the next.
    let matrix = fixture_matrix(100);
    let buffer = render(&matrix, &params(50, 80, 1.0, GradientMode::Linear)).unwrap();
    for x in 0..50 {
        let mut previous = u8::MAX;
        for y in 0..80 {
            let pixel = buffer.pixel(x, y).unwrap();
            let brightest = pixel.r.max(pixel.g).max(pixel.b);
            assert!(
                brightest <= previous,
                "brightness increased downwards at ({x}, {y})"
            );
            previous = brightest;
        }
    }
}

#[test]
fn renderer_algorithms_execute() {
    let matrix = fixture_matrix(100);
    let p = params(64, 32, 1.0, GradientMode::Linear);

    let linear = LinearRenderer;
    assert_eq!(linear.name(), "Linear gradient");
    let from_trait = linear.execute(matrix.clone(), p.clone()).unwrap();
    let from_fn = render_linear(&matrix, &p).unwrap();
    assert_eq!(from_trait.data(), from_fn.data());

    let radial = RadialRenderer;
    let from_trait = radial.execute(matrix.clone(), p.clone()).unwrap();
    let from_fn = render_radial(&matrix, &p).unwrap();
    assert_eq!(from_trait.data(), from_fn.data());
}
