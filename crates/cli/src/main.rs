//! Synical CLI - audio-feature wallpaper generator

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use synical_core::io::read_matrix;
use synical_engine::{render, GradientMode, RenderParams};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "synical")]
#[command(author, version, about = "Create wallpapers from audio features", long_about = None)]
struct Cli {
    /// Path to the feature-matrix file
    input: PathBuf,

    /// Path to save the generated image
    #[arg(short, long, default_value = "wallpaper.png")]
    output: PathBuf,

    /// Vertical resolution of the wallpaper (width follows at 16:9)
    #[arg(short, long, default_value = "1080")]
    size: u32,

    /// Palette vibrancy (0..2)
    #[arg(short = 'b', long, default_value = "1.0")]
    vibrancy: f64,

    /// Gradient mode: linear, radial
    #[arg(short, long, default_value = "linear")]
    mode: String,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn parse_mode(s: &str) -> GradientMode {
    match s.to_lowercase().as_str() {
        "linear" | "lin" | "l" => GradientMode::Linear,
        "radial" | "rad" | "r" => GradientMode::Radial,
        _ => {
            eprintln!("Unknown mode: {s}. Using linear.");
            GradientMode::Linear
        }
    }
}

/// Derive the output width from the vertical resolution at 16:9.
fn width_for(height: u32) -> u32 {
    ((height as u64 * 16 / 9).clamp(1, u32::MAX as u64)) as u32
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mode = parse_mode(&cli.mode);

    let pb = spinner("Reading feature matrix...");
    let matrix = read_matrix(&cli.input).context("Failed to read feature matrix")?;
    pb.finish_and_clear();

    info!(
        "Input: {} channels x {} frames",
        matrix.rows(),
        matrix.cols()
    );
    let stats = matrix.statistics();
    if let (Some(min), Some(max), Some(mean)) = (stats.min, stats.max, stats.mean) {
        info!("Features: min={:.3} max={:.3} mean={:.3}", min, max, mean);
    }

    let height = cli.size.max(1);
    let params = RenderParams {
        width: width_for(height),
        height,
        vibrancy: cli.vibrancy,
        mode,
    };
    info!(
        "Rendering {}x{} {} gradient, vibrancy {:.2}",
        params.width,
        params.height,
        mode.name(),
        params.vibrancy
    );

    let pb = spinner("Rendering gradient...");
    let start = Instant::now();
    let buffer = render(&matrix, &params).context("Failed to render wallpaper")?;
    let elapsed = start.elapsed();
    pb.finish_and_clear();

    let pb = spinner("Writing output...");
    let image = image::RgbImage::from_raw(buffer.width(), buffer.height(), buffer.into_vec())
        .context("Pixel buffer does not match image dimensions")?;
    image
        .save(&cli.output)
        .context("Failed to write output image")?;
    pb.finish_and_clear();

    println!("Wallpaper saved to: {}", cli.output.display());
    println!("  Processing time: {:.2?}", elapsed);

    Ok(())
}
