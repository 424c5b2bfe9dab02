//! rondel: validate and generate circular badge images.
//!
//! Two subcommands wrap the badge pipeline:
//!
//! - `verify` checks an image against the badge contract and prints a
//!   validation report (human-readable or JSON). The exit code is 0
//!   exactly when the image passes.
//! - `convert` turns a PNG, JPEG, or GIF source into a conforming
//!   badge and writes it as a PNG.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin rondel -- verify candidate.png --json
//! cargo run --release --bin rondel -- convert photo.jpg --output badges/photo.png
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rondel_pipeline::{BadgeConfig, HappinessModel, ResampleFilter};

/// Validate and generate circular badge images.
#[derive(Parser)]
#[command(name = "rondel", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check an image against the badge contract.
    Verify {
        /// Path to the candidate image.
        image_path: PathBuf,

        /// Per-channel palette tolerance (strict).
        #[arg(long, default_value_t = BadgeConfig::DEFAULT_TOLERANCE)]
        tolerance: u8,

        /// Happiness classification model.
        #[arg(long, value_enum, default_value_t = Model::Palette)]
        model: Model,

        /// Print the validation report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Full badge config as a JSON string.
        ///
        /// When provided, the other parameter flags are ignored.
        #[arg(long)]
        config_json: Option<String>,
    },
    /// Convert an image into a conforming badge PNG.
    Convert {
        /// Path to the source image (PNG, JPEG, or GIF).
        input: PathBuf,

        /// Output path for the badge PNG. Missing parent directories
        /// are created.
        #[arg(short, long)]
        output: PathBuf,

        /// Resampling filter for the stretch onto the canvas.
        #[arg(long, value_enum, default_value_t = CLI_DEFAULT_FILTER)]
        filter: Filter,

        /// Full badge config as a JSON string.
        ///
        /// When provided, the other parameter flags are ignored.
        #[arg(long)]
        config_json: Option<String>,
    },
}

/// Happiness model selection.
#[derive(Clone, Copy, ValueEnum)]
enum Model {
    /// Per-channel box distance to the happy palette.
    Palette,
    /// HSV brightness and saturation thresholds.
    Vibrance,
}

/// Resampling filter selection.
#[derive(Clone, Copy, ValueEnum)]
enum Filter {
    /// Nearest-neighbor (fastest, blocky).
    Nearest,
    /// Bilinear interpolation (fast, decent quality).
    Triangle,
    /// Bicubic Catmull-Rom (moderate speed, good quality).
    CatmullRom,
    /// Gaussian (moderate speed, smooth).
    Gaussian,
    /// Lanczos with 3 lobes (slowest, sharpest).
    Lanczos3,
}

/// Maps a pipeline filter to the CLI's [`Filter`] enum.
const fn filter_from_pipeline(filter: ResampleFilter) -> Filter {
    match filter {
        ResampleFilter::Nearest => Filter::Nearest,
        ResampleFilter::Triangle => Filter::Triangle,
        ResampleFilter::CatmullRom => Filter::CatmullRom,
        ResampleFilter::Gaussian => Filter::Gaussian,
        ResampleFilter::Lanczos3 => Filter::Lanczos3,
    }
}

/// The CLI default filter, derived from
/// [`BadgeConfig::DEFAULT_RESAMPLE_FILTER`] so the two cannot silently
/// diverge.
const CLI_DEFAULT_FILTER: Filter = filter_from_pipeline(BadgeConfig::DEFAULT_RESAMPLE_FILTER);

/// Build a [`BadgeConfig`] for `verify` from CLI arguments.
fn verify_config(
    tolerance: u8,
    model: Model,
    config_json: Option<&str>,
) -> Result<BadgeConfig, String> {
    if let Some(json) = config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(BadgeConfig {
        happiness: match model {
            Model::Palette => HappinessModel::PaletteProximity { tolerance },
            Model::Vibrance => HappinessModel::Vibrance {
                min_value: HappinessModel::DEFAULT_MIN_VALUE,
                min_saturation: HappinessModel::DEFAULT_MIN_SATURATION,
            },
        },
        ..BadgeConfig::default()
    })
}

/// Build a [`BadgeConfig`] for `convert` from CLI arguments.
fn convert_config(filter: Filter, config_json: Option<&str>) -> Result<BadgeConfig, String> {
    if let Some(json) = config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(BadgeConfig {
        resample_filter: match filter {
            Filter::Nearest => ResampleFilter::Nearest,
            Filter::Triangle => ResampleFilter::Triangle,
            Filter::CatmullRom => ResampleFilter::CatmullRom,
            Filter::Gaussian => ResampleFilter::Gaussian,
            Filter::Lanczos3 => ResampleFilter::Lanczos3,
        },
        ..BadgeConfig::default()
    })
}

fn run_verify(
    image_path: &Path,
    tolerance: u8,
    model: Model,
    json: bool,
    config_json: Option<&str>,
) -> ExitCode {
    let config = match verify_config(tolerance, model, config_json) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let image_bytes = match std::fs::read(image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", image_path.display());
            return ExitCode::FAILURE;
        }
    };
    eprintln!(
        "Checking {} ({} bytes)",
        image_path.display(),
        image_bytes.len()
    );

    let image = match rondel_pipeline::decode::decode_any(&image_bytes) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error decoding {}: {e}", image_path.display());
            return ExitCode::FAILURE;
        }
    };

    let report = rondel_pipeline::diagnostics::inspect_image(&image, &config);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report.report());
    }

    if report.verdict.is_pass() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_convert(input: &Path, output: &Path, filter: Filter, config_json: Option<&str>) -> ExitCode {
    let config = match convert_config(filter, config_json) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    eprintln!("Reading image from {}", input.display());
    let image_bytes = match std::fs::read(input) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", input.display());
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "Converting to a {0}x{0} badge (filter: {1})...",
        config.canvas_edge, config.resample_filter
    );
    let badge = match rondel_pipeline::to_badge(&image_bytes, &config) {
        Ok(badge) => badge,
        Err(e) => {
            eprintln!("Conversion error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        eprintln!("Error creating {}: {e}", parent.display());
        return ExitCode::FAILURE;
    }

    eprintln!("Saving to {}", output.display());
    if let Err(e) = badge.save_with_format(output, image::ImageFormat::Png) {
        eprintln!("Error writing {}: {e}", output.display());
        return ExitCode::FAILURE;
    }

    eprintln!("Done.");
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    match Cli::parse().command {
        Command::Verify {
            image_path,
            tolerance,
            model,
            json,
            config_json,
        } => run_verify(&image_path, tolerance, model, json, config_json.as_deref()),
        Command::Convert {
            input,
            output,
            filter,
            config_json,
        } => run_convert(&input, &output, filter, config_json.as_deref()),
    }
}
