//! Turrell circle renderer
//!
//! Reads `config.json` from the working directory, renders a radial gradient
//! disc and writes it to `turrell_circle.png`.
//!
//! # Features
//! - timing: print a per-phase wall-clock breakdown after the image is saved

#[macro_use]
extern crate derivative;

pub mod config;
pub mod timing;

use anyhow::{Context, Result};
use config::{CONFIG_FILE, Config};
use image::ImageFormat;
use log::info;
use std::path::Path;
use timing::{Phase, PhaseTimer};

pub const OUTPUT_FILE: &str = "turrell_circle.png";

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Defaults to `info`, `RUST_LOG` overrides it.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Failure message with the full cause chain, printed to stderr even when logging is off
pub fn diagnostic(err: &anyhow::Error) -> String {
    format!("Error: {err:?}")
}

pub fn run() -> Result<PhaseTimer> {
    run_with(CONFIG_FILE, OUTPUT_FILE)
}

/// Load `config_path`, render and save the PNG to `output_path`.
///
/// Nothing is written when loading or rendering fails.
pub fn run_with(config_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<PhaseTimer> {
    let (config_path, output_path) = (config_path.as_ref(), output_path.as_ref());
    let mut timer = PhaseTimer::new();

    let gradient = timer.measure(Phase::ConfigLoad, || -> Result<_> {
        let config = Config::load(config_path)
            .with_context(|| format!("load {} failed", config_path.display()))?;

        info!(
            "{}x{} ratio={} center={} edge={}",
            config.width,
            config.height,
            config.circle_radius_ratio,
            config.center_color,
            config.edge_color
        );

        Ok(config.gradient()?)
    })?;

    let mut canvas = timer
        .measure(Phase::CanvasInit, || gradient.new_canvas())
        .context("canvas initialization failed")?;

    timer
        .measure(Phase::PixelProcessing, || gradient.par_paint(&mut canvas))
        .context("pixel processing failed")?;

    timer
        .measure(Phase::FileSave, || {
            canvas.save_with_format(output_path, ImageFormat::Png)
        })
        .with_context(|| format!("save {} failed", output_path.display()))?;

    info!("saved {}", output_path.display());
    Ok(timer)
}
