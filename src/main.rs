// src/main.rs
//! NMEA Accuracy - static GPS positioning accuracy from NMEA logs

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Target};
use nmea_accuracy::{config::AnalysisConfig, display, pipeline};
use std::path::PathBuf;

/// Parse a GPS log file and compute positioning accuracy
#[derive(Parser, Debug)]
#[command(name = "nmea-accuracy", version, about)]
struct Cli {
    /// Path of the NMEA log to analyze
    file: PathBuf,

    /// Configuration file (defaults to ~/.config/nmea-accuracy/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    Builder::from_default_env()
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AnalysisConfig::load_from(path),
        None => AnalysisConfig::load(),
    }
    .context("loading configuration")?;

    let mut renderer = display::default_renderer();
    let mut stdout = std::io::stdout();

    let outcome = pipeline::run(&cli.file, &config, &mut stdout, renderer.as_mut())
        .with_context(|| format!("analyzing {}", cli.file.display()))?;
    if let pipeline::Outcome::Completed { fixes, .. } = outcome {
        log::debug!("analyzed {} fixes", fixes);
    }

    Ok(())
}
