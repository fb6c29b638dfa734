// src/pipeline.rs
//! Load -> analyze -> report/export, run once per input file

use crate::{
    analysis::{self, Analysis},
    config::AnalysisConfig,
    display::{self, HistogramRenderer},
    error::{GpsError, Result},
    export,
    loader,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Input file does not exist, nothing produced
    MissingInput(PathBuf),
    /// File read but no fix survived, nothing produced
    NoData,
    Completed {
        analysis: Analysis,
        fixes: usize,
        csv: Option<PathBuf>,
    },
}

/// Run the whole analysis for `input`, printing user-facing status to `out`
pub fn run(
    input: &Path,
    config: &AnalysisConfig,
    out: &mut impl Write,
    renderer: &mut dyn HistogramRenderer,
) -> Result<Outcome> {
    let path = std::path::absolute(input).unwrap_or_else(|_| input.to_path_buf());

    let series = match loader::load_series(&path) {
        Ok(series) => series,
        Err(GpsError::FileNotFound(missing)) => {
            writeln!(out, "Error: file {} does not exist!", missing.display())?;
            return Ok(Outcome::MissingInput(missing));
        }
        Err(e) => return Err(e),
    };

    let Some(analysis) = analysis::analyze(&series, &config.percentiles) else {
        writeln!(out, "Error: no valid GPS data parsed.")?;
        return Ok(Outcome::NoData);
    };

    if let Some((start, end)) = series.time_span() {
        log::info!("fixes span {} to {} UTC", start, end);
    }
    log::debug!(
        "centroid {:.8}, {:.8}",
        analysis.centroid.latitude,
        analysis.centroid.longitude
    );
    log::debug!(
        "mean error {:.2} m, max error {:.2} m",
        analysis.mean_error(),
        analysis.max_error()
    );

    display::report(out, Some(analysis.rms), Some(analysis.percentiles.as_slice()))?;

    let csv = if config.export_csv {
        let csv_path = export::csv_output_path(input, &config.output_dir());
        export::export_csv(&series, &csv_path)?;
        writeln!(out, "Coordinates saved to {}", csv_path.display())?;
        log::debug!("wrote {} rows to {}", series.len(), csv_path.display());
        Some(csv_path)
    } else {
        None
    };

    if config.show_histogram {
        let label = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        display::render_histogram(
            out,
            &analysis.errors,
            &label,
            config.histogram_bins,
            renderer,
        )?;
    }

    Ok(Outcome::Completed {
        fixes: series.len(),
        analysis,
        csv,
    })
}
