// src/display/mod.rs
//! Report printing and error histogram rendering

pub mod terminal;

#[cfg(feature = "gui")]
pub mod gui;

use crate::{analysis::PercentileError, error::Result};
use std::io::Write;

pub const X_LABEL: &str = "Error (meters)";
pub const Y_LABEL: &str = "Frequency";

/// Equal-width binning of an error series
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning their range.
    ///
    /// The last bin is closed on the right. A degenerate range (all values
    /// equal) is widened to one unit centred on the value.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0; bins];
        for &v in values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self { edges, counts })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Something that can show a histogram to the user
pub trait HistogramRenderer {
    fn render(&mut self, histogram: &Histogram, title: &str) -> Result<()>;
}

/// Renderer that draws nothing
#[derive(Debug, Default)]
pub struct NullRenderer;

impl HistogramRenderer for NullRenderer {
    fn render(&mut self, _histogram: &Histogram, _title: &str) -> Result<()> {
        Ok(())
    }
}

/// Print RMS and percentile errors, or a failure line for whichever is missing
pub fn report(
    out: &mut impl Write,
    rms: Option<f64>,
    percentiles: Option<&[PercentileError]>,
) -> Result<()> {
    match rms {
        Some(rms) => writeln!(out, "RMS: {:.2} meters", rms)?,
        None => writeln!(out, "RMS calculation failed.")?,
    }

    match percentiles {
        Some(values) if !values.is_empty() => {
            for p in values {
                writeln!(out, "{}% percentile error: {:.2} meters", p.level, p.meters)?;
            }
        }
        _ => writeln!(out, "Unable to compute percentile errors.")?,
    }
    Ok(())
}

/// Bin `errors` and hand them to `renderer`, or print why there is nothing to show
pub fn render_histogram(
    out: &mut impl Write,
    errors: &[f64],
    label: &str,
    bins: usize,
    renderer: &mut dyn HistogramRenderer,
) -> Result<()> {
    match Histogram::new(errors, bins) {
        Some(histogram) => renderer.render(&histogram, label),
        None => {
            writeln!(out, "Error: not enough error data to plot!")?;
            Ok(())
        }
    }
}

/// Check if a graphical display is available
#[cfg(feature = "gui")]
pub fn should_use_gui() -> bool {
    std::env::var("DISPLAY").is_ok() || std::env::var("WAYLAND_DISPLAY").is_ok()
}

#[cfg(not(feature = "gui"))]
pub fn should_use_gui() -> bool {
    false
}

/// Pick the renderer for this environment
pub fn default_renderer() -> Box<dyn HistogramRenderer> {
    #[cfg(feature = "gui")]
    {
        if should_use_gui() {
            return Box::new(gui::GuiRenderer::new());
        }
    }
    Box::new(terminal::TerminalRenderer::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(Histogram, String)>,
    }

    impl HistogramRenderer for RecordingRenderer {
        fn render(&mut self, histogram: &Histogram, title: &str) -> Result<()> {
            self.calls.push((histogram.clone(), title.to_string()));
            Ok(())
        }
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_values() {
        let mut buf = Vec::new();
        let percentiles = [
            PercentileError { level: 68.0, meters: 1.234 },
            PercentileError { level: 95.0, meters: 2.0 },
        ];
        report(&mut buf, Some(0.0), Some(&percentiles[..])).unwrap();

        assert_eq!(
            output(buf),
            "RMS: 0.00 meters\n68% percentile error: 1.23 meters\n95% percentile error: 2.00 meters\n"
        );
    }

    #[test]
    fn test_report_without_data() {
        let mut buf = Vec::new();
        report(&mut buf, None, None).unwrap();

        let text = output(buf);
        assert!(text.contains("RMS calculation failed."));
        assert!(text.contains("Unable to compute percentile errors."));
        assert!(!text.contains("0.00"));
    }

    #[test]
    fn test_histogram_binning() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 10.0];
        let histogram = Histogram::new(&values, 5).unwrap();

        assert_eq!(histogram.edges, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(histogram.counts, vec![2, 2, 1, 0, 1]);
        assert_eq!(histogram.total(), values.len());
        assert_eq!(histogram.max_count(), 2);
    }

    #[test]
    fn test_histogram_degenerate_range() {
        let histogram = Histogram::new(&[0.0; 4], 50).unwrap();
        assert_eq!(histogram.bins(), 50);
        assert_eq!(histogram.total(), 4);
        assert_eq!(histogram.edges[0], -0.5);
        assert_eq!(histogram.edges[50], 0.5);
        assert!(Histogram::new(&[], 50).is_none());
    }

    #[test]
    fn test_render_histogram() {
        let mut buf = Vec::new();
        let mut renderer = RecordingRenderer::default();
        render_histogram(&mut buf, &[0.5, 1.5, 2.5], "survey", 50, &mut renderer).unwrap();

        assert!(buf.is_empty());
        assert_eq!(renderer.calls.len(), 1);
        assert_eq!(renderer.calls[0].1, "survey");
        assert_eq!(renderer.calls[0].0.bins(), 50);
    }

    #[test]
    fn test_render_histogram_without_errors() {
        let mut buf = Vec::new();
        let mut renderer = RecordingRenderer::default();
        render_histogram(&mut buf, &[], "survey", 50, &mut renderer).unwrap();

        assert!(renderer.calls.is_empty());
        assert_eq!(output(buf), "Error: not enough error data to plot!\n");
        assert!(NullRenderer.render(&Histogram::new(&[1.0], 1).unwrap(), "x").is_ok());
    }
}
