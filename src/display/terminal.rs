// src/display/terminal.rs
//! Terminal-based histogram display

use super::{Histogram, HistogramRenderer, X_LABEL, Y_LABEL};
use crate::error::{GpsError, Result};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Horizontal bar chart, one row per bin
pub struct TerminalRenderer {
    bar_width: usize,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { bar_width: 50 }
    }

    pub fn with_bar_width(bar_width: usize) -> Self {
        Self {
            bar_width: bar_width.max(1),
        }
    }

    /// Draw the histogram to any writer
    pub fn draw(&self, out: &mut impl Write, histogram: &Histogram, title: &str) -> Result<()> {
        execute!(
            out,
            SetForegroundColor(Color::Green),
            Print("=".repeat(60)),
            Print("\n"),
            Print(title),
            Print("\n"),
            Print("=".repeat(60)),
            Print("\n"),
            ResetColor
        )
        .map_err(GpsError::Io)?;

        execute!(
            out,
            SetForegroundColor(Color::Yellow),
            Print(format!("{:>21} | {}\n", X_LABEL, Y_LABEL)),
            ResetColor
        )
        .map_err(GpsError::Io)?;

        let max = histogram.max_count().max(1);
        for (i, &count) in histogram.counts.iter().enumerate() {
            let len = (count * self.bar_width + max - 1) / max;
            execute!(
                out,
                Print(format!(
                    "{:>9.2} - {:>9.2} | ",
                    histogram.edges[i],
                    histogram.edges[i + 1]
                )),
                SetForegroundColor(Color::Cyan),
                Print("#".repeat(len)),
                ResetColor,
                Print(format!(" {}\n", count))
            )
            .map_err(GpsError::Io)?;
        }

        out.flush().map_err(GpsError::Io)?;
        Ok(())
    }
}

impl HistogramRenderer for TerminalRenderer {
    fn render(&mut self, histogram: &Histogram, title: &str) -> Result<()> {
        let mut stdout = io::stdout();
        self.draw(&mut stdout, histogram, title)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_every_bin() {
        let histogram = Histogram::new(&[0.0, 1.0, 1.0, 4.0], 4).unwrap();
        let mut buf = Vec::new();
        TerminalRenderer::with_bar_width(10)
            .draw(&mut buf, &histogram, "survey")
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("survey"));
        assert!(text.contains(X_LABEL));
        assert!(text.contains(Y_LABEL));
        assert!(text.contains("     0.00 -      1.00 | "));
        assert!(text.contains("##########"));
        assert_eq!(text.matches(" | ").count(), 5);
    }

    #[test]
    fn test_empty_bins_have_no_bar() {
        let histogram = Histogram {
            edges: vec![0.0, 1.0, 2.0],
            counts: vec![0, 3],
        };
        let mut buf = Vec::new();
        TerminalRenderer::new().draw(&mut buf, &histogram, "t").unwrap();

        let text = String::from_utf8(buf).unwrap();
        let empty_row = text.lines().find(|l| l.contains("0.00 -")).unwrap();
        assert!(!empty_row.contains('#'));
        assert!(empty_row.ends_with(" 0"));
        let full_row = text.lines().find(|l| l.contains("1.00 -")).unwrap();
        assert_eq!(full_row.matches('#').count(), 50);
    }
}
