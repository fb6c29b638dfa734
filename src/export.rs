// src/export.rs
//! Coordinate export

use crate::{error::Result, gps::PositionSeries};
use std::path::{Path, PathBuf};

/// `<input base name>.csv` inside `dir`
pub fn csv_output_path(input: &Path, dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    dir.join(format!("{}.csv", stem))
}

/// Write one `latitude,longitude` row per fix, no header, in series order
pub fn export_csv(series: &PositionSeries, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    for fix in series {
        writer.write_record(&[format_coordinate(fix.latitude), format_coordinate(fix.longitude)])?;
    }
    writer.flush()?;
    Ok(())
}

/// Shortest round-trip decimal, always with a fractional part (`-33.0`)
fn format_coordinate(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains(['.', 'e', 'E']) {
        format!("{}.0", text)
    } else {
        text
    }
}
