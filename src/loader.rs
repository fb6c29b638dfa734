// src/loader.rs
//! Load a position series from an NMEA log file

use crate::{
    error::{GpsError, Result},
    gps::{is_valid_sentence, parse_fix, ParsedFix, PositionSeries, SentenceType},
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Per-run line counters, for diagnostics only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub rejected: usize,
    pub unrecognized: usize,
    pub no_fix: usize,
    pub accepted: usize,
}

/// Read every line of `path` and collect the fixes it contains.
///
/// Returns [`GpsError::FileNotFound`] when `path` is not an existing file.
pub fn load_series(path: &Path) -> Result<PositionSeries> {
    if !path.is_file() {
        return Err(GpsError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let (series, stats) = load_series_from_reader(BufReader::new(file))?;

    log::info!(
        "{}: {} lines, {} fixes ({} rejected, {} other sentences, {} without fix)",
        path.display(),
        stats.lines,
        stats.accepted,
        stats.rejected,
        stats.unrecognized,
        stats.no_fix
    );
    Ok(series)
}

/// Same loop as [`load_series`] over any buffered reader
pub fn load_series_from_reader<R: BufRead>(mut reader: R) -> Result<(PositionSeries, LoadStats)> {
    let mut series = PositionSeries::new();
    let mut stats = LoadStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break; // EOF
        }

        // `\r`, `\n` and `\r\n` all end a line
        let content = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let content = content.strip_suffix(b"\r").unwrap_or(content);
        for raw in content.split(|&b| b == b'\r') {
            stats.lines += 1;
            if let Some(fix) = read_fix(raw, &mut stats) {
                series.push(fix);
            }
        }
    }

    Ok((series, stats))
}

fn read_fix(raw: &[u8], stats: &mut LoadStats) -> Option<ParsedFix> {
    let line = decode_lossy(raw);
    if !is_valid_sentence(&line) {
        stats.rejected += 1;
        return None;
    }

    // Prefix matching and decoding both see the trimmed line
    let line = line.trim();
    let Some(sentence_type) = SentenceType::from_line(line) else {
        stats.unrecognized += 1;
        return None;
    };

    let fix = parse_fix(line, sentence_type);
    match fix {
        Some(_) => stats.accepted += 1,
        None => stats.no_fix += 1,
    }
    fix
}

/// UTF-8 decode, dropping undecodable bytes instead of failing
fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}
