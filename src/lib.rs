// src/lib.rs
//! NMEA Accuracy Library
//!
//! Extracts position fixes from NMEA 0183 logs and computes static
//! positioning accuracy: RMS error around the centroid and percentile errors.

pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod gps;
pub mod loader;
pub mod pipeline;

// Re-export main types for convenience
pub use analysis::{analyze, Analysis, Centroid, PercentileError};
pub use config::AnalysisConfig;
pub use display::{Histogram, HistogramRenderer};
pub use error::{GpsError, Result};
pub use gps::{ParsedFix, PositionSeries, SentenceType};
pub use loader::load_series;
pub use pipeline::{run, Outcome};
