// src/config.rs
//! Analysis settings stored as JSON

use crate::analysis::DEFAULT_PERCENTILES;
use crate::error::{GpsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub histogram_bins: usize,
    pub percentiles: Vec<f64>,
    /// Directory for the CSV export, current directory when unset
    pub output_dir: Option<PathBuf>,
    pub export_csv: bool,
    pub show_histogram: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 50,
            percentiles: DEFAULT_PERCENTILES.to_vec(),
            output_dir: None,
            export_csv: true,
            show_histogram: true,
        }
    }
}

impl AnalysisConfig {
    /// Load from the per-user config file, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load from an explicit file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| GpsError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| GpsError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GpsError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .map_err(|e| GpsError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(GpsError::Config("histogram_bins must be at least 1".to_string()));
        }
        if let Some(p) = self.percentiles.iter().find(|p| !(0.0..=100.0).contains(*p)) {
            return Err(GpsError::Config(format!("percentile {} is outside 0..=100", p)));
        }
        Ok(())
    }

    /// `$HOME/.config/nmea-accuracy/config.json`
    pub fn get_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| GpsError::Config("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("nmea-accuracy")
            .join("config.json"))
    }

    /// Output directory for exports
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
