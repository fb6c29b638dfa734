// src/error.rs
//! Error types for the accuracy analyzer

use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, GpsError>;

#[derive(Debug)]
pub enum GpsError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    FileNotFound(PathBuf),
    Config(String),
    Gui(String),
}

impl fmt::Display for GpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsError::Io(e) => write!(f, "IO error: {}", e),
            GpsError::Json(e) => write!(f, "JSON error: {}", e),
            GpsError::Csv(e) => write!(f, "CSV error: {}", e),
            GpsError::FileNotFound(path) => write!(f, "file {} does not exist!", path.display()),
            GpsError::Config(msg) => write!(f, "Config error: {}", msg),
            GpsError::Gui(msg) => write!(f, "GUI error: {}", msg),
        }
    }
}

impl std::error::Error for GpsError {}

impl From<std::io::Error> for GpsError {
    fn from(error: std::io::Error) -> Self {
        GpsError::Io(error)
    }
}

impl From<serde_json::Error> for GpsError {
    fn from(error: serde_json::Error) -> Self {
        GpsError::Json(error)
    }
}

impl From<csv::Error> for GpsError {
    fn from(error: csv::Error) -> Self {
        GpsError::Csv(error)
    }
}
