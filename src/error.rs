//! Crate-level error type and `Result` alias for structured error handling.
//! Only conditions that abort a run live here; per-file failures are values
//! (`ConversionResult`, `Validity`) and never surface as errors.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Converter artifact not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("Input directory does not exist: {}", path.display())]
    InputDirectoryMissing { path: PathBuf },

    #[error("No valid JSON files found in {}", path.display())]
    NoValidInputs { path: PathBuf },

    #[error("Invalid settings file {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Logging setup error: {0}")]
    Logging(String),
}

impl Error {
    pub fn config<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Config {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    /// True for errors raised before any file was touched.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::ArtifactNotFound { .. } | Error::Config { .. } | Error::Logging(_)
        )
    }
}
