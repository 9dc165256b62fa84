use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{LogLevel, LogTarget};

pub const DEFAULT_ARTIFACT: &str = "target/dataintegration-1.0-SNAPSHOT.jar";
pub const DEFAULT_LOG_FILE: &str = "conversion.log";

/// Converter parameters suitable for settings files and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatorParams {
    /// The external converter: a jar, a script or a native executable
    pub artifact: PathBuf,
    /// JVM used when `artifact` is a jar
    pub java: PathBuf,
    /// Interpreter for non-jar artifacts; None runs the artifact directly
    pub launcher: Option<PathBuf>,
    /// Extension (without dot) of the files picked up from the input directory
    pub input_extension: String,
    /// Extension given to output files
    pub output_extension: String,
}

impl Default for AutomatorParams {
    fn default() -> Self {
        Self {
            artifact: PathBuf::from(DEFAULT_ARTIFACT),
            java: PathBuf::from("java"),
            launcher: None,
            input_extension: "json".to_string(),
            output_extension: "csv".to_string(),
        }
    }
}

impl AutomatorParams {
    pub fn with_artifact(artifact: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub target: LogTarget,
    pub min_level: LogLevel,
    /// Append-only log file, relative to the working directory unless absolute
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            target: LogTarget::Both,
            min_level: LogLevel::Info,
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Everything a run can be configured with, as stored in a JSON settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub automator: AutomatorParams,
    pub logging: LoggingConfig,
}

impl Settings {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::config(path, e))?;
        serde_json::from_str(&text).map_err(|e| Error::config(path, e))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::config("<inline>", e))
    }
}
