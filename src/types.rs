//! Shared types used across jsonbatch.
//! Includes the per-file `ConversionTask` and `ConversionResult`, the run-level
//! `BatchSummary`, validation outcomes, and the logging enums (`LogTarget`, `LogLevel`).
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One input file paired with the output path derived for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    input: PathBuf,
    output: PathBuf,
}

impl ConversionTask {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// File name of the input, for log lines.
    pub fn input_name(&self) -> String {
        display_name(&self.input)
    }

    pub fn output_name(&self) -> String {
        display_name(&self.output)
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Captured result of a converter process that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Outcome of handing one task to the external converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// Exit status 0.
    Converted(ProcessOutput),
    /// The converter ran but reported failure.
    NonZeroExit(ProcessOutput),
    /// The converter could not be started or awaited.
    SpawnFailed { reason: String },
    /// Excluded by the validation pass; the converter was never invoked.
    Rejected { reason: String },
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Converted(_))
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ConversionResult::Converted(out) | ConversionResult::NonZeroExit(out) => out.exit_code,
            _ => None,
        }
    }

    /// Diagnostic text explaining a failure, if any.
    pub fn error_text(&self) -> Option<&str> {
        match self {
            ConversionResult::Converted(_) => None,
            ConversionResult::NonZeroExit(out) => Some(out.stderr.as_str()),
            ConversionResult::SpawnFailed { reason } | ConversionResult::Rejected { reason } => {
                Some(reason.as_str())
            }
        }
    }
}

/// Aggregate counts over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, result: &ConversionResult) {
        if result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Percentage of successful conversions; 0.0 for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.succeeded as f64 / self.total() as f64 * 100.0
        }
    }

    /// `(success_count, failure_count)`
    pub fn counts(&self) -> (usize, usize) {
        (self.succeeded, self.failed)
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Whether a candidate file parsed as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Malformed(String),
    Unreadable(String),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

impl std::fmt::Display for Validity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Validity::Valid => write!(f, "valid"),
            Validity::Malformed(diag) => write!(f, "invalid JSON: {}", diag),
            Validity::Unreadable(diag) => write!(f, "unreadable: {}", diag),
        }
    }
}

/// Per-file validity, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub entries: Vec<(PathBuf, Validity)>,
}

impl ValidationReport {
    pub fn push(&mut self, path: PathBuf, validity: Validity) {
        self.entries.push((path, validity));
    }

    pub fn valid_files(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_valid())
            .map(|(p, _)| p.clone())
            .collect()
    }

    pub fn invalid(&self) -> impl Iterator<Item = (&Path, &Validity)> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_valid())
            .map(|(p, v)| (p.as_path(), v))
    }

    pub fn validity_of(&self, path: &Path) -> Option<&Validity> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, v)| v)
    }

    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.entries.len() - self.valid_count()
    }
}

/// Where log lines go.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    Console,
    File,
    #[default]
    Both,
}

impl LogTarget {
    pub fn console(&self) -> bool {
        matches!(self, LogTarget::Console | LogTarget::Both)
    }

    pub fn file(&self) -> bool {
        matches!(self, LogTarget::File | LogTarget::Both)
    }
}

/// Minimum severity written to any log target.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warning => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exited(code: i32) -> ProcessOutput {
        ProcessOutput {
            exit_code: Some(code),
            stdout: String::new(),
            stderr: if code == 0 { String::new() } else { "boom".into() },
        }
    }

    #[test]
    fn summary_rates() {
        let mut summary = BatchSummary::default();
        assert_eq!(summary.success_rate(), 0.0);
        assert!(summary.all_succeeded());

        summary.record(&ConversionResult::Converted(exited(0)));
        summary.record(&ConversionResult::NonZeroExit(exited(1)));
        assert_eq!(summary.counts(), (1, 1));
        assert_eq!(summary.total(), 2);
        assert_eq!(format!("{:.1}", summary.success_rate()), "50.0");
        assert!(!summary.all_succeeded());
    }

    #[test]
    fn every_failure_variant_counts_as_failed() {
        let mut summary = BatchSummary::default();
        summary.record(&ConversionResult::NonZeroExit(exited(2)));
        summary.record(&ConversionResult::SpawnFailed {
            reason: "no such file".into(),
        });
        summary.record(&ConversionResult::Rejected {
            reason: "invalid JSON".into(),
        });
        assert_eq!(summary.counts(), (0, 3));
    }

    #[test]
    fn result_accessors() {
        let failed = ConversionResult::NonZeroExit(exited(3));
        assert_eq!(failed.exit_code(), Some(3));
        assert_eq!(failed.error_text(), Some("boom"));
        let spawn = ConversionResult::SpawnFailed {
            reason: "denied".into(),
        };
        assert_eq!(spawn.exit_code(), None);
        assert_eq!(spawn.error_text(), Some("denied"));
        assert_eq!(ConversionResult::Converted(exited(0)).error_text(), None);
    }

    #[test]
    fn validation_report_partitions() {
        let mut report = ValidationReport::default();
        report.push("a.json".into(), Validity::Valid);
        report.push("b.json".into(), Validity::Malformed("EOF".into()));
        report.push("c.json".into(), Validity::Unreadable("denied".into()));
        assert_eq!(report.valid_files(), vec![PathBuf::from("a.json")]);
        assert_eq!(report.valid_count(), 1);
        assert_eq!(report.invalid_count(), 2);
        assert_eq!(
            report.validity_of(Path::new("b.json")),
            Some(&Validity::Malformed("EOF".into()))
        );
        assert_eq!(report.invalid().count(), 2);
    }

    #[test]
    fn log_target_flags() {
        assert!(LogTarget::Both.console() && LogTarget::Both.file());
        assert!(!LogTarget::Console.file());
        assert!(!LogTarget::File.console());
    }

    #[test]
    fn log_settings_deserialize_lowercase() {
        let target: LogTarget = serde_json::from_str("\"file\"").unwrap();
        let level: LogLevel = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(target, LogTarget::File);
        assert_eq!(level, LogLevel::Warning);
    }
}
