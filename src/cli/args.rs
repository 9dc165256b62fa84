use clap::Parser;
use std::path::PathBuf;

use jsonbatch::{LogLevel, LogTarget, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "jsonbatch",
    version,
    about = "Automate JSON to CSV conversion with an external converter"
)]
pub struct CliArgs {
    /// Input directory containing JSON files
    pub input_dir: PathBuf,

    /// Output directory for CSV files (created if missing)
    pub output_dir: PathBuf,

    /// Path to the converter artifact [default: target/dataintegration-1.0-SNAPSHOT.jar]
    #[arg(long)]
    pub jar_path: Option<PathBuf>,

    /// Validate JSON files before conversion; abort if none are valid
    #[arg(long, default_value_t = false)]
    pub validate: bool,

    /// Enable verbose (debug) logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Java executable used to run .jar artifacts [default: java]
    #[arg(long)]
    pub java: Option<PathBuf>,

    /// Program used to run a non-jar artifact (e.g. sh, python3)
    #[arg(long)]
    pub launcher: Option<PathBuf>,

    /// Log file, appended to on every run [default: conversion.log]
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Where log lines go
    #[arg(long, value_enum)]
    pub log_target: Option<LogTarget>,

    /// JSON settings file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Layer the command-line flags over `base`.
    pub fn apply_to(&self, mut base: Settings) -> Settings {
        if let Some(jar) = &self.jar_path {
            base.automator.artifact = jar.clone();
        }
        if let Some(java) = &self.java {
            base.automator.java = java.clone();
        }
        if let Some(launcher) = &self.launcher {
            base.automator.launcher = Some(launcher.clone());
        }
        if let Some(file) = &self.log_file {
            base.logging.file = file.clone();
        }
        if let Some(target) = self.log_target {
            base.logging.target = target;
        }
        if self.verbose {
            base.logging.min_level = LogLevel::Debug;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_conventional_layout() {
        let args = CliArgs::parse_from(["jsonbatch", "in", "out"]);
        assert_eq!(args.input_dir, PathBuf::from("in"));
        assert!(!args.validate && !args.verbose);

        let settings = args.apply_to(Settings::default());
        assert_eq!(
            settings.automator.artifact,
            PathBuf::from("target/dataintegration-1.0-SNAPSHOT.jar")
        );
        assert_eq!(settings.logging.min_level, LogLevel::Info);
        assert_eq!(settings.logging.target, LogTarget::Both);
    }

    #[test]
    fn flags_override_settings() {
        let args = CliArgs::parse_from([
            "jsonbatch",
            "in",
            "out",
            "--jar-path",
            "conv.sh",
            "--launcher",
            "sh",
            "--verbose",
            "--log-target",
            "console",
            "--validate",
        ]);
        let mut base = Settings::default();
        base.automator.launcher = Some(PathBuf::from("bash"));
        base.automator.output_extension = "tsv".into();

        let settings = args.apply_to(base);
        assert!(args.validate);
        assert_eq!(settings.automator.artifact, PathBuf::from("conv.sh"));
        assert_eq!(settings.automator.launcher, Some(PathBuf::from("sh")));
        assert_eq!(settings.automator.output_extension, "tsv");
        assert_eq!(settings.logging.min_level, LogLevel::Debug);
        assert_eq!(settings.logging.target, LogTarget::Console);
    }

    #[test]
    fn both_directories_are_required() {
        assert!(CliArgs::try_parse_from(["jsonbatch", "in"]).is_err());
    }
}
