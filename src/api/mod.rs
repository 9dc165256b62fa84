//! High-level library API: the `Automator`, which discovers input files, optionally
//! validates them, hands each one to the external converter and tallies the outcome.
//! Prefer these entrypoints over the lower-level `core` and `io` modules.
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::core::discovery::{discover_inputs, plan_tasks};
use crate::core::params::AutomatorParams;
use crate::core::validation::validate_files;
use crate::error::{Error, Result};
use crate::io::converter::ExternalConverter;
use crate::types::{BatchSummary, ConversionResult, ConversionTask, ValidationReport};

/// Batch driver for the external converter.
#[derive(Debug, Clone)]
pub struct Automator {
    params: AutomatorParams,
    converter: ExternalConverter,
}

impl Automator {
    /// Fails with [`Error::ArtifactNotFound`] when the converter artifact is absent.
    pub fn new(params: AutomatorParams) -> Result<Self> {
        let converter = ExternalConverter::new(&params)?;
        Ok(Self { params, converter })
    }

    pub fn params(&self) -> &AutomatorParams {
        &self.params
    }

    pub fn converter(&self) -> &ExternalConverter {
        &self.converter
    }

    /// Input files directly under `input_dir`, in lexicographic order.
    pub fn discover(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        discover_inputs(input_dir, &self.params.input_extension)
    }

    /// Valid input files in `input_dir`. Touches nothing on disk.
    pub fn validate(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let files = self.discover(input_dir)?;
        Ok(self.validate_files(&files).valid_files())
    }

    pub fn validate_files(&self, files: &[PathBuf]) -> ValidationReport {
        validate_files(files)
    }

    /// Convert one file; `true` on exit status 0.
    pub fn convert_one(&self, input: &Path, output: &Path) -> bool {
        self.convert_task(&ConversionTask::new(input, output)).is_success()
    }

    /// Run the converter for `task` and log the outcome.
    pub fn convert_task(&self, task: &ConversionTask) -> ConversionResult {
        info!("Converting: {} -> {}", task.input_name(), task.output_name());

        let result = self.converter.invoke(task);
        log_outcome(task, &result);
        result
    }

    /// Convert every input file in `input_dir` into `output_dir`.
    /// Partial failure is reported in the summary, not as an error.
    pub fn batch_convert(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchSummary> {
        log_batch_start(input_dir, output_dir);
        std::fs::create_dir_all(output_dir).map_err(Error::from)?;

        let inputs = self.discover(input_dir)?;
        Ok(self.convert_discovered(input_dir, output_dir, &inputs, None))
    }

    /// Discover once, optionally validate, then convert.
    ///
    /// With `validate`, an input directory without a single valid file aborts with
    /// [`Error::NoValidInputs`] before anything is created or invoked. Invalid files
    /// are counted as failures without reaching the converter.
    pub fn run(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        validate: bool,
    ) -> Result<BatchSummary> {
        let inputs = self.discover(input_dir)?;

        let report = if validate {
            let report = self.validate_files(&inputs);
            if report.valid_count() == 0 {
                error!("No valid JSON files found. Exiting.");
                return Err(Error::NoValidInputs {
                    path: input_dir.to_path_buf(),
                });
            }
            Some(report)
        } else {
            None
        };

        log_batch_start(input_dir, output_dir);
        std::fs::create_dir_all(output_dir).map_err(Error::from)?;

        Ok(self.convert_discovered(input_dir, output_dir, &inputs, report.as_ref()))
    }

    fn convert_discovered(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        inputs: &[PathBuf],
        report: Option<&ValidationReport>,
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();

        if inputs.is_empty() {
            warn!("No JSON files found in {}", input_dir.display());
            return summary;
        }
        info!("Found {} JSON files to process", inputs.len());

        // The report was built from `inputs`, so its entries line up with the tasks.
        let tasks = plan_tasks(inputs, output_dir, &self.params.output_extension);
        for (i, task) in tasks.iter().enumerate() {
            let rejection = report
                .and_then(|r| r.entries.get(i))
                .map(|(_, validity)| validity)
                .filter(|v| !v.is_valid());

            let result = match rejection {
                Some(validity) => {
                    let result = ConversionResult::Rejected {
                        reason: validity.to_string(),
                    };
                    log_outcome(task, &result);
                    result
                }
                None => self.convert_task(task),
            };
            summary.record(&result);
        }

        info!("Batch conversion completed");
        info!("Successful conversions: {}", summary.succeeded);
        info!("Failed conversions: {}", summary.failed);
        summary
    }
}

fn log_outcome(task: &ConversionTask, result: &ConversionResult) {
    match result {
        ConversionResult::Converted(out) => {
            if !out.stdout.trim().is_empty() {
                debug!("Converter output: {}", out.stdout.trim_end());
            }
            info!("Successfully converted: {}", task.input_name());
        }
        ConversionResult::NonZeroExit(out) => {
            error!("Conversion failed for {}", task.input_name());
            match out.exit_code {
                Some(code) => error!("Exit code: {}", code),
                None => error!("Exit code: none (terminated by signal)"),
            }
            error!("Error output: {}", out.stderr.trim_end());
        }
        ConversionResult::SpawnFailed { reason } => {
            error!("Unexpected error converting {}: {}", task.input_name(), reason);
        }
        ConversionResult::Rejected { reason } => {
            error!("Skipped conversion of {}: {}", task.input_name(), reason);
        }
    }
}

fn log_batch_start(input_dir: &Path, output_dir: &Path) {
    info!("Starting batch conversion");
    info!("Input directory: {}", input_dir.display());
    info!("Output directory: {}", output_dir.display());
}

/// Log the closing summary block.
pub fn log_summary(summary: &BatchSummary) {
    let rule = "=".repeat(50);
    info!("{}", rule);
    info!("CONVERSION SUMMARY");
    info!("{}", rule);
    info!("Total files processed: {}", summary.total());
    info!("Successful conversions: {}", summary.succeeded);
    info!("Failed conversions: {}", summary.failed);
    info!("Success rate: {:.1}%", summary.success_rate());
    info!("{}", rule);
}
