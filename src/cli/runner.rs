use std::process::ExitCode;

use tracing::{error, info};

use jsonbatch::{Automator, BatchSummary, LogContext, Settings, log_summary};

use super::args::CliArgs;
use super::errors::AppError;

fn load_settings(args: &CliArgs) -> Result<Settings, AppError> {
    let base = match &args.config {
        Some(path) => Settings::from_json_file(path)?,
        None => Settings::default(),
    };
    Ok(args.apply_to(base))
}

fn execute(args: &CliArgs, settings: Settings) -> Result<BatchSummary, AppError> {
    if !args.input_dir.exists() {
        return Err(jsonbatch::Error::InputDirectoryMissing {
            path: args.input_dir.clone(),
        }
        .into());
    }

    let automator = Automator::new(settings.automator)?;
    info!("Using converter: {}", automator.converter().artifact().display());

    let summary = automator.run(&args.input_dir, &args.output_dir, args.validate)?;
    log_summary(&summary);

    if summary.all_succeeded() {
        Ok(summary)
    } else {
        Err(AppError::ConversionFailures {
            failed: summary.failed,
            total: summary.total(),
        })
    }
}

pub fn run(args: CliArgs) -> ExitCode {
    // No logger exists yet if settings or the log file are unusable.
    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("jsonbatch: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let logging = match LogContext::new(&settings.logging) {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("jsonbatch: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _guard = logging.enter();

    match execute(&args, settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(AppError::ConversionFailures { failed, total }) => {
            error!("{} of {} conversions failed", failed, total);
            ExitCode::FAILURE
        }
        Err(AppError::Batch(jsonbatch::Error::NoValidInputs { .. })) => ExitCode::FAILURE,
        Err(e) => {
            error!("Script execution failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
