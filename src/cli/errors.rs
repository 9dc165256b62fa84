use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Batch(#[from] jsonbatch::Error),

    #[error("{failed} of {total} conversions failed")]
    ConversionFailures { failed: usize, total: usize },
}
