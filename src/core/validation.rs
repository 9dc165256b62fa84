use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use tracing::{debug, error, info, warn};

use crate::types::{ValidationReport, Validity, display_name};

/// Parse `path` as JSON without building a value tree.
pub fn check_json_file(path: &Path) -> Validity {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return Validity::Unreadable(e.to_string()),
    };
    match serde_json::from_slice::<IgnoredAny>(&bytes) {
        Ok(_) => Validity::Valid,
        Err(e) => Validity::Malformed(e.to_string()),
    }
}

/// Check every file, logging each rejection and a closing tally.
pub fn validate_files(files: &[PathBuf]) -> ValidationReport {
    info!("Validating JSON files...");

    let mut report = ValidationReport::default();
    for file in files {
        let validity = check_json_file(file);
        let name = display_name(file);
        match &validity {
            Validity::Valid => debug!("Valid JSON: {}", name),
            Validity::Malformed(diag) => error!("Invalid JSON: {} - {}", name, diag),
            Validity::Unreadable(diag) => error!("Error reading {}: {}", name, diag),
        }
        report.push(file.clone(), validity);
    }

    info!(
        "Validation complete: {} valid, {} invalid",
        report.valid_count(),
        report.invalid_count()
    );

    if report.invalid_count() > 0 {
        warn!("Invalid files found. Consider fixing them before conversion:");
        for (path, _) in report.invalid() {
            warn!("  - {}", display_name(path));
        }
    }

    report
}
