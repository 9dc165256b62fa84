#![doc = r#"
jsonbatch — batch driver for an external JSON to CSV converter.

The conversion itself belongs to an external program (typically a jar). This crate
finds the JSON files in a directory, optionally checks that each one parses, runs
the converter once per file, and reports how many conversions succeeded. It powers
the `jsonbatch` CLI and can be embedded in other Rust applications.

Quick start: convert a directory
--------------------------------
```rust,no_run
use std::path::Path;
use jsonbatch::{Automator, AutomatorParams};

fn main() -> jsonbatch::Result<()> {
    let automator = Automator::new(AutomatorParams::with_artifact(
        "target/dataintegration-1.0-SNAPSHOT.jar",
    ))?;

    let summary = automator.batch_convert(Path::new("data/json"), Path::new("data/csv"))?;
    println!(
        "converted={} failed={} rate={:.1}%",
        summary.succeeded,
        summary.failed,
        summary.success_rate()
    );
    Ok(())
}
```

Validate first, run a script through a launcher
-----------------------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use jsonbatch::{Automator, AutomatorParams};

fn main() -> jsonbatch::Result<()> {
    let params = AutomatorParams {
        launcher: Some(PathBuf::from("python3")),
        ..AutomatorParams::with_artifact("tools/json2csv.py")
    };
    let automator = Automator::new(params)?;

    // Invalid files are counted as failures and never reach the converter.
    let summary = automator.run(Path::new("in"), Path::new("out"), true)?;
    assert_eq!(summary.total(), automator.discover(Path::new("in"))?.len());
    Ok(())
}
```

Logging
-------
Nothing is logged until a [`LogContext`] is entered. It is built explicitly from a
[`LoggingConfig`] (console, file or both; minimum level) and scoped to the caller:

```rust,no_run
use jsonbatch::{LogContext, LoggingConfig};

fn main() -> jsonbatch::Result<()> {
    let logging = LogContext::new(&LoggingConfig::default())?;
    let _guard = logging.enter();
    tracing::info!("logged to stderr and conversion.log");
    Ok(())
}
```

Error handling
--------------
Only run-aborting conditions are errors; a file that fails to convert is a
[`ConversionResult`] and a count in the [`BatchSummary`].

```rust,no_run
use std::path::Path;
use jsonbatch::{Automator, AutomatorParams, Error};

fn main() {
    match Automator::new(AutomatorParams::default()) {
        Ok(automator) => {
            let _ = automator.run(Path::new("in"), Path::new("out"), false);
        }
        Err(Error::ArtifactNotFound { path }) => {
            eprintln!("build the converter first: {}", path.display())
        }
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — the `Automator` and the summary report.
- [`types`] — tasks, results, summaries and validation outcomes.
- [`core`] — parameters, settings files, discovery and validation.
- [`io`] — the external converter process.
- [`logging`] — the scoped logging context.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

// Curated public API surface
pub use core::params::{AutomatorParams, LoggingConfig, Settings};
pub use error::{Error, Result};
pub use types::{
    BatchSummary, ConversionResult, ConversionTask, LogLevel, LogTarget, ProcessOutput,
    ValidationReport, Validity,
};

pub use api::{Automator, log_summary};
pub use io::ExternalConverter;
pub use logging::LogContext;
