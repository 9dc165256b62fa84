//! Command Line Interface (CLI) layer for jsonbatch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that wires user options to the
//! library's `Automator` and turns the outcome into an exit code.
//!
//! If you are embedding jsonbatch into another application, prefer the
//! high-level `jsonbatch::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
