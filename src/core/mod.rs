//! Core building blocks: run parameters and settings files, input discovery,
//! and JSON validation. These are internal primitives consumed by the
//! high-level `api` module.
pub mod discovery;
pub mod params;
pub mod validation;
