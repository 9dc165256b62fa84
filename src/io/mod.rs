//! Process I/O: the `converter` wrapper that runs the external JSON to CSV tool
//! and captures its exit status and output streams.
pub mod converter;
pub use converter::ExternalConverter;
