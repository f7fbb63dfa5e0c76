//! Input/output, configuration and error handling

/// Command-line interface and pipeline driver
pub mod cli;
/// Constants and extraction settings
pub mod configuration;
/// Error types
pub mod error;
/// PNG loading and headless rendering
pub mod image;
/// Precomputation progress display
pub mod progress;
