//! Input/output: errors, constants, exports and the command-line front end

/// Command-line interface
pub mod cli;
/// Named constants and defaults
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// Drawing rasterization and PNG export
pub mod image;
/// Progress display for frame rendering
pub mod progress;
/// Flat key-value reports
pub mod report;
/// SVG serialization
pub mod svg;
/// Animated GIF and per-frame export
pub mod visualization;
