//! Kolam dot-grid patterns: generation, progressive animation, symmetry and
//! repetition analysis, classification, and reconstruction from images
//!
//! Every pattern is a deterministic function of a normalized grid and a
//! pattern kind. Rendering produces a [`spatial::Drawing`] of vector
//! primitives which the `io` layer serializes to SVG, PNG or GIF.

#![forbid(unsafe_code)]

/// Pattern kinds, templates, static rendering and animation
pub mod algorithm;
/// Symmetry and repetition analysis and pattern classification
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Curve geometry and numeric tolerance helpers
pub mod math;
/// Dot grids and drawing primitives
pub mod spatial;
/// Dot detection and graph inference on raster images
pub mod vision;

pub use io::error::{KolamError, Result};
