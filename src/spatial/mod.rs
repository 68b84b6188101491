//! Dot grids and the drawings placed on them
//!
//! This module contains:
//! - Grid geometry and input normalization
//! - The drawing value type and its primitives

/// Vector drawing primitives, colors and strokes
pub mod drawing;
/// Dot-grid geometry and size normalization
pub mod grid;

pub use drawing::{Drawing, Point};
pub use grid::GridSpec;
