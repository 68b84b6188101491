//! Numeric helpers shared by the generators and analysers

/// Polar frames, angular sweeps and Bézier evaluation
pub mod curve;
/// Floating point closeness checks and summary statistics
pub mod tolerance;
