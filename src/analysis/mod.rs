//! Symmetry, repetition and classification of patterns and point sets

/// Pattern labels and attribute flags
pub mod classifier;
/// Grid divisibility and motif detection
pub mod repetition;
/// Table and coordinate symmetry checks
pub mod symmetry;
