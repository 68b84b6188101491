//! Recovering dot patterns from raster images

/// Labelled foreground regions of a binary mask
pub mod components;
/// Three-tier dot detection with a fixed fallback
pub mod detector;
/// Proximity graph over detected dots
pub mod graph;
/// Pattern inference from graph statistics
pub mod inference;
/// Grayscale conversion, smoothing and thresholding
pub mod raster;
/// End-to-end reconstruction from image bytes
pub mod reconstruct;
