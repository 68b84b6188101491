//! Pattern kinds, their element templates, and the renderers built on them

/// Progressive construction of a pattern as a frame sequence
pub mod animation;
/// Flower and lotus petal templates
pub mod floral;
/// Static and progress-aware rendering over the templates
pub mod generator;
/// The ten pattern kinds, their names and families
pub mod kind;
/// Nested square and diamond templates
pub mod nested;
/// Symmetry axis overlays for rendered patterns
pub mod overlay;
/// Star, sunburst, mandala and compass templates
pub mod radial;
/// Spiral and rose templates sampled along an angular sweep
pub mod sweep;
/// Element-count and per-element template abstraction
pub mod template;
