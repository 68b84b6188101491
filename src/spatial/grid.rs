//! Dot-grid geometry and boundary normalization of requested sizes
//!
//! Grid sizes are clamped once, at construction. Odd sizes have an exact
//! centre dot. Even sizes are accepted as well, but the centre index is
//! `size / 2` (floor), so the centre sits half a cell off the true middle and
//! patterns drawn around it are not perfectly bilateral. That offset is kept
//! deliberately.

use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DOT_SPACING, GRID_DOT_RADIUS, MAX_GRID_SIZE, MIN_GRID_SIZE, PADDING,
};
use crate::spatial::drawing::Point;
use tracing::debug;

/// A value produced by boundary normalization, with a record of whether the
/// raw input had to be changed to obtain it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized<T> {
    /// The accepted value
    pub value: T,
    /// Whether the raw input was clamped, defaulted or replaced
    pub was_corrected: bool,
}

impl<T> Normalized<T> {
    /// Value accepted as given
    pub const fn accepted(value: T) -> Self {
        Self {
            value,
            was_corrected: false,
        }
    }

    /// Value substituted for an out-of-range or unparsable input
    pub const fn corrected(value: T) -> Self {
        Self {
            value,
            was_corrected: true,
        }
    }

    /// Discard the correction flag
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Fixed lengths of the grid layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Distance between neighbouring dots
    pub dot_spacing: f64,
    /// Margin between canvas edge and the outer dots
    pub padding: f64,
    /// Radius of the reference dots
    pub dot_radius: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dot_spacing: DOT_SPACING,
            padding: PADDING,
            dot_radius: GRID_DOT_RADIUS,
        }
    }
}

/// Immutable description of a square dot grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    size: usize,
    config: GridConfig,
}

impl GridSpec {
    /// Grid with default spacing, size clamped to `[3, 15]`
    pub fn new(size: i64) -> Self {
        Self::normalize(size).value
    }

    /// Grid with custom layout lengths, size clamped to `[3, 15]`
    pub fn with_config(size: i64, config: GridConfig) -> Self {
        Self {
            config,
            ..Self::normalize(size).value
        }
    }

    /// Clamp a numeric size, recording whether clamping happened
    pub fn normalize(size: i64) -> Normalized<Self> {
        let min = MIN_GRID_SIZE as i64;
        let max = MAX_GRID_SIZE as i64;
        let clamped = size.clamp(min, max);
        let spec = Self {
            size: clamped as usize,
            config: GridConfig::default(),
        };
        if clamped == size {
            Normalized::accepted(spec)
        } else {
            debug!(requested = size, clamped, "grid size clamped");
            Normalized::corrected(spec)
        }
    }

    /// Parse and clamp a textual size; unparsable text becomes the default size
    pub fn parse(raw: &str) -> Normalized<Self> {
        raw.trim().parse::<i64>().map_or_else(
            |_| {
                debug!(raw, default = DEFAULT_GRID_SIZE, "unparsable grid size");
                Normalized::corrected(Self::new(DEFAULT_GRID_SIZE as i64))
            },
            Self::normalize,
        )
    }

    /// Number of dots per row and column
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Layout lengths
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Distance between neighbouring dots
    pub const fn spacing(&self) -> f64 {
        self.config.dot_spacing
    }

    /// Margin between canvas edge and the outer dots
    pub const fn padding(&self) -> f64 {
        self.config.padding
    }

    /// Index of the centre row and column, `size / 2`
    pub const fn center_index(&self) -> usize {
        self.size / 2
    }

    /// Side length of the square canvas, `size * spacing + 2 * padding`
    pub fn canvas_extent(&self) -> f64 {
        (self.size as f64).mul_add(self.config.dot_spacing, 2.0 * self.config.padding)
    }

    /// Canvas coordinate of a grid index along either axis
    pub fn coordinate(&self, index: usize) -> f64 {
        (index as f64).mul_add(self.config.dot_spacing, self.config.padding)
    }

    /// Canvas coordinate of a signed offset from the centre index
    pub fn centered_coordinate(&self, offset: i64) -> f64 {
        let index = self.center_index() as i64 + offset;
        (index as f64).mul_add(self.config.dot_spacing, self.config.padding)
    }

    /// Position of the centre dot
    pub fn center(&self) -> Point {
        let c = self.coordinate(self.center_index());
        Point::new(c, c)
    }

    /// Dot positions in row-major order
    pub fn dots(&self) -> Vec<Point> {
        (0..self.size)
            .flat_map(|row| {
                (0..self.size).map(move |col| Point::new(self.coordinate(col), self.coordinate(row)))
            })
            .collect()
    }

    /// Radius scaled from the half-grid extent, `center_index * spacing * factor`
    pub fn radius(&self, factor: f64) -> f64 {
        self.center_index() as f64 * self.config.dot_spacing * factor
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE as i64)
    }
}
