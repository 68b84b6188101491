//! Reflective and rotational symmetry of patterns and point sets
//!
//! Symmetry is either looked up for a known [`PatternKind`] (the intended
//! design symmetry) or measured on raw coordinates. The measured checks
//! reflect every point and require a counterpart within a distance tolerance;
//! the rotational check requires the sorted polar angles around the centroid
//! to be evenly spaced.

use crate::algorithm::kind::PatternKind;
use crate::io::configuration::{
    IMAGE_RADIAL_ANGLE_TOLERANCE, IMAGE_SYMMETRY_TOLERANCE, MIN_SYMMETRY_POINTS,
    RADIAL_ANGLE_TOLERANCE, SYMMETRY_TOLERANCE,
};
use crate::math::tolerance::all_close_absolute;
use crate::spatial::drawing::Point;
use serde::Serialize;
use std::f64::consts::TAU;
use std::fmt;

/// Four-flag symmetry summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SymmetryRecord {
    /// Mirror symmetry about the horizontal line through the centre
    pub horizontal: bool,
    /// Mirror symmetry about the vertical line through the centre
    pub vertical: bool,
    /// Mirror symmetry about the `y = x` diagonal
    pub diagonal: bool,
    /// Evenly spaced rotational structure around the centre
    pub radial: bool,
}

impl SymmetryRecord {
    /// Record with every flag cleared
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
        diagonal: false,
        radial: false,
    };

    #[allow(clippy::fn_params_excessive_bools)]
    const fn from_flags(horizontal: bool, vertical: bool, diagonal: bool, radial: bool) -> Self {
        Self {
            horizontal,
            vertical,
            diagonal,
            radial,
        }
    }

    /// Whether any flag is set
    pub const fn any(&self) -> bool {
        self.horizontal || self.vertical || self.diagonal || self.radial
    }

    /// Whether the pattern is symmetric about both axes
    pub const fn bilateral(&self) -> bool {
        self.horizontal && self.vertical
    }

    /// Axes whose flag is set, in declaration order
    pub fn axes(&self) -> Vec<SymmetryAxis> {
        SymmetryAxis::ALL
            .into_iter()
            .filter(|axis| self.has(*axis))
            .collect()
    }

    /// Flag for one axis
    pub const fn has(&self, axis: SymmetryAxis) -> bool {
        match axis {
            SymmetryAxis::Horizontal => self.horizontal,
            SymmetryAxis::Vertical => self.vertical,
            SymmetryAxis::Diagonal => self.diagonal,
            SymmetryAxis::Radial => self.radial,
        }
    }
}

/// One kind of symmetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetryAxis {
    /// Mirror across a horizontal line
    Horizontal,
    /// Mirror across a vertical line
    Vertical,
    /// Mirror across the diagonals
    Diagonal,
    /// Rotation around the centre
    Radial,
}

impl SymmetryAxis {
    /// Every axis in report order
    pub const ALL: [Self; 4] = [
        Self::Horizontal,
        Self::Vertical,
        Self::Diagonal,
        Self::Radial,
    ];

    /// Lowercase identifier used in reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Diagonal => "diagonal",
            Self::Radial => "radial",
        }
    }

    /// Identifier lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.name() == name)
    }

    /// Human-readable meaning
    pub const fn explanation(self) -> &'static str {
        match self {
            Self::Horizontal => "Pattern is symmetric about a horizontal line",
            Self::Vertical => "Pattern is symmetric about a vertical line",
            Self::Diagonal => "Pattern is symmetric about diagonal axes",
            Self::Radial => "Pattern has rotational symmetry around center",
        }
    }
}

impl fmt::Display for SymmetryAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tolerances of the measured checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryTolerance {
    /// Largest distance between a point and its nearest reflected counterpart
    pub distance: f64,
    /// Largest deviation of an angular gap from `2π / n`, in radians
    pub angle: f64,
    /// Fewest points for which any flag can be set
    pub min_points: usize,
}

impl Default for SymmetryTolerance {
    fn default() -> Self {
        Self {
            distance: SYMMETRY_TOLERANCE,
            angle: RADIAL_ANGLE_TOLERANCE,
            min_points: MIN_SYMMETRY_POINTS,
        }
    }
}

impl SymmetryTolerance {
    /// Tolerances for dot centres detected in raster images
    pub fn image() -> Self {
        Self {
            distance: IMAGE_SYMMETRY_TOLERANCE,
            angle: IMAGE_RADIAL_ANGLE_TOLERANCE,
            ..Self::default()
        }
    }
}

/// Intended design symmetry of a pattern kind
pub const fn symmetry_of_kind(kind: PatternKind) -> SymmetryRecord {
    match kind {
        PatternKind::Basic | PatternKind::Diamond | PatternKind::Compass => {
            SymmetryRecord::from_flags(true, true, true, false)
        }
        PatternKind::Spiral | PatternKind::Rose => {
            SymmetryRecord::from_flags(false, false, false, true)
        }
        PatternKind::Flower | PatternKind::Lotus => {
            SymmetryRecord::from_flags(true, true, false, true)
        }
        PatternKind::Star | PatternKind::Sunburst | PatternKind::Mandala => {
            SymmetryRecord::from_flags(true, true, true, true)
        }
    }
}

/// Mean of a point set, `None` when empty
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let count = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(x, y), point| (x + point.x, y + point.y));
    Some(Point::new(sum_x / count, sum_y / count))
}

/// Whether every point has a transformed counterpart within `tolerance`
fn invariant_under(points: &[Point], tolerance: f64, transform: impl Fn(Point) -> Point) -> bool {
    let transformed: Vec<Point> = points.iter().map(|point| transform(*point)).collect();
    points.iter().all(|point| {
        transformed
            .iter()
            .map(|candidate| candidate.distance(*point))
            .fold(f64::INFINITY, f64::min)
            <= tolerance
    })
}

/// Mirror across the horizontal line through `center`
pub fn horizontal_symmetry(points: &[Point], center: Point, tolerance: f64) -> bool {
    invariant_under(points, tolerance, |point| {
        Point::new(point.x, 2.0f64.mul_add(center.y, -point.y))
    })
}

/// Mirror across the vertical line through `center`
pub fn vertical_symmetry(points: &[Point], center: Point, tolerance: f64) -> bool {
    invariant_under(points, tolerance, |point| {
        Point::new(2.0f64.mul_add(center.x, -point.x), point.y)
    })
}

/// Invariance under swapping the raw `x` and `y` coordinates
pub fn diagonal_symmetry(points: &[Point], tolerance: f64) -> bool {
    invariant_under(points, tolerance, |point| Point::new(point.y, point.x))
}

/// Evenly spaced polar angles around `center`
///
/// Consecutive gaps of the sorted angles must each lie within `tolerance`
/// radians of `2π / n`. The wrap-around gap is not checked.
pub fn radial_symmetry(points: &[Point], center: Point, tolerance: f64) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut angles: Vec<f64> = points
        .iter()
        .map(|point| (point.y - center.y).atan2(point.x - center.x))
        .collect();
    angles.sort_by(f64::total_cmp);
    let gaps: Vec<f64> = angles
        .windows(2)
        .filter_map(|pair| match pair {
            [first, second] => Some(second - first),
            _ => None,
        })
        .collect();
    all_close_absolute(&gaps, TAU / points.len() as f64, tolerance)
}

/// Measure symmetry of a point set around its centroid
///
/// Fewer than `tolerance.min_points` points give [`SymmetryRecord::NONE`].
pub fn analyze_points(points: &[Point], tolerance: SymmetryTolerance) -> SymmetryRecord {
    if points.len() < tolerance.min_points {
        return SymmetryRecord::NONE;
    }
    let Some(center) = centroid(points) else {
        return SymmetryRecord::NONE;
    };
    SymmetryRecord {
        horizontal: horizontal_symmetry(points, center, tolerance.distance),
        vertical: vertical_symmetry(points, center, tolerance.distance),
        diagonal: diagonal_symmetry(points, tolerance.distance),
        radial: radial_symmetry(points, center, tolerance.angle),
    }
}

/// Symmetry of dot centres found in an image; the diagonal is not measured
pub fn analyze_image_points(points: &[Point]) -> SymmetryRecord {
    SymmetryRecord {
        diagonal: false,
        ..analyze_points(points, SymmetryTolerance::image())
    }
}
