//! Repetition detection: subgrid tiling plausibility and small motifs
//!
//! The subgrid check is structural: it reports that a grid divides into more
//! than one subgrid, without comparing tile contents. The motif search is
//! exhaustive over triples and quadruples and is meant for grid-sized point
//! sets only.

use crate::algorithm::kind::PatternKind;
use crate::io::configuration::{MIN_MOTIF_POINTS, MIN_REPETITION_POINTS, MOTIF_RELATIVE_TOLERANCE};
use crate::math::tolerance::all_close_relative;
use crate::spatial::drawing::Point;
use serde::Serialize;

/// Outcome of a repetition search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepetitionRecord {
    /// Whether any repetition was found
    pub has_repetition: bool,
    /// Size of the repeating unit, zero when none
    pub motif_size: usize,
    /// Human-readable summary
    pub description: String,
}

impl RepetitionRecord {
    /// Record for "nothing repeats"
    pub fn none() -> Self {
        Self {
            has_repetition: false,
            motif_size: 0,
            description: "No repetition detected".to_string(),
        }
    }

    fn found(motif_size: usize, description: impl Into<String>) -> Self {
        Self {
            has_repetition: true,
            motif_size,
            description: description.into(),
        }
    }
}

/// Thresholds of the coordinate search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotifTolerance {
    /// Relative tolerance on side and diagonal lengths
    pub relative: f64,
    /// Fewest points for any repetition to be reported
    pub min_points: usize,
    /// Fewest points for the motif search to run
    pub min_motif_points: usize,
}

impl Default for MotifTolerance {
    fn default() -> Self {
        Self {
            relative: MOTIF_RELATIVE_TOLERANCE,
            min_points: MIN_REPETITION_POINTS,
            min_motif_points: MIN_MOTIF_POINTS,
        }
    }
}

/// Static repetition summary of a known pattern kind
pub fn repetition_of_kind(kind: PatternKind) -> RepetitionRecord {
    match kind {
        PatternKind::Basic => RepetitionRecord::found(1, "Nested square repetition"),
        PatternKind::Diamond => RepetitionRecord::found(1, "Diamond shape repetition"),
        PatternKind::Spiral => RepetitionRecord {
            description: "Continuous spiral pattern".to_string(),
            ..RepetitionRecord::none()
        },
        PatternKind::Flower => RepetitionRecord::found(6, "Petal repetition"),
        PatternKind::Lotus => RepetitionRecord::found(8, "Layered petal repetition"),
        PatternKind::Rose => RepetitionRecord {
            description: "Continuous spiral rose".to_string(),
            ..RepetitionRecord::none()
        },
        PatternKind::Star => RepetitionRecord::found(2, "Star point repetition"),
        PatternKind::Sunburst => RepetitionRecord::found(1, "Ray repetition"),
        PatternKind::Mandala => RepetitionRecord::found(1, "Concentric repetition"),
        PatternKind::Compass => RepetitionRecord::found(4, "Directional repetition"),
    }
}

/// Smallest subgrid size that tiles a `grid_size` grid more than once
pub fn subgrid_repetition(grid_size: usize) -> Option<usize> {
    (2..=grid_size / 2).find(|&subgrid| (grid_size / subgrid).pow(2) > 1)
}

/// Whether three points form a non-degenerate, nearly equilateral triangle
pub fn is_equilateral(a: Point, b: Point, c: Point, relative: f64) -> bool {
    let first = a.distance(b);
    first > 0.0 && all_close_relative(&[first, b.distance(c), c.distance(a)], first, relative)
}

/// Whether four points form a non-degenerate, nearly square shape
///
/// Of the six pairwise distances, the four shortest must match the shortest
/// and the two longest must match each other.
pub fn is_square(a: Point, b: Point, c: Point, d: Point, relative: f64) -> bool {
    let mut distances = [
        a.distance(b),
        b.distance(c),
        c.distance(d),
        d.distance(a),
        a.distance(c),
        b.distance(d),
    ];
    distances.sort_by(f64::total_cmp);
    let (sides, diagonals) = distances.split_at(4);
    let (Some(&side), Some(&diagonal)) = (sides.first(), diagonals.first()) else {
        return false;
    };
    side > 0.0
        && all_close_relative(sides, side, relative)
        && all_close_relative(diagonals, diagonal, relative)
}

// Each point paired with the points after it
fn with_rest(points: &[Point]) -> impl Iterator<Item = (Point, &[Point])> {
    points
        .iter()
        .enumerate()
        .map(move |(index, point)| (*point, points.get(index + 1..).unwrap_or_default()))
}

fn has_triangle(points: &[Point], relative: f64) -> bool {
    with_rest(points).any(|(a, after_a)| {
        with_rest(after_a)
            .any(|(b, after_b)| after_b.iter().any(|&c| is_equilateral(a, b, c, relative)))
    })
}

fn has_square(points: &[Point], relative: f64) -> bool {
    with_rest(points).any(|(a, after_a)| {
        with_rest(after_a).any(|(b, after_b)| {
            with_rest(after_b)
                .any(|(c, after_c)| after_c.iter().any(|&d| is_square(a, b, c, d, relative)))
        })
    })
}

/// Search a point set for triangular, then square, motifs
pub fn motif_repetition(points: &[Point], tolerance: MotifTolerance) -> Option<RepetitionRecord> {
    if points.len() < tolerance.min_motif_points {
        return None;
    }
    if has_triangle(points, tolerance.relative) {
        return Some(RepetitionRecord::found(3, "Triangular motifs detected"));
    }
    if has_square(points, tolerance.relative) {
        return Some(RepetitionRecord::found(4, "Square motifs detected"));
    }
    None
}

/// Repetition of a coordinate set laid out on a `grid_size` grid
///
/// The subgrid check wins; motifs are only searched when it finds nothing.
pub fn detect_repetition(
    points: &[Point],
    grid_size: usize,
    tolerance: MotifTolerance,
) -> RepetitionRecord {
    if points.len() < tolerance.min_points {
        return RepetitionRecord::none();
    }
    if let Some(subgrid) = subgrid_repetition(grid_size) {
        return RepetitionRecord::found(
            subgrid,
            format!("Repeating {subgrid}x{subgrid} subgrids detected"),
        );
    }
    motif_repetition(points, tolerance).unwrap_or_else(RepetitionRecord::none)
}
