//! Pattern classification from a known kind or from raw coordinates

use crate::algorithm::generator::render;
use crate::algorithm::kind::PatternKind;
use crate::analysis::repetition::{
    MotifTolerance, RepetitionRecord, detect_repetition, repetition_of_kind,
};
use crate::analysis::symmetry::{
    SymmetryRecord, SymmetryTolerance, analyze_points, centroid, symmetry_of_kind,
};
use crate::io::configuration::LOOP_DEVIATION_RATIO;
use crate::math::tolerance::{mean, variance};
use crate::spatial::drawing::{Drawing, Point};
use crate::spatial::grid::GridSpec;
use serde::Serialize;
use std::fmt;

/// Five structural flags describing how a pattern is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct PatternAttributes {
    /// The drawing closes back on itself
    pub looped_traversal: bool,
    /// The drawing repeats over the grid
    pub grid_repetition: bool,
    /// Rotational symmetry
    pub rotational_symmetry: bool,
    /// Mirror symmetry about both axes
    pub bilateral_symmetry: bool,
    /// Mirror symmetry about the diagonals
    pub diagonal_symmetry: bool,
}

impl PatternAttributes {
    const fn from_flags(flags: [bool; 5]) -> Self {
        let [
            looped_traversal,
            grid_repetition,
            rotational_symmetry,
            bilateral_symmetry,
            diagonal_symmetry,
        ] = flags;
        Self {
            looped_traversal,
            grid_repetition,
            rotational_symmetry,
            bilateral_symmetry,
            diagonal_symmetry,
        }
    }

    /// Design attributes of a known kind
    pub const fn of_kind(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Basic | PatternKind::Diamond => {
                Self::from_flags([true, true, false, true, true])
            }
            PatternKind::Spiral | PatternKind::Rose => {
                Self::from_flags([false, false, true, false, false])
            }
            PatternKind::Flower | PatternKind::Lotus => {
                Self::from_flags([false, true, true, true, false])
            }
            PatternKind::Star => Self::from_flags([true, true, true, true, true]),
            PatternKind::Sunburst | PatternKind::Mandala => {
                Self::from_flags([false, true, true, true, true])
            }
            PatternKind::Compass => Self::from_flags([false, true, false, true, true]),
        }
    }

    /// Attributes measured on a coordinate set
    pub fn measured(
        points: &[Point],
        symmetry: SymmetryRecord,
        repetition: &RepetitionRecord,
    ) -> Self {
        Self {
            looped_traversal: looped_traversal(points),
            grid_repetition: repetition.has_repetition,
            rotational_symmetry: symmetry.radial,
            bilateral_symmetry: symmetry.bilateral(),
            diagonal_symmetry: symmetry.diagonal,
        }
    }
}

/// Whether points sit at nearly equal distances from their centroid
///
/// True when the standard deviation of the centroid distances is below
/// [`LOOP_DEVIATION_RATIO`] times their mean.
pub fn looped_traversal(points: &[Point]) -> bool {
    if points.len() < 3 {
        return false;
    }
    let Some(center) = centroid(points) else {
        return false;
    };
    let distances: Vec<f64> = points.iter().map(|point| point.distance(center)).collect();
    match (mean(&distances), variance(&distances)) {
        (Some(average), Some(spread)) => spread.sqrt() < average * LOOP_DEVIATION_RATIO,
        _ => false,
    }
}

/// Overall label of a pattern whose kind is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SymmetryClass {
    /// Rotational symmetry
    Radial,
    /// Mirror symmetry about both axes
    Bilateral,
    /// Repeating structure without the symmetries above
    Repetitive,
    /// Only diagonal mirror symmetry
    Diagonal,
    /// None of the above
    Asymmetric,
}

impl SymmetryClass {
    /// First matching rule: radial, bilateral, repetitive, diagonal, asymmetric
    pub const fn from_analysis(symmetry: SymmetryRecord, has_repetition: bool) -> Self {
        if symmetry.radial {
            Self::Radial
        } else if symmetry.bilateral() {
            Self::Bilateral
        } else if has_repetition {
            Self::Repetitive
        } else if symmetry.diagonal {
            Self::Diagonal
        } else {
            Self::Asymmetric
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Radial => "Radial",
            Self::Bilateral => "Bilateral",
            Self::Repetitive => "Repetitive",
            Self::Diagonal => "Diagonal",
            Self::Asymmetric => "Asymmetric",
        }
    }
}

impl fmt::Display for SymmetryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Combined symmetry, repetition and attribute summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRecord {
    /// Kind name when known, otherwise the symmetry class label
    pub pattern_type: String,
    /// Structural flags
    pub attributes: PatternAttributes,
    /// Symmetry flags
    pub symmetry: SymmetryRecord,
    /// Repetition summary
    pub repetition: RepetitionRecord,
}

/// Classifier with injectable tolerances
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PatternClassifier {
    /// Tolerances of the symmetry checks
    pub symmetry: SymmetryTolerance,
    /// Tolerances of the repetition checks
    pub motif: MotifTolerance,
}

impl PatternClassifier {
    /// Classify a known kind from its static tables
    pub fn classify_kind(&self, kind: PatternKind) -> ClassificationRecord {
        ClassificationRecord {
            pattern_type: kind.name().to_string(),
            attributes: PatternAttributes::of_kind(kind),
            symmetry: symmetry_of_kind(kind),
            repetition: repetition_of_kind(kind),
        }
    }

    /// Classify a coordinate set laid out on a `grid_size` grid
    pub fn classify_points(&self, points: &[Point], grid_size: usize) -> ClassificationRecord {
        let symmetry = analyze_points(points, self.symmetry);
        let repetition = detect_repetition(points, grid_size, self.motif);
        let class = SymmetryClass::from_analysis(symmetry, repetition.has_repetition);
        ClassificationRecord {
            pattern_type: class.label().to_string(),
            attributes: PatternAttributes::measured(points, symmetry, &repetition),
            symmetry,
            repetition,
        }
    }

    /// Classify with the kind tables when the kind is known
    pub fn classify(
        &self,
        points: &[Point],
        grid_size: usize,
        kind: Option<PatternKind>,
    ) -> ClassificationRecord {
        kind.map_or_else(
            || self.classify_points(points, grid_size),
            |kind| self.classify_kind(kind),
        )
    }
}

/// Classify with default tolerances
pub fn classify(points: &[Point], grid_size: usize, kind: Option<PatternKind>) -> ClassificationRecord {
    PatternClassifier::default().classify(points, grid_size, kind)
}

/// A generated drawing together with its classification
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedPattern {
    /// Complete drawing, grid dots included
    pub drawing: Drawing,
    /// Classification of the pattern on its grid
    pub classification: ClassificationRecord,
}

/// Generate `kind` on `grid` and classify it
pub fn analyze_pattern(grid: GridSpec, kind: PatternKind) -> AnalyzedPattern {
    AnalyzedPattern {
        drawing: render(grid, kind, true),
        classification: classify(&grid.dots(), grid.size(), Some(kind)),
    }
}
