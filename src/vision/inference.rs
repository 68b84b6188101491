//! Best-guess pattern family and suggestions from proximity-graph statistics

use crate::algorithm::kind::PatternKind;
use crate::analysis::symmetry::{SymmetryRecord, analyze_image_points, centroid};
use crate::io::configuration::MAX_SUGGESTIONS;
use crate::math::tolerance::{mean, variance};
use crate::spatial::drawing::{Point, bounding_box};
use crate::vision::graph::ProximityGraph;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Structural guess for a detected dot graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphShape {
    /// Radial and densely connected
    Mandala,
    /// Radial with more edges than nodes
    Sunburst,
    /// Radial and sparse
    Star,
    /// Elongated bounding box
    Spiral,
    /// No edges at all
    IsolatedDots,
    /// Exactly `n - 1` edges
    Tree,
    /// More than `1.5 n` edges
    ComplexGraph,
    /// Anything else
    SimpleGraph,
    /// Too few dots to judge
    Unknown,
}

impl GraphShape {
    /// Lowercase identifier used in reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mandala => "mandala",
            Self::Sunburst => "sunburst",
            Self::Star => "star",
            Self::Spiral => "spiral",
            Self::IsolatedDots => "isolated_dots",
            Self::Tree => "tree",
            Self::ComplexGraph => "complex_graph",
            Self::SimpleGraph => "simple_graph",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GraphShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything inferred about a dot graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceResult {
    /// Structural guess
    pub pattern_type: GraphShape,
    /// `10 * edges / max(nodes, 1)`
    pub complexity: f64,
    /// Node count
    pub node_count: usize,
    /// Edge count
    pub edge_count: usize,
    /// Symmetry of the dot centres; the diagonal flag is never set
    pub symmetry: SymmetryRecord,
    /// Up to five distinct pattern kinds worth trying
    pub suggested_patterns: Vec<PatternKind>,
}

/// `10 * edges / max(nodes, 1)`
pub fn complexity(node_count: usize, edge_count: usize) -> f64 {
    edge_count as f64 / node_count.max(1) as f64 * 10.0
}

/// Width over height of the bounding box; 1 when the height is zero
pub fn aspect_ratio(points: &[Point]) -> f64 {
    let Some((min, max)) = bounding_box(points) else {
        return 1.0;
    };
    let height = max.y - min.y;
    if height > 0.0 {
        (max.x - min.x) / height
    } else {
        1.0
    }
}

/// Classify graph structure; rules are tried in order and the first wins
///
/// Points whose centroid distances vary little (population variance below a
/// tenth of the mean distance) are radial: mandala when edges exceed `2 n`,
/// sunburst when they exceed `n`, star otherwise. Then an aspect ratio above
/// 1.5 or below 0.67 means spiral, followed by the edge-count rules.
pub fn infer_shape(points: &[Point], edge_count: usize) -> GraphShape {
    let node_count = points.len();
    if node_count < 3 {
        return GraphShape::Unknown;
    }
    let Some(center) = centroid(points) else {
        return GraphShape::Unknown;
    };
    let distances: Vec<f64> = points.iter().map(|point| point.distance(center)).collect();
    let (Some(average), Some(spread)) = (mean(&distances), variance(&distances)) else {
        return GraphShape::Unknown;
    };
    let ratio = aspect_ratio(points);
    let edges = edge_count as f64;
    let nodes = node_count as f64;

    if spread < average * 0.1 {
        if edges > nodes * 2.0 {
            GraphShape::Mandala
        } else if edges > nodes {
            GraphShape::Sunburst
        } else {
            GraphShape::Star
        }
    } else if !(0.67..=1.5).contains(&ratio) {
        GraphShape::Spiral
    } else if edge_count == 0 {
        GraphShape::IsolatedDots
    } else if edge_count == node_count - 1 {
        GraphShape::Tree
    } else if edges > nodes * 1.5 {
        GraphShape::ComplexGraph
    } else {
        GraphShape::SimpleGraph
    }
}

/// Ranked pattern kinds for a graph, deduplicated by first mention
pub fn suggest_patterns(
    shape: GraphShape,
    symmetry: SymmetryRecord,
    complexity: f64,
    node_count: usize,
) -> Vec<PatternKind> {
    use PatternKind::{Basic, Compass, Diamond, Flower, Lotus, Mandala, Rose, Spiral, Star, Sunburst};

    let mut candidates: Vec<PatternKind> = Vec::new();

    if symmetry.radial {
        if complexity > 5.0 {
            candidates.extend([Mandala, Sunburst]);
        } else {
            candidates.extend([Star, Flower]);
        }
    }
    if symmetry.bilateral() {
        if complexity > 3.0 {
            candidates.extend([Basic, Diamond]);
        } else {
            candidates.push(Compass);
        }
    }

    match shape {
        GraphShape::Mandala => candidates.extend([Mandala, Sunburst, Star]),
        GraphShape::Star => candidates.extend([Star, Sunburst, Compass]),
        GraphShape::Spiral => candidates.extend([Spiral, Rose]),
        GraphShape::Tree => candidates.extend([Flower, Lotus]),
        GraphShape::ComplexGraph => candidates.extend([Mandala, Basic, Diamond]),
        GraphShape::Sunburst
        | GraphShape::IsolatedDots
        | GraphShape::SimpleGraph
        | GraphShape::Unknown => {}
    }

    if complexity > 7.0 {
        candidates.extend([Mandala, Lotus, Rose]);
    } else if complexity > 4.0 {
        candidates.extend([Star, Sunburst, Flower]);
    } else {
        candidates.extend([Basic, Diamond, Compass]);
    }

    if node_count > 20 {
        candidates.extend([Mandala, Lotus]);
    } else if node_count > 10 {
        candidates.extend([Star, Sunburst, Flower]);
    } else {
        candidates.extend([Basic, Diamond, Compass]);
    }

    let mut suggestions: Vec<PatternKind> = Vec::with_capacity(MAX_SUGGESTIONS);
    for kind in candidates {
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
        if !suggestions.contains(&kind) {
            suggestions.push(kind);
        }
    }
    suggestions
}

/// Infer shape, complexity, symmetry and suggestions for a graph
///
/// Graphs with fewer than two nodes are unknown with nothing to suggest.
pub fn infer(graph: &ProximityGraph) -> InferenceResult {
    let node_count = graph.node_count();
    let edge_count = graph.edge_count();

    if node_count < 2 {
        return InferenceResult {
            pattern_type: GraphShape::Unknown,
            complexity: 0.0,
            node_count,
            edge_count,
            symmetry: SymmetryRecord::NONE,
            suggested_patterns: Vec::new(),
        };
    }

    let pattern_type = infer_shape(graph.nodes(), edge_count);
    let complexity = complexity(node_count, edge_count);
    let symmetry = analyze_image_points(graph.nodes());
    let suggested_patterns = suggest_patterns(pattern_type, symmetry, complexity, node_count);
    debug!(%pattern_type, complexity, node_count, edge_count, "graph inferred");

    InferenceResult {
        pattern_type,
        complexity,
        node_count,
        edge_count,
        symmetry,
        suggested_patterns,
    }
}
