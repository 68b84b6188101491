//! Proximity graph over detected dots

use crate::io::configuration::EDGE_DISTANCE_THRESHOLD;
use crate::spatial::drawing::Point;
use serde::Serialize;

/// Graph construction thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// Dots at most this far apart are connected
    pub edge_distance: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            edge_distance: EDGE_DISTANCE_THRESHOLD,
        }
    }
}

/// Undirected edge between two node indices, `from < to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Smaller node index
    pub from: usize,
    /// Larger node index
    pub to: usize,
    /// Euclidean length
    pub distance: f64,
}

/// Dots as nodes, connected when close enough; no self-loops
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProximityGraph {
    nodes: Vec<Point>,
    edges: Vec<Edge>,
}

impl ProximityGraph {
    /// Connect every pair of dots no farther apart than `config.edge_distance`
    pub fn build(dots: &[Point], config: GraphConfig) -> Self {
        let edges = dots
            .iter()
            .enumerate()
            .flat_map(|(from, &a)| {
                dots.iter()
                    .enumerate()
                    .skip(from + 1)
                    .filter_map(move |(to, &b)| {
                        let distance = a.distance(b);
                        (distance <= config.edge_distance).then_some(Edge { from, to, distance })
                    })
            })
            .collect();
        Self {
            nodes: dots.to_vec(),
            edges,
        }
    }

    /// Node positions by index
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Edges in `(from, to)` lexicographic order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges touching `node`
    pub fn degree(&self, node: usize) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.from == node || edge.to == node)
            .count()
    }

    /// Endpoint positions of an edge
    pub fn endpoints(&self, edge: &Edge) -> Option<(Point, Point)> {
        Some((*self.nodes.get(edge.from)?, *self.nodes.get(edge.to)?))
    }
}
