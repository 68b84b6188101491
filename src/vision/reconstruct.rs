//! Image-to-pattern reconstruction and display of the recovered graph

use crate::io::configuration::RECONSTRUCTION_MARGIN;
use crate::spatial::drawing::{Color, Drawing, Point, Primitive, Stroke, bounding_box};
use crate::vision::detector::{DetectionStage, DotDetector};
use crate::vision::graph::{GraphConfig, ProximityGraph};
use crate::vision::inference::{InferenceResult, infer};
use serde::Serialize;
use tracing::{info, warn};

const EDGE_COLOR: Color = Color::hex(0x00_00_FF);
const NODE_COLOR: Color = Color::hex(0xFF_00_00);

/// Result of reconstructing a pattern from an uploaded image
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReconstructionOutcome {
    /// The image decoded and was analysed
    Success {
        /// Detected dot centres
        dots: Vec<Point>,
        /// Proximity graph over the dots
        graph: ProximityGraph,
        /// Inferred pattern information
        inference: InferenceResult,
    },
    /// The image could not be decoded
    Failure {
        /// Reason for the failure
        message: String,
    },
}

impl ReconstructionOutcome {
    /// Whether reconstruction succeeded
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Detector and graph settings used together
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reconstructor {
    /// Dot detection
    pub detector: DotDetector,
    /// Graph construction
    pub graph: GraphConfig,
}

impl Reconstructor {
    /// Decode, detect, connect and infer
    ///
    /// A decode failure is reported as [`ReconstructionOutcome::Failure`];
    /// every later stage always produces data.
    pub fn reconstruct(&self, bytes: &[u8]) -> ReconstructionOutcome {
        let image = match image::load_from_memory(bytes) {
            Ok(image) => image,
            Err(error) => {
                warn!(%error, "reconstruction input could not be decoded");
                return ReconstructionOutcome::Failure {
                    message: format!("Image processing failed: {error}"),
                };
            }
        };

        let detection = self.detector.detect(&image);
        if detection.stage == DetectionStage::Fallback {
            warn!("reconstruction is using the fallback dot set");
        }
        let graph = ProximityGraph::build(&detection.dots, self.graph);
        let inference = infer(&graph);
        info!(
            dots = detection.dots.len(),
            edges = graph.edge_count(),
            pattern = %inference.pattern_type,
            "pattern reconstructed"
        );

        ReconstructionOutcome::Success {
            dots: detection.dots,
            graph,
            inference,
        }
    }
}

/// Reconstruct with default settings
pub fn reconstruct(bytes: &[u8]) -> ReconstructionOutcome {
    Reconstructor::default().reconstruct(bytes)
}

/// Render a graph as blue edges and red nodes, shifted so the dot bounding box
/// starts one margin in from the canvas corner
///
/// An empty graph gives an empty drawing.
pub fn graph_drawing(graph: &ProximityGraph) -> Drawing {
    let nodes = graph.nodes();
    let Some((min, max)) = bounding_box(nodes) else {
        return Drawing::new(0.0, 0.0);
    };
    let margin = RECONSTRUCTION_MARGIN;
    let place = |point: Point| point.offset(margin - min.x, margin - min.y);
    let mut drawing = Drawing::new(
        2.0f64.mul_add(margin, max.x - min.x),
        2.0f64.mul_add(margin, max.y - min.y),
    );

    drawing.extend(graph.edges().iter().filter_map(|edge| {
        let (from, to) = graph.endpoints(edge)?;
        Some(Primitive::Line {
            from: place(from),
            to: place(to),
            stroke: Stroke::solid(EDGE_COLOR, 2.0),
        })
    }));
    drawing.extend(nodes.iter().map(|&node| Primitive::Circle {
        center: place(node),
        radius: 3.0,
        fill: Some(NODE_COLOR),
        stroke: None,
    }));
    drawing
}
