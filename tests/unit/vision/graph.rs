//! Tests for proximity graph construction

#[cfg(test)]
mod tests {
    use kolam::spatial::drawing::Point;
    use kolam::vision::graph::{GraphConfig, ProximityGraph};

    // Tests the distance threshold is inclusive
    #[test]
    fn test_threshold_inclusive() {
        let dots = [
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(0.0, 50.0001),
        ];
        let graph = ProximityGraph::build(&dots, GraphConfig::default());

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edges().first().expect("One edge");
        assert_eq!((edge.from, edge.to), (0, 1));
        assert!((edge.distance - 50.0).abs() < f64::EPSILON);
    }

    // Tests edges are ordered pairs without self-loops and degrees add up
    #[test]
    fn test_grid_edges() {
        let dots: Vec<Point> = (0..3)
            .flat_map(|row| (0..3).map(move |col| Point::new(f64::from(col) * 40.0, f64::from(row) * 40.0)))
            .collect();
        let graph = ProximityGraph::build(&dots, GraphConfig::default());

        assert_eq!(graph.edge_count(), 12);
        assert!(graph.edges().iter().all(|edge| edge.from < edge.to));
        assert_eq!(graph.degree(4), 4);
        assert_eq!(graph.degree(0), 2);
        let total: usize = (0..graph.node_count()).map(|node| graph.degree(node)).sum();
        assert_eq!(total, 2 * graph.edge_count());
    }

    // Tests endpoint lookup and custom thresholds
    #[test]
    fn test_endpoints_and_config() {
        let dots = [Point::new(0.0, 0.0), Point::new(80.0, 0.0)];
        let wide = ProximityGraph::build(&dots, GraphConfig { edge_distance: 100.0 });
        let edge = wide.edges().first().expect("One edge");

        assert_eq!(wide.endpoints(edge), Some((Point::new(0.0, 0.0), Point::new(80.0, 0.0))));
        assert_eq!(ProximityGraph::build(&dots, GraphConfig::default()).edge_count(), 0);
        assert_eq!(ProximityGraph::build(&[], GraphConfig::default()).node_count(), 0);
    }
}
