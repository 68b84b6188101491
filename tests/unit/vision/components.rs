//! Tests for connected component labelling

#[cfg(test)]
mod tests {
    use kolam::spatial::drawing::Point;
    use kolam::vision::components::connected_components;
    use kolam::vision::raster::Mask;
    use ndarray::Array2;

    // Tests two separate squares are found in raster order
    #[test]
    fn test_two_components() {
        let mask: Mask = Array2::from_shape_fn((10, 10), |(row, col)| {
            (row < 3 && col < 3) || ((6..8).contains(&row) && (5..9).contains(&col))
        });
        let components = connected_components(&mask);

        assert_eq!(components.len(), 2);
        let first = components.first().expect("First component");
        assert_eq!(first.area, 9);
        assert_eq!(first.centroid, Point::new(1.0, 1.0));
        let second = components.get(1).expect("Second component");
        assert_eq!(second.area, 8);
        assert_eq!(second.centroid, Point::new(6.5, 6.5));
        assert_eq!(second.truncated_centroid(), Point::new(6.0, 6.0));
    }

    // Tests diagonal neighbours are separate components
    #[test]
    fn test_four_connectivity() {
        let mask: Mask = Array2::from_shape_fn((2, 2), |(row, col)| row == col);
        assert_eq!(connected_components(&mask).len(), 2);
        assert!(connected_components(&Array2::from_elem((3, 3), false)).is_empty());
    }

    // Tests round blobs score higher circularity than thin lines
    #[test]
    fn test_circularity() {
        let disc: Mask = Array2::from_shape_fn((21, 21), |(row, col)| {
            let (dy, dx) = (row as f64 - 10.0, col as f64 - 10.0);
            dx.hypot(dy) <= 8.0
        });
        let line: Mask = Array2::from_shape_fn((3, 21), |(row, _)| row == 1);

        let round = connected_components(&disc);
        let thin = connected_components(&line);
        let round_blob = round.first().expect("Disc component");
        let thin_blob = thin.first().expect("Line component");

        assert!(round_blob.circularity() > 0.8);
        assert!(thin_blob.circularity() < 0.2);
        assert!((round_blob.equivalent_radius() - 8.0).abs() < 0.5);
    }
}
