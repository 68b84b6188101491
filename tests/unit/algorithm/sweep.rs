//! Tests for spiral and rose sweep templates

#[cfg(test)]
mod tests {
    use kolam::algorithm::sweep::{Rose, Spiral};
    use kolam::algorithm::template::{PatternTemplate, Reveal};
    use kolam::spatial::drawing::{Drawing, Primitive};
    use kolam::spatial::grid::GridSpec;

    // Tests the spiral is one open path of 144 samples starting at the centre
    #[test]
    fn test_spiral_path() {
        let grid = GridSpec::new(7);
        let spiral = Spiral::new(grid);
        assert_eq!(spiral.element_count(), 144);

        let mut drawing = Drawing::new(0.0, 0.0);
        spiral.emit(Reveal::complete(144), &mut drawing);
        assert_eq!(drawing.len(), 1);

        let Some(Primitive::Polyline { points, closed, .. }) = drawing.primitives().first() else {
            unreachable!("Spiral should be a polyline");
        };
        assert!(!*closed);
        assert_eq!(points.len(), 144);
        assert_eq!(points.first(), Some(&grid.center()));
        let outermost = points
            .iter()
            .map(|point| point.distance(grid.center()))
            .fold(0.0, f64::max);
        assert!(outermost < grid.radius(0.8));
    }

    // Tests an empty reveal draws nothing
    #[test]
    fn test_spiral_empty_reveal() {
        let mut drawing = Drawing::new(0.0, 0.0);
        Spiral::new(GridSpec::new(7)).emit(Reveal::at_progress(0.0, 144), &mut drawing);
        assert!(drawing.is_empty());
    }

    // Tests the rose path is followed by a petal pair every 20 degrees
    #[test]
    fn test_rose_petals() {
        let rose = Rose::new(GridSpec::new(9));
        assert_eq!(rose.element_count(), 720);

        let mut drawing = Drawing::new(0.0, 0.0);
        rose.emit(Reveal::complete(720), &mut drawing);

        let curves = drawing
            .iter()
            .filter(|primitive| matches!(primitive, Primitive::QuadraticCurve { .. }))
            .count();
        assert_eq!(curves, 144);
        assert!(matches!(
            drawing.primitives().first(),
            Some(Primitive::Polyline { .. })
        ));
    }

    // Tests a partial rose only carries petals for revealed samples
    #[test]
    fn test_rose_partial() {
        let mut drawing = Drawing::new(0.0, 0.0);
        let reveal = Reveal {
            elements: 11,
            finale: false,
        };
        Rose::new(GridSpec::new(9)).emit(reveal, &mut drawing);

        // Samples 0..=20 degrees in 2 degree steps: petals at 0 and 20
        assert_eq!(drawing.len(), 1 + 4);
    }
}
