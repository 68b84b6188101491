//! Tests for symmetry axis overlays

#[cfg(test)]
mod tests {
    use kolam::algorithm::generator::render;
    use kolam::algorithm::kind::PatternKind;
    use kolam::algorithm::overlay::{highlight_symmetry, symmetry_axes};
    use kolam::analysis::symmetry::{SymmetryRecord, symmetry_of_kind};
    use kolam::spatial::drawing::Primitive;
    use kolam::spatial::grid::GridSpec;

    // Tests no guides are drawn without symmetry
    #[test]
    fn test_no_symmetry_no_guides() {
        assert!(symmetry_axes(GridSpec::new(7), SymmetryRecord::NONE).is_empty());
    }

    // Tests every flag contributes its guides, all dashed
    #[test]
    fn test_full_symmetry_guides() {
        let guides = symmetry_axes(GridSpec::new(7), symmetry_of_kind(PatternKind::Mandala));

        assert_eq!(guides.len(), 5);
        assert!(guides
            .iter()
            .all(|guide| guide.stroke().is_some_and(|stroke| stroke.dashed)));
        assert!(matches!(guides.last(), Some(Primitive::Circle { .. })));
    }

    // Tests the horizontal guide passes through the centre dot
    #[test]
    fn test_horizontal_guide_position() {
        let grid = GridSpec::new(5);
        let record = SymmetryRecord {
            horizontal: true,
            ..SymmetryRecord::NONE
        };
        let guides = symmetry_axes(grid, record);

        assert!(matches!(
            guides.as_slice(),
            [Primitive::Line { from, to, .. }]
                if (from.y - 100.0).abs() < f64::EPSILON && (to.x - 240.0).abs() < f64::EPSILON
        ));
    }

    // Tests highlighting appends guides on top of the drawing
    #[test]
    fn test_highlight_appends() {
        let grid = GridSpec::new(7);
        let mut drawing = render(grid, PatternKind::Spiral, false);
        let before = drawing.len();
        highlight_symmetry(&mut drawing, grid, symmetry_of_kind(PatternKind::Spiral));

        assert_eq!(drawing.len(), before + 1);
    }
}
