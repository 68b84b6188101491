//! Tests for SVG document serialization

#[cfg(test)]
mod tests {
    use kolam::algorithm::generator::render;
    use kolam::algorithm::kind::PatternKind;
    use kolam::io::svg::{element, to_svg, write_svg};
    use kolam::spatial::drawing::{Color, Drawing, Point, Primitive, Stroke};
    use kolam::spatial::grid::GridSpec;

    // Tests closed polylines become polygons and open ones polylines
    #[test]
    fn test_polyline_elements() {
        let stroke = Stroke::solid(Color::hex(0x4B_00_82), 2.0);
        let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 5.5)];
        let closed = element(&Primitive::Polyline {
            points: points.clone(),
            closed: true,
            stroke,
        });
        let open = element(&Primitive::Polyline {
            points,
            closed: false,
            stroke,
        });

        assert!(closed.starts_with("<polygon"));
        assert!(closed.contains(r#"points="0,0 10,5.5""#));
        assert!(closed.contains(r##"stroke="#4B0082""##));
        assert!(open.starts_with("<polyline"));
        assert!(open.contains(r#"fill="none""#));
    }

    // Tests curves map to quadratic path commands
    #[test]
    fn test_curve_element() {
        let svg = element(&Primitive::QuadraticCurve {
            start: Point::new(1.0, 2.0),
            control: Point::new(3.0, 4.0),
            end: Point::new(5.0, 6.0),
            stroke: Stroke::solid(Color::hsl(45.0, 70, 50), 2.0),
        });

        assert!(svg.contains(r#"d="M 1 2 Q 3 4 5 6""#));
        assert!(svg.contains("hsl(45, 70%, 50%)"));
    }

    // Tests dashed strokes carry a dash pattern
    #[test]
    fn test_dashed_line() {
        let svg = element(&Primitive::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 1.0),
            stroke: Stroke::dashed(Color::hex(0xFF_00_00), 2.0),
        });

        assert!(svg.starts_with("<line"));
        assert!(svg.contains("stroke-dasharray"));
    }

    // Tests circles without fill and labels with escaped text
    #[test]
    fn test_circle_and_label() {
        let circle = element(&Primitive::Circle {
            center: Point::new(5.0, 5.0),
            radius: 3.0,
            fill: None,
            stroke: None,
        });
        let label = element(&Primitive::Label {
            position: Point::new(0.0, 0.0),
            text: "N & <S>".to_string(),
            color: Color::hex(0),
            font_size: 12.0,
        });

        assert!(circle.contains(r#"fill="none""#));
        assert!(!circle.contains("stroke="));
        assert!(label.contains("N &amp; &lt;S&gt;"));
        assert!(label.contains(r#"font-size="12""#));
    }

    // Tests the document wraps one element per primitive over a white background
    #[test]
    fn test_document() {
        let drawing = render(GridSpec::new(5), PatternKind::Basic, true);
        let document = to_svg(&drawing);

        assert!(document.starts_with(r#"<svg width="240" height="240""#));
        assert!(document.contains(r#"fill="white""#));
        assert_eq!(document.lines().count(), drawing.len() + 3);
        assert!(document.trim_end().ends_with("</svg>"));
    }

    // Tests identical drawings serialize to identical documents
    #[test]
    fn test_deterministic() {
        let grid = GridSpec::new(11);
        assert_eq!(
            to_svg(&render(grid, PatternKind::Lotus, false)),
            to_svg(&render(grid, PatternKind::Lotus, false))
        );
        assert_eq!(to_svg(&Drawing::new(1.0, 1.0)).lines().count(), 3);
    }

    // Tests writing creates missing parent directories
    #[test]
    fn test_write_svg() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("compass.svg");
        let drawing = render(GridSpec::new(7), PatternKind::Compass, false);

        write_svg(&drawing, &path).expect("Failed to write svg");
        let written = std::fs::read_to_string(&path).expect("Failed to read svg");
        assert_eq!(written, to_svg(&drawing));
    }
}
