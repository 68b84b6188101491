//! Tests for points, colours and the drawing value type

#[cfg(test)]
mod tests {
    use kolam::spatial::drawing::{Color, Drawing, Point, Primitive, Stroke, bounding_box};

    // Tests distance and offset arithmetic
    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(0.0, 0.0);
        let b = Point::from((3.0, 4.0));

        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(b.offset(1.0, -1.0), Point::new(4.0, 3.0));
    }

    // Tests bounding box corners and the empty case
    #[test]
    fn test_bounding_box() {
        let points = [
            Point::new(5.0, 1.0),
            Point::new(-2.0, 7.0),
            Point::new(3.0, -4.0),
        ];

        assert_eq!(
            bounding_box(&points),
            Some((Point::new(-2.0, -4.0), Point::new(5.0, 7.0)))
        );
        assert_eq!(bounding_box(&[]), None);
    }

    // Tests hues wrap modulo 360
    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(Color::hsl(390.0, 70, 50).hue(), Some(30.0));
        assert_eq!(Color::hsl(-30.0, 70, 50).hue(), Some(330.0));
        assert_eq!(Color::hex(0x12_34_56).hue(), None);
    }

    // Tests CSS output for both colour forms
    #[test]
    fn test_css() {
        assert_eq!(Color::hex(0x8B_45_13).css(), "#8B4513");
        assert_eq!(Color::hsl(45.0, 70, 50).css(), "hsl(45, 70%, 50%)");
    }

    // Tests HSL to RGB conversion for primaries and grey
    #[test]
    fn test_to_rgb() {
        assert_eq!(Color::hsl(0.0, 100, 50).to_rgb(), [255, 0, 0]);
        assert_eq!(Color::hsl(120.0, 100, 50).to_rgb(), [0, 255, 0]);
        assert_eq!(Color::hsl(240.0, 100, 50).to_rgb(), [0, 0, 255]);
        assert_eq!(Color::hsl(77.0, 0, 100).to_rgb(), [255, 255, 255]);
        assert_eq!(Color::hex(0xFF_D7_00).to_rgb(), [255, 215, 0]);
    }

    // Tests primitives report anchors and strokes
    #[test]
    fn test_primitive_anchors() {
        let stroke = Stroke::solid(Color::hex(0), 2.0);
        let curve = Primitive::QuadraticCurve {
            start: Point::new(0.0, 0.0),
            control: Point::new(1.0, 1.0),
            end: Point::new(2.0, 0.0),
            stroke,
        };
        let disc = Primitive::Circle {
            center: Point::new(5.0, 5.0),
            radius: 2.0,
            fill: Some(Color::hex(0)),
            stroke: None,
        };

        assert_eq!(curve.anchor_points().len(), 3);
        assert_eq!(curve.stroke(), Some(&stroke));
        assert_eq!(disc.anchor_points(), vec![Point::new(5.0, 5.0)]);
        assert!(disc.stroke().is_none());
        assert!(Stroke::dashed(Color::hex(0), 1.0).dashed);
    }

    // Tests drawings keep paint order
    #[test]
    fn test_drawing_order() {
        let mut drawing = Drawing::new(100.0, 50.0);
        assert!(drawing.is_empty());

        let stroke = Stroke::solid(Color::hex(0), 1.0);
        drawing.push(Primitive::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 1.0),
            stroke,
        });
        drawing.extend([Primitive::Label {
            position: Point::new(2.0, 2.0),
            text: "N".to_string(),
            color: Color::hex(0),
            font_size: 10.0,
        }]);

        assert_eq!(drawing.len(), 2);
        assert!((drawing.width() - 100.0).abs() < f64::EPSILON);
        assert!(matches!(drawing.primitives().first(), Some(Primitive::Line { .. })));
        assert!(matches!(drawing.iter().last(), Some(Primitive::Label { .. })));
        assert_eq!((&drawing).into_iter().count(), 2);
    }
}
