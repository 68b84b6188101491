//! Tests for reveal arithmetic and the default template emission loop

#[cfg(test)]
mod tests {
    use kolam::algorithm::template::{PatternTemplate, Reveal};
    use kolam::spatial::drawing::{Color, Drawing, Point, Primitive};

    struct Dots(usize);

    impl PatternTemplate for Dots {
        fn element_count(&self) -> usize {
            self.0
        }

        fn emit_element(&self, index: usize, drawing: &mut Drawing) {
            drawing.push(Primitive::Circle {
                center: Point::new(index as f64, 0.0),
                radius: 1.0,
                fill: Some(Color::hex(0)),
                stroke: None,
            });
        }

        fn emit_finale(&self, drawing: &mut Drawing) {
            drawing.push(Primitive::Label {
                position: Point::new(0.0, 0.0),
                text: "end".to_string(),
                color: Color::hex(0),
                font_size: 8.0,
            });
        }
    }

    // Tests element counts are floored and the finale starts at 0.8
    #[test]
    fn test_reveal_at_progress() {
        assert_eq!(
            Reveal::at_progress(0.5, 7),
            Reveal {
                elements: 3,
                finale: false
            }
        );
        assert_eq!(Reveal::at_progress(0.8, 10).elements, 8);
        assert!(Reveal::at_progress(0.8, 10).finale);
        assert!(!Reveal::at_progress(0.79, 10).finale);
        assert_eq!(Reveal::at_progress(0.0, 10).elements, 0);
    }

    // Tests out-of-range progress is clamped
    #[test]
    fn test_reveal_clamps() {
        assert_eq!(Reveal::at_progress(2.0, 4), Reveal::complete(4));
        assert_eq!(Reveal::at_progress(-1.0, 4).elements, 0);
        assert_eq!(Reveal::at_progress(f64::NAN, 4).elements, 0);
    }

    // Tests the default emit draws a prefix and then the finale
    #[test]
    fn test_default_emit() {
        let template = Dots(5);
        let mut partial = Drawing::new(10.0, 10.0);
        template.emit(
            Reveal {
                elements: 2,
                finale: false,
            },
            &mut partial,
        );
        assert_eq!(partial.len(), 2);

        let mut complete = Drawing::new(10.0, 10.0);
        template.emit(Reveal::complete(99), &mut complete);
        assert_eq!(complete.len(), 6, "Elements beyond the count are ignored");
        assert!(matches!(complete.iter().last(), Some(Primitive::Label { .. })));
    }
}
