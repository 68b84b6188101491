//! Tests for tiered dot detection

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage};
    use kolam::spatial::drawing::Point;
    use kolam::vision::detector::{DetectionStage, DotDetector, deduplicate, fallback_dots};

    fn dot_image(centres: &[(i64, i64)], radius: i64) -> DynamicImage {
        let mut image = RgbImage::from_pixel(240, 240, Rgb([255, 255, 255]));
        for &(cx, cy) in centres {
            for y in (cy - radius)..=(cy + radius) {
                for x in (cx - radius)..=(cx + radius) {
                    if (x - cx).pow(2) + (y - cy).pow(2) <= radius * radius {
                        image.put_pixel(x as u32, y as u32, Rgb([0, 0, 0]));
                    }
                }
            }
        }
        DynamicImage::ImageRgb8(image)
    }

    // Tests the first point wins and the distance bound is exclusive
    #[test]
    fn test_deduplicate() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(15.0, 0.0),
            Point::new(14.9, 0.1),
            Point::new(0.0, 14.0),
        ];
        let kept = deduplicate(&points, 15.0);

        assert_eq!(kept, vec![Point::new(0.0, 0.0), Point::new(15.0, 0.0)]);
    }

    // Tests a grid of round dots is found by the blob tier
    #[test]
    fn test_blob_stage_finds_grid() {
        let centres: Vec<(i64, i64)> = (0..3)
            .flat_map(|row| (0..3).map(move |col| (80 + col * 40, 80 + row * 40)))
            .collect();
        let detection = DotDetector::default().detect(&dot_image(&centres, 6));

        assert_eq!(detection.stage, DetectionStage::Blob);
        assert_eq!(detection.dots.len(), 9);
        for (cx, cy) in centres {
            let expected = Point::new(cx as f64, cy as f64);
            assert!(
                detection
                    .dots
                    .iter()
                    .any(|dot| dot.distance(expected) <= 1.0),
                "Missing dot near {expected:?}"
            );
        }
    }

    // Tests a blank image gives the fallback set
    #[test]
    fn test_blank_image_fallback() {
        let detection = DotDetector::default().detect(&dot_image(&[], 6));

        assert_eq!(detection.stage, DetectionStage::Fallback);
        assert_eq!(detection.dots, fallback_dots());
    }

    // Tests undecodable bytes give the fallback set
    #[test]
    fn test_bad_bytes_fallback() {
        let detection = DotDetector::default().detect_from_bytes(b"not an image");

        assert_eq!(detection.stage, DetectionStage::Fallback);
        assert_eq!(detection.dots.len(), 5);
        assert_eq!(detection.dots.first(), Some(&Point::new(100.0, 100.0)));
    }
}
